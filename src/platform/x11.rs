// platform/x11.rs - X11 Overlay Implementation
//
// winit creates the segment windows and delivers their events; this side
// keeps its own x11rb connection for the things winit does not expose:
// colormap allocation, window backgrounds, stacking and raw input focus
// (including focus `None`). Requests issued here are confirmed before
// returning, so a repaint is on screen before the next event is read.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use winit::window::WindowId;
use x11rb::connection::Connection;
use x11rb::protocol::xproto::{
    ChangeWindowAttributesAux, ConfigureWindowAux, ConnectionExt as _, InputFocus, StackMode,
};
use x11rb::rust_connection::RustConnection;
use x11rb::{CURRENT_TIME, NONE};

use crate::color::{ColorPair, Palette, Rgb16};
use crate::error::FrameError;
use crate::window_manager::SegmentWindow;

use super::OverlaySurface;

/// Connection to the X server plus the default colormap of its screen
pub struct X11Display {
    conn: RustConnection,
    colormap: u32,
}

impl X11Display {
    /// Connect to `$DISPLAY`
    pub fn connect() -> Result<Self, FrameError> {
        let (conn, screen_num) =
            x11rb::connect(None).map_err(|e| FrameError::Connection(e.to_string()))?;

        let colormap = conn
            .setup()
            .roots
            .get(screen_num)
            .map(|screen| screen.default_colormap)
            .ok_or_else(|| FrameError::Connection(format!("screen {} does not exist", screen_num)))?;

        info!("Connected to X server, screen {}", screen_num);
        Ok(Self { conn, colormap })
    }

    /// Allocate both colors of the pair in the default colormap
    pub fn alloc_palette(&self, colors: &ColorPair) -> Result<Palette, FrameError> {
        let palette = Palette {
            primary: self.alloc_color(colors.primary)?,
            dimmed: self.alloc_color(colors.dimmed)?,
        };
        debug!("Allocated palette {:?} for {:?}", palette, colors);
        Ok(palette)
    }

    fn alloc_color(&self, color: Rgb16) -> Result<u32, FrameError> {
        let reply = self
            .conn
            .alloc_color(self.colormap, color.red, color.green, color.blue)
            .map_err(|e| FrameError::ColorAllocation(e.to_string()))?
            .reply()
            .map_err(|e| FrameError::ColorAllocation(e.to_string()))?;
        Ok(reply.pixel)
    }

    fn set_focus(&self, window: u32) -> Result<()> {
        self.conn
            .set_input_focus(InputFocus::PARENT, window, CURRENT_TIME)?
            .check()?;
        Ok(())
    }
}

/// The four mapped segment windows and the connection that paints them
pub struct X11Overlay {
    display: X11Display,
    segments: [SegmentWindow; 4],
}

impl X11Overlay {
    /// Paint every segment with `initial_pixel`, then map, raise and focus
    /// each visible one in layout order.
    ///
    /// On failure the segments are dropped with `self`, which destroys
    /// every window created so far.
    pub fn new(display: X11Display, segments: [SegmentWindow; 4], initial_pixel: u32) -> Result<Self> {
        let mut overlay = Self { display, segments };

        overlay
            .repaint(initial_pixel)
            .context("Failed to set initial border color")?;
        overlay.map_segments()?;

        info!("Overlay mapped ({} visible segments)", overlay.visible().count());
        Ok(overlay)
    }

    fn map_segments(&self) -> Result<()> {
        let conn = &self.display.conn;
        let raise = ConfigureWindowAux::new().stack_mode(StackMode::ABOVE);

        for segment in self.visible() {
            conn.map_window(segment.xid)?.check().with_context(|| {
                format!("Failed to map {} segment", segment.segment.name())
            })?;
            conn.configure_window(segment.xid, &raise)?.check()?;

            // The window manager may already be moving focus elsewhere
            if let Err(e) = self.display.set_focus(segment.xid) {
                warn!("Could not focus {} segment: {:#}", segment.segment.name(), e);
            }
            debug!("Mapped {} segment {:?}", segment.segment.name(), segment.rect);
        }
        Ok(())
    }

    fn visible(&self) -> impl Iterator<Item = &SegmentWindow> {
        self.segments.iter().filter(|s| s.is_visible())
    }

    /// Whether `id` belongs to one of the segment windows
    pub fn owns(&self, id: WindowId) -> bool {
        self.segments.iter().any(|s| s.id() == id)
    }

    pub fn segments(&self) -> &[SegmentWindow; 4] {
        &self.segments
    }
}

impl OverlaySurface for X11Overlay {
    fn repaint(&mut self, pixel: u32) -> Result<()> {
        let conn = &self.display.conn;
        let background = ChangeWindowAttributesAux::new()
            .background_pixel(pixel)
            .border_pixel(0);

        let mut cookies = Vec::with_capacity(self.segments.len() * 2);
        for segment in &self.segments {
            cookies.push(conn.change_window_attributes(segment.xid, &background)?);
            cookies.push(conn.clear_area(true, segment.xid, 0, 0, 0, 0)?);
        }
        for cookie in cookies {
            cookie.check()?;
        }

        debug!("Repainted border with pixel {:#08x}", pixel);
        Ok(())
    }

    fn request_focus(&mut self) -> Result<()> {
        // Zero-width segments are never mapped and cannot take focus
        match self.visible().next() {
            Some(first) => self.display.set_focus(first.xid),
            None => {
                warn!("No visible segment to focus");
                Ok(())
            }
        }
    }

    fn release_focus(&mut self) -> Result<()> {
        self.display.set_focus(NONE)
    }
}

impl Drop for X11Overlay {
    fn drop(&mut self) {
        if let Err(e) = self.display.conn.flush() {
            warn!("Failed to flush X connection on teardown: {}", e);
        }
        info!("Overlay windows destroyed");
    }
}
