// window_manager.rs - Segment Window Creation and Event Translation
//
// Each border side is its own borderless window:
// - override-redirect, so the window manager neither decorates nor moves it
// - tagged with a fixed WM_CLASS so WM rules can match it
// - created hidden; X11Overlay maps it once every window exists
//
// X11 rejects zero-sized windows, so an empty segment is created 1x1 and
// simply never mapped.

use anyhow::{anyhow, bail, ensure, Context, Result};
use log::{debug, info};
use raw_window_handle::{HasWindowHandle, RawWindowHandle};
use winit::{
    dpi::{PhysicalPosition, PhysicalSize},
    event::{ElementState, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowAttributes, WindowId, WindowLevel},
};

use crate::app::{KeyInput, OverlayEvent};
use crate::constants;
use crate::geometry::{BorderSegment, SegmentRect};

/// One border side and the window drawing it
pub struct SegmentWindow {
    pub segment: BorderSegment,
    pub rect: SegmentRect,
    /// X11 window id of `window`
    pub xid: u32,
    window: Window,
}

impl SegmentWindow {
    pub fn id(&self) -> WindowId {
        self.window.id()
    }

    /// Empty segments stay unmapped
    pub fn is_visible(&self) -> bool {
        !self.rect.is_empty()
    }
}

/// Create the four segment windows, hidden, in `BorderSegment::ALL` order.
///
/// If any creation fails, the windows already created are dropped (and so
/// destroyed) before the error is returned.
pub fn create_segment_windows(event_loop: &ActiveEventLoop, rects: &[SegmentRect; 4]) -> Result<[SegmentWindow; 4]> {
    let mut created = Vec::with_capacity(rects.len());

    for (segment, rect) in BorderSegment::ALL.into_iter().zip(rects.iter().copied()) {
        created.push(create_segment_window(event_loop, segment, rect)?);
    }

    created
        .try_into()
        .map_err(|_| anyhow!("Expected exactly four segment windows"))
}

fn create_segment_window(event_loop: &ActiveEventLoop, segment: BorderSegment, rect: SegmentRect) -> Result<SegmentWindow> {
    ensure!(
        rect.fits_x11(),
        "{} segment {:?} is outside the X11 coordinate range",
        segment.name(),
        rect
    );

    let attrs = WindowAttributes::default()
        .with_title(constants::window::TITLE)
        .with_decorations(false)
        .with_resizable(false)
        .with_visible(false)
        .with_window_level(WindowLevel::AlwaysOnTop)
        .with_position(PhysicalPosition::new(rect.x, rect.y))
        .with_inner_size(PhysicalSize::new(rect.width.max(1), rect.height.max(1)));

    #[cfg(target_os = "linux")]
    let attrs = {
        use winit::platform::x11::WindowAttributesExtX11;
        attrs
            .with_override_redirect(true)
            .with_name(constants::window::CLASS, constants::window::INSTANCE)
    };

    let window = event_loop
        .create_window(attrs)
        .with_context(|| format!("Failed to create {} segment window", segment.name()))?;
    let xid = x11_window_id(&window)?;

    info!("Created {} segment 0x{:x} at {:?}", segment.name(), xid, rect);
    Ok(SegmentWindow { segment, rect, xid, window })
}

/// Get the X11 window id behind a winit window
fn x11_window_id(window: &Window) -> Result<u32> {
    let handle = window
        .window_handle()
        .map_err(|e| anyhow!("Window handle unavailable: {}", e))?;

    match handle.as_raw() {
        RawWindowHandle::Xlib(xlib) => Ok(xlib.window as u32),
        RawWindowHandle::Xcb(xcb) => Ok(xcb.window.get()),
        other => bail!("Unsupported window handle {:?}, an X11 session is required", other),
    }
}

/// Map a winit event on one of our windows to an overlay input.
///
/// Returns `None` for everything the overlay does not react to. Escape is
/// matched on the physical key so it works on any keyboard layout.
pub fn translate_event(event: &WindowEvent) -> Option<OverlayEvent> {
    let translated = match event {
        WindowEvent::Focused(true) => OverlayEvent::FocusGained,
        WindowEvent::Focused(false) => OverlayEvent::FocusLost,
        WindowEvent::MouseInput { state: ElementState::Pressed, .. } => OverlayEvent::Click,
        WindowEvent::KeyboardInput { event, is_synthetic, .. } => {
            key_event(event.physical_key, event.state, *is_synthetic)?
        }
        WindowEvent::RedrawRequested => OverlayEvent::Damage,
        _ => return None,
    };

    debug!("{:?} -> {:?}", event, translated);
    Some(translated)
}

/// Only real presses count. winit replays keys that are already held down
/// as synthetic presses when a window gains focus; those were not pressed
/// while the overlay had focus.
pub fn key_event(key: PhysicalKey, state: ElementState, is_synthetic: bool) -> Option<OverlayEvent> {
    if is_synthetic || state != ElementState::Pressed {
        return None;
    }
    match key {
        PhysicalKey::Code(KeyCode::Escape) => Some(OverlayEvent::Key(KeyInput::Escape)),
        _ => Some(OverlayEvent::Key(KeyInput::Other)),
    }
}
