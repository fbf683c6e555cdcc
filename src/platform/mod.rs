// platform/mod.rs - Platform Abstraction Layer
//
// The session only talks to windows through `OverlaySurface`; the X11
// implementation lives in `x11`.

pub mod x11;

pub use self::x11::{X11Display, X11Overlay};

/// Operations the focus machine needs from the four segment windows
pub trait OverlaySurface {
    /// Set every segment's background to `pixel` and redraw it. Either all
    /// four windows show the new pixel when this returns, or it fails.
    fn repaint(&mut self, pixel: u32) -> anyhow::Result<()>;

    /// Move keyboard focus to the overlay
    fn request_focus(&mut self) -> anyhow::Result<()>;

    /// Drop keyboard focus so nothing holds it
    fn release_focus(&mut self) -> anyhow::Result<()>;
}
