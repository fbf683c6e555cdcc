//! rectframe - X11 Border Overlay
//!
//! Frames a screen rectangle with four override-redirect windows and
//! switches them between a primary and a dimmed color as keyboard focus
//! comes and goes.

pub mod app;
pub mod cli;
pub mod color;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod platform;
pub mod window_manager;

// Re-export commonly used types
pub use app::{ColorMode, FocusMachine, FocusState, LoopControl, OverlayEvent, OverlaySession};
pub use color::{parse_color, ColorPair, Palette, Rgb16, Shade};
pub use error::FrameError;
pub use geometry::{layout, BorderSegment, BorderWidths, SegmentRect, TargetRect};
pub use platform::OverlaySurface;
