// app/mod.rs - Overlay State
//
// Platform-independent state: the focus machine and the session that
// applies its effects to a window surface.

mod session;
mod state;

pub use session::*;
pub use state::*;
