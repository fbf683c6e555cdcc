// app/session.rs - Overlay Session
//
// Owns everything the event loop mutates: the focus machine, the allocated
// palette and the window surface. Passed by reference through the loop
// instead of living in globals.

use anyhow::{Context, Result};
use log::{debug, info};

use crate::color::{Palette, Shade};
use crate::platform::OverlaySurface;

use super::state::{ColorMode, Effect, FocusMachine, FocusState, OverlayEvent};

/// What the run loop should do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

pub struct OverlaySession<S: OverlaySurface> {
    machine: FocusMachine,
    palette: Palette,
    surface: S,
}

impl<S: OverlaySurface> OverlaySession<S> {
    /// Wrap an already-created surface. The surface is expected to show
    /// `mode.initial_shade()` already.
    pub fn new(surface: S, palette: Palette, mode: ColorMode) -> Self {
        Self {
            machine: FocusMachine::new(mode),
            palette,
            surface,
        }
    }

    pub fn state(&self) -> FocusState {
        self.machine.state()
    }

    pub fn shade(&self) -> Shade {
        self.machine.current_shade()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Run one event through the machine and apply its effect.
    ///
    /// # Errors
    /// Fails when the window system rejects a repaint or focus request;
    /// the caller is expected to tear the overlay down.
    pub fn dispatch(&mut self, event: OverlayEvent) -> Result<LoopControl> {
        let transition = self.machine.handle(event);

        match transition.effect {
            Effect::None => {}
            Effect::Repaint(shade) => {
                self.surface
                    .repaint(self.palette.pixel(shade))
                    .with_context(|| format!("Failed to repaint border {:?}", shade))?;
            }
            Effect::RequestFocus => {
                debug!("Requesting input focus");
                self.surface.request_focus().context("Failed to request focus")?;
            }
            Effect::ReleaseFocus => {
                debug!("Releasing input focus");
                self.surface.release_focus().context("Failed to release focus")?;
            }
            Effect::Exit => {
                info!("Escape pressed, closing overlay");
                return Ok(LoopControl::Exit);
            }
        }

        Ok(LoopControl::Continue)
    }
}
