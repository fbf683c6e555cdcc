// app/state.rs - Focus State Machine
//
// Decides what the overlay does for every input it receives. This module is
// pure: it never touches a window, it only returns the effect to apply.

use log::debug;

use crate::color::Shade;

/// Whether the overlay currently holds keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusState {
    #[default]
    Unfocused,
    Focused,
}

impl FocusState {
    /// Color shown for this state in two-color mode
    pub fn shade(self) -> Shade {
        match self {
            FocusState::Focused => Shade::Primary,
            FocusState::Unfocused => Shade::Dimmed,
        }
    }
}

/// Fixed for the whole run; chosen at build time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Primary while focused, dimmed otherwise
    Dual,
    /// Always primary; focus changes are ignored
    Single,
}

impl ColorMode {
    /// Mode selected by the `single-color` cargo feature
    pub const fn from_build() -> Self {
        if cfg!(feature = "single-color") {
            ColorMode::Single
        } else {
            ColorMode::Dual
        }
    }

    /// Color painted before any event arrives
    pub fn initial_shade(self) -> Shade {
        match self {
            ColorMode::Dual => FocusState::Unfocused.shade(),
            ColorMode::Single => Shade::Primary,
        }
    }
}

impl Default for ColorMode {
    fn default() -> Self {
        Self::from_build()
    }
}

/// Keys the overlay distinguishes, by physical position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Escape,
    Other,
}

/// Inputs from the window system, already scoped to our windows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayEvent {
    FocusGained,
    FocusLost,
    /// Any mouse button pressed on any segment
    Click,
    Key(KeyInput),
    /// Expose / redraw request
    Damage,
}

/// Side effect requested by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Repaint(Shade),
    /// Give keyboard focus to the first segment
    RequestFocus,
    /// Set the input focus to nothing
    ReleaseFocus,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: FocusState,
    pub to: FocusState,
    pub effect: Effect,
}

/// Tracks focus and maps events to effects.
///
/// A click only asks the window system to move focus; `state` changes when
/// the resulting focus event comes back, so the color on screen always
/// matches who really holds focus.
#[derive(Debug, Clone)]
pub struct FocusMachine {
    state: FocusState,
    mode: ColorMode,
    terminated: bool,
}

impl FocusMachine {
    pub fn new(mode: ColorMode) -> Self {
        Self {
            state: FocusState::Unfocused,
            mode,
            terminated: false,
        }
    }

    pub fn state(&self) -> FocusState {
        self.state
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Shade that should be on screen right now
    pub fn current_shade(&self) -> Shade {
        match self.mode {
            ColorMode::Dual => self.state.shade(),
            ColorMode::Single => Shade::Primary,
        }
    }

    pub fn handle(&mut self, event: OverlayEvent) -> Transition {
        let from = self.state;

        let (to, effect) = if self.terminated {
            (from, Effect::None)
        } else {
            match (self.mode, event) {
                (_, OverlayEvent::Key(KeyInput::Escape)) => (from, Effect::Exit),
                (_, OverlayEvent::Key(KeyInput::Other)) | (_, OverlayEvent::Damage) => (from, Effect::None),

                (ColorMode::Single, OverlayEvent::FocusGained | OverlayEvent::FocusLost) => (from, Effect::None),
                (ColorMode::Single, OverlayEvent::Click) => (from, Effect::RequestFocus),

                (ColorMode::Dual, OverlayEvent::FocusGained) => {
                    (FocusState::Focused, Effect::Repaint(Shade::Primary))
                }
                (ColorMode::Dual, OverlayEvent::FocusLost) => {
                    (FocusState::Unfocused, Effect::Repaint(Shade::Dimmed))
                }
                (ColorMode::Dual, OverlayEvent::Click) => match from {
                    FocusState::Unfocused => (from, Effect::RequestFocus),
                    FocusState::Focused => (from, Effect::ReleaseFocus),
                },
            }
        };

        if effect == Effect::Exit {
            self.terminated = true;
        }
        self.state = to;

        debug!("{:?}: {:?} -> {:?} ({:?})", event, from, to, effect);
        Transition { from, to, effect }
    }
}

impl Default for FocusMachine {
    fn default() -> Self {
        Self::new(ColorMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_EVENTS: [OverlayEvent; 6] = [
        OverlayEvent::FocusGained,
        OverlayEvent::FocusLost,
        OverlayEvent::Click,
        OverlayEvent::Key(KeyInput::Escape),
        OverlayEvent::Key(KeyInput::Other),
        OverlayEvent::Damage,
    ];

    fn machine_in(state: FocusState) -> FocusMachine {
        let mut machine = FocusMachine::new(ColorMode::Dual);
        if state == FocusState::Focused {
            machine.handle(OverlayEvent::FocusGained);
        }
        machine
    }

    #[test]
    fn starts_unfocused_and_dim() {
        let machine = FocusMachine::new(ColorMode::Dual);
        assert_eq!(machine.state(), FocusState::Unfocused);
        assert_eq!(machine.current_shade(), Shade::Dimmed);
        assert_eq!(ColorMode::Dual.initial_shade(), Shade::Dimmed);
    }

    #[test]
    fn focus_events_repaint() {
        let mut machine = machine_in(FocusState::Unfocused);
        let t = machine.handle(OverlayEvent::FocusGained);
        assert_eq!(t.to, FocusState::Focused);
        assert_eq!(t.effect, Effect::Repaint(Shade::Primary));

        let t = machine.handle(OverlayEvent::FocusLost);
        assert_eq!(t.to, FocusState::Unfocused);
        assert_eq!(t.effect, Effect::Repaint(Shade::Dimmed));
    }

    #[test]
    fn click_toggles_focus_request() {
        let mut machine = machine_in(FocusState::Unfocused);
        assert_eq!(machine.handle(OverlayEvent::Click).effect, Effect::RequestFocus);

        let mut machine = machine_in(FocusState::Focused);
        assert_eq!(machine.handle(OverlayEvent::Click).effect, Effect::ReleaseFocus);
    }

    #[test]
    fn every_event_has_one_transition_from_each_state() {
        for state in [FocusState::Unfocused, FocusState::Focused] {
            for event in ALL_EVENTS {
                let mut machine = machine_in(state);
                let t = machine.handle(event);
                assert_eq!(t.from, state);
                let ignored = matches!(event, OverlayEvent::Damage | OverlayEvent::Key(KeyInput::Other));
                assert_eq!(t.effect == Effect::None, ignored, "{state:?} + {event:?}");
            }
        }
    }

    #[test]
    fn damage_changes_nothing() {
        for state in [FocusState::Unfocused, FocusState::Focused] {
            let mut machine = machine_in(state);
            let t = machine.handle(OverlayEvent::Damage);
            assert_eq!((t.to, t.effect), (state, Effect::None));
        }
    }

    #[test]
    fn escape_terminates_from_any_state() {
        for state in [FocusState::Unfocused, FocusState::Focused] {
            let mut machine = machine_in(state);
            assert_eq!(machine.handle(OverlayEvent::Key(KeyInput::Escape)).effect, Effect::Exit);
            assert!(machine.is_terminated());
            assert_eq!(machine.handle(OverlayEvent::FocusLost).effect, Effect::None);
        }
    }

    #[test]
    fn single_color_mode_never_dims() {
        let mut machine = FocusMachine::new(ColorMode::Single);
        assert_eq!(machine.current_shade(), Shade::Primary);
        assert_eq!(machine.handle(OverlayEvent::FocusGained).effect, Effect::None);
        assert_eq!(machine.handle(OverlayEvent::FocusLost).effect, Effect::None);
        assert_eq!(machine.handle(OverlayEvent::Click).effect, Effect::RequestFocus);
        assert_eq!(machine.handle(OverlayEvent::Click).effect, Effect::RequestFocus);
        assert_eq!(machine.state(), FocusState::Unfocused);
        assert_eq!(ColorMode::Single.initial_shade(), Shade::Primary);
    }
}
