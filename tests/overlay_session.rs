use rectframe::app::{ColorMode, FocusState, KeyInput, LoopControl, OverlayEvent, OverlaySession};
use rectframe::color::{Palette, Shade};
use rectframe::platform::OverlaySurface;

const PALETTE: Palette = Palette { primary: 0xff0000, dimmed: 0x660000 };

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Call {
    Repaint(u32),
    RequestFocus,
    ReleaseFocus,
}

/// Four fake segments sharing one background, plus a log of every call
struct RecordingSurface {
    backgrounds: [u32; 4],
    calls: Vec<Call>,
    fail_repaint: bool,
}

impl RecordingSurface {
    fn new(initial: u32) -> Self {
        Self {
            backgrounds: [initial; 4],
            calls: Vec::new(),
            fail_repaint: false,
        }
    }
}

impl OverlaySurface for RecordingSurface {
    fn repaint(&mut self, pixel: u32) -> anyhow::Result<()> {
        if self.fail_repaint {
            anyhow::bail!("BadColor");
        }
        self.backgrounds = [pixel; 4];
        self.calls.push(Call::Repaint(pixel));
        Ok(())
    }

    fn request_focus(&mut self) -> anyhow::Result<()> {
        self.calls.push(Call::RequestFocus);
        Ok(())
    }

    fn release_focus(&mut self) -> anyhow::Result<()> {
        self.calls.push(Call::ReleaseFocus);
        Ok(())
    }
}

fn session(mode: ColorMode) -> OverlaySession<RecordingSurface> {
    let initial = PALETTE.pixel(mode.initial_shade());
    OverlaySession::new(RecordingSurface::new(initial), PALETTE, mode)
}

#[test]
fn focus_gained_paints_all_segments_primary() {
    let mut session = session(ColorMode::Dual);
    assert_eq!(session.surface().backgrounds, [PALETTE.dimmed; 4]);

    let control = session.dispatch(OverlayEvent::FocusGained).unwrap();

    assert_eq!(control, LoopControl::Continue);
    assert_eq!(session.state(), FocusState::Focused);
    assert_eq!(session.surface().backgrounds, [PALETTE.primary; 4]);
}

#[test]
fn focus_lost_dims_again() {
    let mut session = session(ColorMode::Dual);
    session.dispatch(OverlayEvent::FocusGained).unwrap();
    session.dispatch(OverlayEvent::FocusLost).unwrap();

    assert_eq!(session.state(), FocusState::Unfocused);
    assert_eq!(session.shade(), Shade::Dimmed);
    assert_eq!(session.surface().backgrounds, [PALETTE.dimmed; 4]);
}

#[test]
fn repeated_focus_gain_is_idempotent() {
    let mut session = session(ColorMode::Dual);
    session.dispatch(OverlayEvent::FocusGained).unwrap();
    let before = session.surface().backgrounds;
    session.dispatch(OverlayEvent::FocusGained).unwrap();

    assert_eq!(session.surface().backgrounds, before);
    assert_eq!(session.state(), FocusState::Focused);
}

#[test]
fn click_requests_then_releases_focus() {
    let mut session = session(ColorMode::Dual);

    session.dispatch(OverlayEvent::Click).unwrap();
    // Color waits for the window manager to confirm
    assert_eq!(session.state(), FocusState::Unfocused);
    session.dispatch(OverlayEvent::FocusGained).unwrap();
    session.dispatch(OverlayEvent::Click).unwrap();
    session.dispatch(OverlayEvent::FocusLost).unwrap();

    assert_eq!(
        session.into_surface().calls,
        vec![
            Call::RequestFocus,
            Call::Repaint(PALETTE.primary),
            Call::ReleaseFocus,
            Call::Repaint(PALETTE.dimmed),
        ]
    );
}

#[test]
fn damage_and_unknown_keys_are_absorbed() {
    let mut session = session(ColorMode::Dual);
    for event in [OverlayEvent::Damage, OverlayEvent::Key(KeyInput::Other), OverlayEvent::Damage] {
        assert_eq!(session.dispatch(event).unwrap(), LoopControl::Continue);
    }
    assert!(session.surface().calls.is_empty());
}

#[test]
fn escape_exits_loop() {
    let mut session = session(ColorMode::Dual);
    session.dispatch(OverlayEvent::FocusGained).unwrap();

    let control = session.dispatch(OverlayEvent::Key(KeyInput::Escape)).unwrap();
    assert_eq!(control, LoopControl::Exit);
}

#[test]
fn single_color_mode_stays_primary() {
    let mut session = session(ColorMode::Single);
    assert_eq!(session.surface().backgrounds, [PALETTE.primary; 4]);

    session.dispatch(OverlayEvent::FocusGained).unwrap();
    session.dispatch(OverlayEvent::FocusLost).unwrap();
    session.dispatch(OverlayEvent::Click).unwrap();

    assert_eq!(session.surface().backgrounds, [PALETTE.primary; 4]);
    assert_eq!(session.surface().calls, vec![Call::RequestFocus]);
}

#[test]
fn surface_failure_propagates() {
    let mut surface = RecordingSurface::new(PALETTE.dimmed);
    surface.fail_repaint = true;
    let mut session = OverlaySession::new(surface, PALETTE, ColorMode::Dual);

    let err = session.dispatch(OverlayEvent::FocusGained).unwrap_err();
    assert!(format!("{:#}", err).contains("BadColor"));
}
