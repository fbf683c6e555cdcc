// main.rs - rectframe Entry Point
//
// Startup is all-or-nothing: arguments, display connection, colors and all
// four windows must succeed before anything is mapped. After that a single
// thread blocks on winit's event loop until Escape is pressed.

use anyhow::{Context, Result};
use log::{error, info};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

use rectframe::app::{ColorMode, LoopControl, OverlaySession};
use rectframe::cli::{self, Invocation};
use rectframe::color::Palette;
use rectframe::error::{self, FrameError};
use rectframe::platform::{X11Display, X11Overlay};
use rectframe::window_manager;

/// Event-loop state. `display` is consumed when the overlay is built.
struct FrameApp {
    invocation: Invocation,
    mode: ColorMode,
    palette: Palette,
    display: Option<X11Display>,
    session: Option<OverlaySession<X11Overlay>>,
    failure: Option<anyhow::Error>,
}

impl FrameApp {
    fn new(invocation: Invocation, display: X11Display, palette: Palette) -> Self {
        Self {
            invocation,
            mode: ColorMode::from_build(),
            palette,
            display: Some(display),
            session: None,
            failure: None,
        }
    }

    fn open_overlay(&mut self, event_loop: &ActiveEventLoop) -> Result<OverlaySession<X11Overlay>> {
        let display = self.display.take().context("Display connection already used")?;
        let rects = self.invocation.layout();

        let segments = window_manager::create_segment_windows(event_loop, &rects)
            .map_err(|e| FrameError::Window(format!("{:#}", e)))?;
        let initial = self.palette.pixel(self.mode.initial_shade());
        let overlay = X11Overlay::new(display, segments, initial)
            .map_err(|e| FrameError::Window(format!("{:#}", e)))?;

        Ok(OverlaySession::new(overlay, self.palette, self.mode))
    }

    /// Tear down the overlay and stop the loop
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        error!("{:#}", err);
        self.session = None;
        self.failure = Some(err);
        event_loop.exit();
    }

    fn finish(mut self) -> Result<()> {
        self.session = None;
        match self.failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl ApplicationHandler for FrameApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.session.is_some() || self.failure.is_some() {
            return;
        }

        match self.open_overlay(event_loop) {
            Ok(session) => {
                info!("Overlay ready around {:?}", self.invocation.target);
                self.session = Some(session);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if !session.surface().owns(window_id) {
            return;
        }
        let Some(overlay_event) = window_manager::translate_event(&event) else {
            return;
        };

        match session.dispatch(overlay_event) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => event_loop.exit(),
            Err(e) => self.fail(event_loop, e),
        }
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let invocation = cli::parse_args(&args)?;

    let display = X11Display::connect()?;
    let palette = display.alloc_palette(&invocation.colors)?;

    let mut builder = EventLoop::builder();
    #[cfg(target_os = "linux")]
    {
        use winit::platform::x11::EventLoopBuilderExtX11;
        builder.with_x11();
    }
    let event_loop = builder
        .build()
        .map_err(|e| FrameError::Connection(e.to_string()))?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = FrameApp::new(invocation, display, palette);
    event_loop.run_app(&mut app).context("Event loop error")?;

    app.finish()
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("rectframe starting");

    if let Err(err) = run() {
        match err.downcast_ref::<FrameError>() {
            Some(frame_err) => error::die(frame_err),
            None => error::die(&FrameError::Runtime(format!("{:#}", err))),
        }
    }

    info!("rectframe exited");
}
