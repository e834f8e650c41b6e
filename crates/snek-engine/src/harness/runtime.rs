use crate::core::{Controls, FrameCtx};
use crate::device::{Backend, PlatformEvent};
use crate::input::KeyEvent;
use crate::time::FrameClock;

use super::config::WindowConfig;
use super::error::HarnessError;
use super::handlers::{default_key_handler, viewport_resize_handler};

/// Lifecycle phase of a [`Harness`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    Uninitialized,
    Initialized,
    Running,
    Terminated,
}

pub type KeyHandler = Box<dyn FnMut(&mut Controls, &KeyEvent)>;
pub type ResizeHandler = Box<dyn FnMut(&mut Controls, u32, u32)>;

type ReleaseHook<G> = Box<dyn FnOnce(&G)>;

/// Outcome of a completed `run`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
}

/// Windowed render loop over a [`Backend`].
///
/// Owns the window/context lifecycle through the backend, dispatches key and
/// resize events to the registered handlers, and calls a draw callback once
/// per frame. Dropping the harness runs [`Harness::shutdown`].
pub struct Harness<B: Backend> {
    backend: B,
    phase: Phase,
    controls: Controls,

    key_handler: KeyHandler,
    resize_handler: ResizeHandler,
    release_hooks: Vec<ReleaseHook<B::Gl>>,

    clock: FrameClock,
    events: Vec<PlatformEvent>,

    library_live: bool,
    window_live: bool,
    bindings_loaded: bool,
}

impl<B: Backend> Harness<B> {
    /// Wraps `backend` with the default key and resize handlers installed.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            phase: Phase::Uninitialized,
            controls: Controls::default(),
            key_handler: Box::new(default_key_handler),
            resize_handler: Box::new(viewport_resize_handler),
            release_hooks: Vec::new(),
            clock: FrameClock::new(),
            events: Vec::new(),
            library_live: false,
            window_live: false,
            bindings_loaded: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut Controls {
        &mut self.controls
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Frames presented so far.
    pub fn frames_drawn(&self) -> u64 {
        self.clock.frames()
    }

    /// Loaded graphics bindings, for setup work before `run`.
    pub fn gl(&self) -> Option<&B::Gl> {
        if self.bindings_loaded { self.backend.gl() } else { None }
    }

    /// Initializes the windowing library and creates the window + context.
    ///
    /// On failure nothing stays acquired and the harness remains
    /// `Uninitialized`.
    pub fn initialize(&mut self, config: &WindowConfig) -> Result<(), HarnessError> {
        self.expect_phase(Phase::Uninitialized)?;

        if let Err(err) = self.backend.init() {
            log::error!("{err}");
            return Err(err);
        }
        self.library_live = true;

        if let Err(err) = self.backend.create_window(config) {
            log::error!("{err}");
            self.backend.terminate();
            self.library_live = false;
            return Err(err);
        }
        self.window_live = true;

        let (width, height) = self.backend.framebuffer_size();
        (self.resize_handler)(&mut self.controls, width, height);

        self.phase = Phase::Initialized;
        Ok(())
    }

    /// Resolves graphics entry points. Must precede any drawing.
    ///
    /// Failure is fatal: the window and library are released before the error
    /// is returned.
    pub fn load_graphics_bindings(&mut self) -> Result<(), HarnessError> {
        self.expect_phase(Phase::Initialized)?;

        if let Err(err) = self.backend.load_bindings() {
            log::error!("{err}");
            self.shutdown();
            return Err(err);
        }

        self.bindings_loaded = true;
        Ok(())
    }

    pub fn set_key_handler<F>(&mut self, handler: F)
    where
        F: FnMut(&mut Controls, &KeyEvent) + 'static,
    {
        self.key_handler = Box::new(handler);
    }

    /// Replaces the framebuffer resize handler.
    ///
    /// The handler is responsible for queueing a matching viewport through
    /// [`Controls::set_viewport`].
    pub fn set_resize_handler<F>(&mut self, handler: F)
    where
        F: FnMut(&mut Controls, u32, u32) + 'static,
    {
        self.resize_handler = Box::new(handler);
    }

    /// Registers a hook that frees GPU objects during `shutdown`, while the
    /// context is still alive. Hooks run in registration order.
    pub fn on_release<F>(&mut self, hook: F)
    where
        F: FnOnce(&B::Gl) + 'static,
    {
        self.release_hooks.push(Box::new(hook));
    }

    /// Runs the frame loop until a close request is observed.
    ///
    /// Each iteration clears, calls `draw`, presents, then polls events and
    /// dispatches them to the handlers in arrival order.
    pub fn run<F>(&mut self, mut draw: F) -> Result<RunSummary, HarnessError>
    where
        F: FnMut(&mut FrameCtx<'_, B::Gl>),
    {
        self.expect_phase(Phase::Initialized)?;
        if !self.bindings_loaded {
            return Err(HarnessError::BindingsNotLoaded);
        }

        self.phase = Phase::Running;
        self.clock.reset();
        let first_frame = self.clock.frames();
        log::debug!("entering render loop");

        let result = self.frame_loop(&mut draw);
        self.phase = Phase::Terminated;

        let frames = self.clock.frames() - first_frame;
        match result {
            Ok(()) => {
                log::info!("render loop finished after {frames} frames");
                Ok(RunSummary { frames })
            }
            Err(err) => {
                log::error!("{err}");
                Err(err)
            }
        }
    }

    fn frame_loop<F>(&mut self, draw: &mut F) -> Result<(), HarnessError>
    where
        F: FnMut(&mut FrameCtx<'_, B::Gl>),
    {
        while !self.controls.close_requested() {
            if let Some(viewport) = self.controls.take_pending_viewport() {
                self.backend.set_viewport(viewport);
            }
            self.backend.clear(self.controls.clear_color());

            let time = self.clock.tick();
            let gl = self.backend.gl().ok_or(HarnessError::BindingsNotLoaded)?;
            draw(&mut FrameCtx {
                gl,
                time,
                controls: &mut self.controls,
            });

            self.backend.swap_buffers()?;

            self.events.clear();
            self.backend.poll_events(&mut self.events);
            for event in self.events.drain(..) {
                match event {
                    PlatformEvent::Key(key) => (self.key_handler)(&mut self.controls, &key),
                    PlatformEvent::FramebufferResized { width, height } => {
                        (self.resize_handler)(&mut self.controls, width, height)
                    }
                    PlatformEvent::CloseRequested => self.controls.request_close(),
                }
            }
        }

        Ok(())
    }

    /// Releases GPU objects, the window/context and the windowing library.
    ///
    /// Safe to call repeatedly and after a failed `initialize`.
    pub fn shutdown(&mut self) {
        let hooks = std::mem::take(&mut self.release_hooks);
        match self.backend.gl() {
            Some(gl) if self.bindings_loaded && self.window_live => {
                for hook in hooks {
                    hook(gl);
                }
            }
            _ if !hooks.is_empty() => {
                log::warn!("dropping {} release hooks without a live context", hooks.len());
            }
            _ => {}
        }
        self.bindings_loaded = false;

        if self.window_live {
            self.backend.destroy_window();
            self.window_live = false;
        }

        if self.library_live {
            self.backend.terminate();
            self.library_live = false;
        }

        if self.phase != Phase::Uninitialized {
            self.phase = Phase::Terminated;
        }
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), HarnessError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(HarnessError::InvalidPhase {
                expected,
                actual: self.phase,
            })
        }
    }
}

impl<B: Backend> Drop for Harness<B> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
