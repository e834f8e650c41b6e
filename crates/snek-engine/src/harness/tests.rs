use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use super::*;
use crate::coords::Viewport;
use crate::device::{Backend, PlatformEvent};
use crate::input::{Key, KeyEvent};
use crate::paint::Color;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Init,
    CreateWindow(String),
    LoadBindings,
    SetViewport(Viewport),
    Clear(Color),
    Swap,
    Poll,
    DestroyWindow,
    Terminate,
}

/// Backend that records calls and replays one event batch per poll.
///
/// Once the script runs out it reports a close request, so a test can never
/// spin forever.
#[derive(Default)]
struct ScriptedBackend {
    calls: Vec<Call>,
    script: VecDeque<Vec<PlatformEvent>>,
    framebuffer: (u32, u32),
    fail_init: bool,
    fail_window: bool,
    fail_bindings: bool,
    fail_swap: bool,
    gl: Option<()>,
}

impl ScriptedBackend {
    fn new() -> Self {
        Self {
            framebuffer: (640, 480),
            ..Self::default()
        }
    }

    fn script(mut self, batches: Vec<Vec<PlatformEvent>>) -> Self {
        self.script = batches.into();
        self
    }

    fn count(&self, call: &Call) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }

    fn clears(&self) -> Vec<Color> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Clear(color) => Some(*color),
                _ => None,
            })
            .collect()
    }
}

impl Backend for ScriptedBackend {
    type Gl = ();

    fn init(&mut self) -> Result<(), HarnessError> {
        self.calls.push(Call::Init);
        if self.fail_init {
            return Err(HarnessError::Init("scripted".to_string()));
        }
        Ok(())
    }

    fn create_window(&mut self, config: &WindowConfig) -> Result<(), HarnessError> {
        self.calls.push(Call::CreateWindow(config.title.clone()));
        if self.fail_window {
            return Err(HarnessError::WindowCreation("scripted".to_string()));
        }
        Ok(())
    }

    fn load_bindings(&mut self) -> Result<(), HarnessError> {
        self.calls.push(Call::LoadBindings);
        if self.fail_bindings {
            return Err(HarnessError::BindingLoad("scripted".to_string()));
        }
        self.gl = Some(());
        Ok(())
    }

    fn gl(&self) -> Option<&()> {
        self.gl.as_ref()
    }

    fn framebuffer_size(&self) -> (u32, u32) {
        self.framebuffer
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        self.calls.push(Call::SetViewport(viewport));
    }

    fn clear(&mut self, color: Color) {
        self.calls.push(Call::Clear(color));
    }

    fn swap_buffers(&mut self) -> Result<(), HarnessError> {
        self.calls.push(Call::Swap);
        if self.fail_swap {
            return Err(HarnessError::Present("scripted".to_string()));
        }
        Ok(())
    }

    fn poll_events(&mut self, events: &mut Vec<PlatformEvent>) {
        self.calls.push(Call::Poll);
        match self.script.pop_front() {
            Some(batch) => events.extend(batch),
            None => events.push(PlatformEvent::CloseRequested),
        }
    }

    fn destroy_window(&mut self) {
        self.calls.push(Call::DestroyWindow);
        self.gl = None;
    }

    fn terminate(&mut self) {
        self.calls.push(Call::Terminate);
    }
}

fn key(key: Key) -> PlatformEvent {
    PlatformEvent::Key(KeyEvent::pressed(key))
}

fn ready(backend: ScriptedBackend) -> Harness<ScriptedBackend> {
    let mut harness = Harness::new(backend);
    harness.initialize(&WindowConfig::default()).unwrap();
    harness.load_graphics_bindings().unwrap();
    harness
}

// ── lifecycle ─────────────────────────────────────────────────────────────

#[test]
fn initialize_moves_to_initialized() {
    let mut harness = Harness::new(ScriptedBackend::new());
    assert_eq!(harness.phase(), Phase::Uninitialized);

    harness.initialize(&WindowConfig::default()).unwrap();

    assert_eq!(harness.phase(), Phase::Initialized);
    assert_eq!(
        harness.backend().calls,
        vec![Call::Init, Call::CreateWindow("Snek".to_string())]
    );
}

#[test]
fn close_before_run_draws_nothing() {
    let mut harness = ready(ScriptedBackend::new());
    harness.controls_mut().request_close();

    let mut drawn = 0;
    let summary = harness.run(|_| drawn += 1).unwrap();

    assert_eq!(drawn, 0);
    assert_eq!(summary.frames, 0);
    assert_eq!(harness.phase(), Phase::Terminated);
    assert_eq!(harness.backend().count(&Call::Swap), 0);
}

#[test]
fn failed_library_init_allocates_nothing() {
    let backend = ScriptedBackend {
        fail_init: true,
        ..ScriptedBackend::new()
    };
    let mut harness = Harness::new(backend);

    let err = harness.initialize(&WindowConfig::default()).unwrap_err();
    assert!(matches!(err, HarnessError::Init(_)));
    assert_eq!(harness.phase(), Phase::Uninitialized);

    harness.shutdown();
    assert_eq!(harness.backend().calls, vec![Call::Init]);
    assert_eq!(harness.phase(), Phase::Uninitialized);
}

#[test]
fn failed_window_terminates_library_once() {
    let backend = ScriptedBackend {
        fail_window: true,
        ..ScriptedBackend::new()
    };
    let mut harness = Harness::new(backend);

    let err = harness.initialize(&WindowConfig::default()).unwrap_err();
    assert!(matches!(err, HarnessError::WindowCreation(_)));
    assert!(err.is_startup());
    assert_eq!(harness.phase(), Phase::Uninitialized);

    harness.shutdown();
    harness.shutdown();
    assert_eq!(harness.backend().count(&Call::Terminate), 1);
    assert_eq!(harness.backend().count(&Call::DestroyWindow), 0);
}

#[test]
fn failed_bindings_release_everything() {
    let backend = ScriptedBackend {
        fail_bindings: true,
        ..ScriptedBackend::new()
    };
    let mut harness = Harness::new(backend);
    harness.initialize(&WindowConfig::default()).unwrap();

    let err = harness.load_graphics_bindings().unwrap_err();
    assert!(matches!(err, HarnessError::BindingLoad(_)));
    assert_eq!(harness.phase(), Phase::Terminated);
    assert_eq!(harness.backend().count(&Call::DestroyWindow), 1);
    assert_eq!(harness.backend().count(&Call::Terminate), 1);
}

#[test]
fn run_requires_bindings() {
    let mut harness = Harness::new(ScriptedBackend::new());
    harness.initialize(&WindowConfig::default()).unwrap();

    let err = harness.run(|_| {}).unwrap_err();
    assert!(matches!(err, HarnessError::BindingsNotLoaded));
    assert_eq!(harness.phase(), Phase::Initialized);
    assert_eq!(harness.backend().count(&Call::Swap), 0);
}

#[test]
fn run_twice_is_rejected() {
    let mut harness = ready(ScriptedBackend::new());
    harness.run(|_| {}).unwrap();

    let err = harness.run(|_| {}).unwrap_err();
    assert!(matches!(
        err,
        HarnessError::InvalidPhase {
            expected: Phase::Initialized,
            actual: Phase::Terminated,
        }
    ));
}

#[test]
fn shutdown_is_idempotent() {
    let mut harness = ready(ScriptedBackend::new());
    harness.run(|_| {}).unwrap();

    harness.shutdown();
    harness.shutdown();

    assert_eq!(harness.backend().count(&Call::DestroyWindow), 1);
    assert_eq!(harness.backend().count(&Call::Terminate), 1);
    assert_eq!(harness.phase(), Phase::Terminated);
}

#[test]
fn shutdown_from_initialized() {
    let mut harness = Harness::new(ScriptedBackend::new());
    harness.initialize(&WindowConfig::default()).unwrap();

    harness.shutdown();

    assert_eq!(harness.phase(), Phase::Terminated);
    let calls = &harness.backend().calls;
    assert_eq!(&calls[calls.len() - 2..], &[Call::DestroyWindow, Call::Terminate]);
}

#[test]
fn release_hooks_run_once_before_window_destroyed() {
    let mut harness = ready(ScriptedBackend::new());
    let released = Rc::new(Cell::new(0));

    let counter = released.clone();
    harness.on_release(move |_gl| counter.set(counter.get() + 1));
    harness.run(|_| {}).unwrap();

    harness.shutdown();
    harness.shutdown();
    assert_eq!(released.get(), 1);
}

#[test]
fn release_hooks_see_live_bindings() {
    let mut harness = ready(ScriptedBackend::new());
    let order = Rc::new(RefCell::new(Vec::new()));

    let first = order.clone();
    harness.on_release(move |_| first.borrow_mut().push("program"));
    let second = order.clone();
    harness.on_release(move |_| second.borrow_mut().push("mesh"));

    harness.shutdown();
    assert_eq!(*order.borrow(), vec!["program", "mesh"]);
}

#[test]
fn hooks_registered_before_a_failed_setup_still_run() {
    let mut harness = ready(ScriptedBackend::new());
    let released = Rc::new(RefCell::new(Vec::new()));

    let setup = |harness: &mut Harness<ScriptedBackend>| -> Result<(), &'static str> {
        let program = released.clone();
        harness.on_release(move |_| program.borrow_mut().push("program"));
        Err("mesh upload failed")
    };
    assert!(setup(&mut harness).is_err());

    harness.shutdown();
    assert_eq!(*released.borrow(), vec!["program"]);
    let calls = &harness.backend().calls;
    assert_eq!(&calls[calls.len() - 2..], &[Call::DestroyWindow, Call::Terminate]);
}

// ── frame loop ────────────────────────────────────────────────────────────

#[test]
fn frame_order_is_clear_draw_swap_poll() {
    let mut harness = ready(ScriptedBackend::new());
    harness.run(|_| {}).unwrap();

    let calls = &harness.backend().calls;
    let start = calls.iter().position(|c| *c == Call::LoadBindings).unwrap() + 1;
    assert_eq!(
        &calls[start..],
        &[
            Call::SetViewport(Viewport::covering(640, 480)),
            Call::Clear(Color::default()),
            Call::Swap,
            Call::Poll,
        ]
    );
}

#[test]
fn escape_stops_within_one_iteration() {
    let backend = ScriptedBackend::new().script(vec![
        vec![],
        vec![key(Key::Escape)],
        vec![],
        vec![],
    ]);
    let mut harness = ready(backend);

    let summary = harness.run(|_| {}).unwrap();

    assert_eq!(summary.frames, 2);
    assert_eq!(harness.frames_drawn(), 2);
}

#[test]
fn window_close_control_stops_loop() {
    let backend = ScriptedBackend::new().script(vec![vec![PlatformEvent::CloseRequested], vec![]]);
    let mut harness = ready(backend);

    assert_eq!(harness.run(|_| {}).unwrap().frames, 1);
}

#[test]
fn arrow_presses_set_clear_color_for_next_frame() {
    let backend = ScriptedBackend::new().script(vec![
        vec![key(Key::ArrowUp)],
        vec![key(Key::ArrowDown)],
        vec![key(Key::ArrowLeft)],
        vec![key(Key::ArrowRight)],
    ]);
    let mut harness = ready(backend);

    harness.run(|_| {}).unwrap();

    assert_eq!(
        harness.backend().clears(),
        vec![
            Color::default(),
            Color::RED,
            Color::GREEN,
            Color::BLUE,
            Color::YELLOW,
        ]
    );
}

#[test]
fn release_and_repeat_keep_pressed_color() {
    let backend = ScriptedBackend::new().script(vec![
        vec![key(Key::ArrowUp)],
        vec![
            PlatformEvent::Key(KeyEvent::repeated(Key::ArrowUp)),
            PlatformEvent::Key(KeyEvent::released(Key::ArrowUp)),
            PlatformEvent::Key(KeyEvent::released(Key::ArrowDown)),
        ],
    ]);
    let mut harness = ready(backend);

    harness.run(|_| {}).unwrap();

    assert_eq!(harness.backend().clears().last(), Some(&Color::RED));
    assert_eq!(harness.controls().clear_color(), Color::RED);
}

#[test]
fn resize_applies_viewport_before_next_draw() {
    let backend = ScriptedBackend::new().script(vec![vec![PlatformEvent::FramebufferResized {
        width: 1280,
        height: 960,
    }]]);
    let mut harness = ready(backend);

    let mut seen = Vec::new();
    harness.run(|frame| seen.push(frame.viewport())).unwrap();

    assert_eq!(
        seen,
        vec![Viewport::new(0, 0, 640, 480), Viewport::new(0, 0, 1280, 960)]
    );

    let calls = &harness.backend().calls;
    let set = calls
        .iter()
        .position(|c| *c == Call::SetViewport(Viewport::new(0, 0, 1280, 960)))
        .unwrap();
    assert!(matches!(calls[set + 1], Call::Clear(_)));
}

#[test]
fn custom_handlers_replace_defaults() {
    let backend = ScriptedBackend::new().script(vec![
        vec![key(Key::Escape), key(Key::Unknown(57))],
        vec![PlatformEvent::FramebufferResized { width: 1, height: 1 }],
    ]);
    let mut harness = ready(backend);

    let resizes = Rc::new(Cell::new(0));
    let seen = resizes.clone();
    harness.set_resize_handler(move |_, _, _| seen.set(seen.get() + 1));
    harness.set_key_handler(|controls, event| {
        if event.is_press_of(Key::Unknown(57)) {
            controls.set_clear_color(Color::BLACK);
        }
    });

    let summary = harness.run(|_| {}).unwrap();

    // Escape no longer closes; the script running out does.
    assert_eq!(summary.frames, 3);
    assert_eq!(resizes.get(), 1);
    assert_eq!(harness.controls().clear_color(), Color::BLACK);
}

#[test]
fn draw_callback_can_close_and_sees_frame_index() {
    let mut harness = ready(ScriptedBackend::new().script(vec![vec![], vec![], vec![]]));

    let mut indices = Vec::new();
    harness
        .run(|frame| {
            indices.push(frame.time.frame_index);
            if frame.time.frame_index == 1 {
                frame.request_close();
            }
        })
        .unwrap();

    assert_eq!(indices, vec![0, 1]);
}

#[test]
fn present_failure_ends_run() {
    let backend = ScriptedBackend {
        fail_swap: true,
        ..ScriptedBackend::new()
    };
    let mut harness = ready(backend);

    let err = harness.run(|_| {}).unwrap_err();
    assert!(matches!(err, HarnessError::Present(_)));
    assert_eq!(harness.phase(), Phase::Terminated);

    harness.shutdown();
    assert_eq!(harness.backend().count(&Call::Terminate), 1);
}
