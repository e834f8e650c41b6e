use std::ffi::CStr;
use std::num::NonZeroU32;
use std::time::Duration;

use anyhow::{anyhow, Context as _};
use glow::HasContext;
use glutin::config::{Config, ConfigTemplateBuilder};
use glutin::context::{
    ContextApi, ContextAttributes, ContextAttributesBuilder, PossiblyCurrentContext, Version,
};
use glutin::display::GetGlDisplay;
use glutin::prelude::*;
use glutin::surface::{Surface, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::{HasWindowHandle, RawWindowHandle};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowId};

use super::backend::{Backend, PlatformEvent};
use super::init::{GlProfile, GlRequest};
use crate::coords::Viewport;
use crate::harness::{HarnessError, WindowConfig};
use crate::input::platform::winit::map_key_event;
use crate::paint::Color;

/// Entry points probed before the bindings are accepted.
///
/// A 3.3 core context that cannot resolve these cannot run any demo.
const REQUIRED_ENTRY_POINTS: [&CStr; 9] = [
    c"glClear",
    c"glClearColor",
    c"glViewport",
    c"glCreateShader",
    c"glCreateProgram",
    c"glGenVertexArrays",
    c"glGenBuffers",
    c"glDrawArrays",
    c"glDrawElements",
];

/// Window, surface and current context for one window.
struct GlWindowState {
    // Declaration order is drop order: surface and context go before the window.
    gl_surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    window: Window,
}

/// winit + glutin backend with glow bindings.
///
/// Events are pumped with a zero timeout once per frame instead of handing
/// control to `EventLoop::run_app`, so the harness keeps ownership of the loop.
#[derive(Default)]
pub struct GlBackend {
    gl: Option<glow::Context>,
    window: Option<GlWindowState>,
    event_loop: Option<EventLoop<()>>,
}

impl GlBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Backend for GlBackend {
    type Gl = glow::Context;

    fn init(&mut self) -> Result<(), HarnessError> {
        if self.event_loop.is_some() {
            return Ok(());
        }

        let event_loop = EventLoop::new().map_err(|e| HarnessError::Init(e.to_string()))?;
        log::debug!("winit event loop created");
        self.event_loop = Some(event_loop);
        Ok(())
    }

    fn create_window(&mut self, config: &WindowConfig) -> Result<(), HarnessError> {
        let event_loop = self.event_loop.as_ref().ok_or_else(|| {
            HarnessError::WindowCreation("windowing library is not initialized".to_string())
        })?;

        let state = build_window(event_loop, config)
            .map_err(|e| HarnessError::WindowCreation(format!("{e:#}")))?;

        let size = state.window.inner_size();
        log::info!(
            "window \"{}\" created ({}x{} framebuffer, OpenGL {}.{} {:?})",
            config.title,
            size.width,
            size.height,
            config.gl.major,
            config.gl.minor,
            config.gl.profile,
        );

        self.window = Some(state);
        Ok(())
    }

    fn load_bindings(&mut self) -> Result<(), HarnessError> {
        let state = self
            .window
            .as_ref()
            .ok_or_else(|| HarnessError::BindingLoad("no current GL context".to_string()))?;
        let display = state.context.display();

        if let Some(missing) = REQUIRED_ENTRY_POINTS
            .iter()
            .find(|name| display.get_proc_address(name).is_null())
        {
            return Err(HarnessError::BindingLoad(format!(
                "{} did not resolve",
                missing.to_string_lossy()
            )));
        }

        let gl = unsafe { glow::Context::from_loader_function_cstr(|name| display.get_proc_address(name)) };
        log::info!("OpenGL bindings loaded: {}", unsafe {
            gl.get_parameter_string(glow::VERSION)
        });

        self.gl = Some(gl);
        Ok(())
    }

    fn gl(&self) -> Option<&glow::Context> {
        self.gl.as_ref()
    }

    fn framebuffer_size(&self) -> (u32, u32) {
        self.window
            .as_ref()
            .map(|state| {
                let size = state.window.inner_size();
                (size.width, size.height)
            })
            .unwrap_or((0, 0))
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        if let Some(gl) = &self.gl {
            unsafe { gl.viewport(viewport.x, viewport.y, viewport.width, viewport.height) };
        }
    }

    fn clear(&mut self, color: Color) {
        if let Some(gl) = &self.gl {
            unsafe {
                gl.clear_color(color.r, color.g, color.b, color.a);
                gl.clear(glow::COLOR_BUFFER_BIT);
            }
        }
    }

    fn swap_buffers(&mut self) -> Result<(), HarnessError> {
        let state = self
            .window
            .as_ref()
            .ok_or_else(|| HarnessError::Present("no window to present to".to_string()))?;

        state
            .gl_surface
            .swap_buffers(&state.context)
            .map_err(|e| HarnessError::Present(e.to_string()))
    }

    fn poll_events(&mut self, events: &mut Vec<PlatformEvent>) {
        let (Some(event_loop), Some(state)) = (self.event_loop.as_mut(), self.window.as_ref())
        else {
            return;
        };

        let first = events.len();
        let mut collector = EventCollector {
            window_id: state.window.id(),
            events: &mut *events,
        };

        if let PumpStatus::Exit(code) = event_loop.pump_app_events(Some(Duration::ZERO), &mut collector) {
            log::debug!("event loop exited with code {code}");
            events.push(PlatformEvent::CloseRequested);
        }

        // EGL-backed surfaces (Wayland, Android) do not follow the window size on their own.
        for event in &events[first..] {
            if let PlatformEvent::FramebufferResized { width, height } = *event {
                if let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) {
                    state.gl_surface.resize(&state.context, w, h);
                }
            }
        }
    }

    fn destroy_window(&mut self) {
        self.gl = None;
        if self.window.take().is_some() {
            log::debug!("window and GL context destroyed");
        }
    }

    fn terminate(&mut self) {
        if self.event_loop.take().is_some() {
            log::debug!("winit event loop released");
        }
    }
}

fn build_window(event_loop: &EventLoop<()>, config: &WindowConfig) -> anyhow::Result<GlWindowState> {
    let attrs = Window::default_attributes()
        .with_title(config.title.clone())
        .with_inner_size(LogicalSize::new(config.width as f64, config.height as f64));

    let (window, gl_config) = DisplayBuilder::new()
        .with_window_attributes(Some(attrs.clone()))
        .build(event_loop, ConfigTemplateBuilder::new(), pick_config)
        .map_err(|e| anyhow!("no usable GL display configuration: {e}"))?;

    let raw_window_handle = window
        .as_ref()
        .and_then(|w| w.window_handle().ok())
        .map(|handle| handle.as_raw());

    let display = gl_config.display();
    let context_attrs = context_attributes(config.gl, raw_window_handle);
    let not_current = unsafe { display.create_context(&gl_config, &context_attrs) }.with_context(|| {
        format!(
            "OpenGL {}.{} {:?} context is not supported",
            config.gl.major, config.gl.minor, config.gl.profile
        )
    })?;

    let window = match window {
        Some(window) => window,
        None => glutin_winit::finalize_window(event_loop, attrs, &gl_config)
            .context("failed to create window")?,
    };

    let surface_attrs = window
        .build_surface_attributes(Default::default())
        .context("window has no usable native handle")?;
    let gl_surface = unsafe { display.create_window_surface(&gl_config, &surface_attrs) }
        .context("failed to create GL window surface")?;
    let context = not_current
        .make_current(&gl_surface)
        .context("failed to make GL context current")?;

    Ok(GlWindowState {
        gl_surface,
        context,
        window,
    })
}

fn context_attributes(request: GlRequest, raw_window_handle: Option<RawWindowHandle>) -> ContextAttributes {
    let profile = match request.profile {
        GlProfile::Core => glutin::context::GlProfile::Core,
        GlProfile::Compatibility => glutin::context::GlProfile::Compatibility,
    };

    ContextAttributesBuilder::new()
        .with_context_api(ContextApi::OpenGl(Some(Version::new(request.major, request.minor))))
        .with_profile(profile)
        .build(raw_window_handle)
}

/// Prefers hardware-accelerated configs; otherwise keeps the display's first choice.
fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    configs
        .reduce(|best, config| {
            if config.hardware_accelerated() && !best.hardware_accelerated() {
                config
            } else {
                best
            }
        })
        .expect("GL display offered no configs")
}

/// Collects events for one window during a single pump.
struct EventCollector<'a> {
    window_id: WindowId,
    events: &'a mut Vec<PlatformEvent>,
}

impl ApplicationHandler for EventCollector<'_> {
    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {}

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        if window_id != self.window_id {
            return;
        }

        if let Some(event) = translate_window_event(event) {
            self.events.push(event);
        }
    }
}

/// Maps the winit events the harness cares about. Synthetic key events
/// (winit replays held keys on focus changes) are dropped.
fn translate_window_event(event: WindowEvent) -> Option<PlatformEvent> {
    match event {
        WindowEvent::CloseRequested => Some(PlatformEvent::CloseRequested),
        WindowEvent::Resized(size) => Some(PlatformEvent::FramebufferResized {
            width: size.width,
            height: size.height,
        }),
        WindowEvent::KeyboardInput { event, is_synthetic: false, .. } => {
            Some(PlatformEvent::Key(map_key_event(&event)))
        }
        _ => None,
    }
}
