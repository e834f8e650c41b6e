use crate::coords::Viewport;
use crate::harness::{HarnessError, WindowConfig};
use crate::input::KeyEvent;
use crate::paint::Color;

/// Window-system event surfaced by a backend during `poll_events`.
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformEvent {
    Key(KeyEvent),

    /// Drawable size changed, in framebuffer pixels.
    FramebufferResized { width: u32, height: u32 },

    /// The user clicked the window's close control, or the platform loop exited.
    CloseRequested,
}

/// Platform seam driven by [`crate::harness::Harness`].
///
/// A backend wraps one windowing library plus one rendering context. The
/// harness calls these in a fixed order (`init`, `create_window`,
/// `load_bindings`, then per frame `set_viewport`/`clear`/`swap_buffers`/
/// `poll_events`) and guarantees `destroy_window` and `terminate` are each
/// called at most once, and only after the matching acquisition succeeded.
pub trait Backend {
    /// Loaded graphics bindings handed to draw callbacks and release hooks.
    type Gl;

    /// Initializes the windowing library.
    fn init(&mut self) -> Result<(), HarnessError>;

    /// Creates the window and its rendering context, and makes the context current.
    fn create_window(&mut self, config: &WindowConfig) -> Result<(), HarnessError>;

    /// Resolves graphics entry points for the current context.
    fn load_bindings(&mut self) -> Result<(), HarnessError>;

    /// Bindings, once `load_bindings` succeeded.
    fn gl(&self) -> Option<&Self::Gl>;

    /// Current framebuffer size in pixels.
    fn framebuffer_size(&self) -> (u32, u32);

    fn set_viewport(&mut self, viewport: Viewport);

    /// Clears the color buffer.
    fn clear(&mut self, color: Color);

    /// Presents the back buffer.
    fn swap_buffers(&mut self) -> Result<(), HarnessError>;

    /// Drains pending window-system events into `events`, in arrival order.
    fn poll_events(&mut self, events: &mut Vec<PlatformEvent>);

    fn destroy_window(&mut self);

    /// Releases the windowing library's process-wide state.
    fn terminate(&mut self);
}
