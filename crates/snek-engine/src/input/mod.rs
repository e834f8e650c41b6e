//! Keyboard input.
//!
//! Public types do not expose winit. Backends translate platform key events
//! with the helpers in `platform`.

pub(crate) mod platform;
mod types;

pub use types::{Key, KeyEvent, KeyState};
