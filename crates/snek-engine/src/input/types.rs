use std::fmt;

/// Keyboard key identifier.
///
/// Only the keys the demos bind get a name. Everything else is carried as
/// `Unknown` with the platform key code, so handlers can still match on it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    /// Platform key code without a named variant.
    Unknown(u32),
}

/// Key transition, in the same three flavors a GLFW key callback reports.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
    /// Auto-repeat while the key is held.
    Repeated,
}

/// A single key transition delivered to the key handler.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct KeyEvent {
    pub key: Key,
    pub state: KeyState,
    /// Raw platform code (0 when the platform gave none).
    pub code: u32,
}

impl KeyEvent {
    pub const fn new(key: Key, state: KeyState) -> Self {
        Self { key, state, code: 0 }
    }

    pub const fn pressed(key: Key) -> Self {
        Self::new(key, KeyState::Pressed)
    }

    pub const fn released(key: Key) -> Self {
        Self::new(key, KeyState::Released)
    }

    pub const fn repeated(key: Key) -> Self {
        Self::new(key, KeyState::Repeated)
    }

    #[inline]
    pub fn is_press_of(&self, key: Key) -> bool {
        self.key == key && self.state == KeyState::Pressed
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Unknown(code) => write!(f, "Unknown({code:#x})"),
            other => write!(f, "{:?}", other),
        }
    }
}
