//! Handlers installed by `Harness::new`.

use crate::coords::Viewport;
use crate::core::Controls;
use crate::input::{Key, KeyEvent, KeyState};
use crate::paint::Color;

/// Clear color bound to an arrow key, if any.
pub fn arrow_color(key: Key) -> Option<Color> {
    match key {
        Key::ArrowUp => Some(Color::RED),
        Key::ArrowDown => Some(Color::GREEN),
        Key::ArrowLeft => Some(Color::BLUE),
        Key::ArrowRight => Some(Color::YELLOW),
        _ => None,
    }
}

/// Escape closes, arrows pick the clear color. Only presses count.
pub fn default_key_handler(controls: &mut Controls, event: &KeyEvent) {
    if event.state != KeyState::Pressed {
        return;
    }

    if event.key == Key::Escape {
        log::debug!("escape pressed, closing");
        controls.request_close();
    } else if let Some(color) = arrow_color(event.key) {
        log::debug!("{} pressed, clear color {:?}", event.key, color);
        controls.set_clear_color(color);
    }
}

/// Keeps the viewport covering the whole framebuffer.
pub fn viewport_resize_handler(controls: &mut Controls, width: u32, height: u32) {
    controls.set_viewport(Viewport::covering(width, height));
}
