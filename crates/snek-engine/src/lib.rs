//! Snek engine crate.
//!
//! A minimal windowed render-loop harness: one window, one OpenGL 3.3 core
//! context, a frame loop that clears, draws and presents, and key/resize
//! handlers that run inline between frames.

pub mod coords;
pub mod core;
pub mod device;
pub mod gfx;
pub mod harness;
pub mod input;
pub mod logging;
pub mod paint;
pub mod time;
