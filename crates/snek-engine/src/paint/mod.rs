//! Color values used by the render loop.

pub mod color;

pub use color::Color;
