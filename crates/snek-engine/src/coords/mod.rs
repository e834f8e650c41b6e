//! Pixel-space geometry shared by the harness and backends.

mod viewport;

pub use viewport::Viewport;
