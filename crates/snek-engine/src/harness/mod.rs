//! Render harness: window/context lifecycle, event dispatch and the frame loop.
//!
//! ```rust,ignore
//! let mut harness = Harness::new(GlBackend::new());
//! harness.initialize(&WindowConfig::default())?;
//! harness.load_graphics_bindings()?;
//! harness.run(|frame| { /* issue GL calls through frame.gl */ })?;
//! harness.shutdown();
//! ```

mod config;
mod error;
pub mod handlers;
mod runtime;

#[cfg(test)]
mod tests;

pub use config::WindowConfig;
pub use error::HarnessError;
pub use runtime::{Harness, KeyHandler, Phase, ResizeHandler, RunSummary};
