//! State and context types shared between the harness and user code.
//!
//! Handlers and draw callbacks only ever see these types, never the backend.

mod controls;
mod ctx;

pub use controls::Controls;
pub use ctx::FrameCtx;
