//! Platform backends.
//!
//! This module is responsible for:
//! - the `Backend` seam the harness drives
//! - the winit + glutin implementation (`GlBackend`) with glow bindings
//! - context creation parameters (`GlRequest`)

mod backend;
mod gl;
mod init;

pub use backend::{Backend, PlatformEvent};
pub use gl::GlBackend;
pub use init::{GlProfile, GlRequest};
