//! OpenGL helpers for the shader-based demos: program compile/link and
//! static geometry buffers. Both need a current 3.3 core context.

mod error;
mod mesh;
mod shader;

pub use error::GfxError;
pub use mesh::{Geometry, Mesh};
pub use shader::{ShaderProgram, ShaderStage};
