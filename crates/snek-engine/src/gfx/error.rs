use thiserror::Error;

use super::shader::ShaderStage;

#[derive(Debug, Error)]
pub enum GfxError {
    #[error("failed to compile {stage} shader: {log}")]
    ShaderCompile { stage: ShaderStage, log: String },

    #[error("failed to link shader program: {log}")]
    ProgramLink { log: String },

    #[error("failed to allocate {what}: {reason}")]
    Allocation { what: &'static str, reason: String },

    #[error("geometry has no vertices")]
    EmptyGeometry,

    #[error("index {index} out of range for {vertices} vertices")]
    IndexOutOfRange { index: u32, vertices: usize },
}
