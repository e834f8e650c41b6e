use std::fmt;

use glow::HasContext;

use super::error::GfxError;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn gl_enum(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        })
    }
}

/// A linked vertex + fragment program.
///
/// Only constructed after both stages compiled and the link succeeded, so a
/// `ShaderProgram` is always usable for drawing. Free it with
/// [`ShaderProgram::delete`] while the context is alive.
#[derive(Debug, Copy, Clone)]
pub struct ShaderProgram {
    raw: glow::Program,
}

impl ShaderProgram {
    /// Compiles and links a program from GLSL source text.
    ///
    /// On failure the driver's info log is returned in the error and every GL
    /// object created so far is deleted.
    pub fn compile(gl: &glow::Context, vertex: &str, fragment: &str) -> Result<Self, GfxError> {
        let vert = compile_stage(gl, ShaderStage::Vertex, vertex)?;
        let frag = match compile_stage(gl, ShaderStage::Fragment, fragment) {
            Ok(frag) => frag,
            Err(err) => {
                unsafe { gl.delete_shader(vert) };
                return Err(err);
            }
        };

        let linked = link(gl, vert, frag);

        // Shaders are only needed until link.
        unsafe {
            gl.delete_shader(vert);
            gl.delete_shader(frag);
        }

        let raw = linked?;
        log::debug!("shader program linked");
        Ok(Self { raw })
    }

    pub fn bind(&self, gl: &glow::Context) {
        unsafe { gl.use_program(Some(self.raw)) };
    }

    pub fn delete(self, gl: &glow::Context) {
        unsafe { gl.delete_program(self.raw) };
    }
}

fn compile_stage(gl: &glow::Context, stage: ShaderStage, source: &str) -> Result<glow::Shader, GfxError> {
    unsafe {
        let shader = gl.create_shader(stage.gl_enum()).map_err(|reason| GfxError::Allocation {
            what: "shader",
            reason,
        })?;

        gl.shader_source(shader, source);
        gl.compile_shader(shader);

        if !gl.get_shader_compile_status(shader) {
            let log = clean_info_log(&gl.get_shader_info_log(shader));
            gl.delete_shader(shader);
            log::error!("{stage} shader failed to compile: {log}");
            return Err(GfxError::ShaderCompile { stage, log });
        }

        Ok(shader)
    }
}

fn link(gl: &glow::Context, vert: glow::Shader, frag: glow::Shader) -> Result<glow::Program, GfxError> {
    unsafe {
        let program = gl.create_program().map_err(|reason| GfxError::Allocation {
            what: "program",
            reason,
        })?;

        gl.attach_shader(program, vert);
        gl.attach_shader(program, frag);
        gl.link_program(program);
        gl.detach_shader(program, vert);
        gl.detach_shader(program, frag);

        if !gl.get_program_link_status(program) {
            let log = clean_info_log(&gl.get_program_info_log(program));
            gl.delete_program(program);
            log::error!("shader program failed to link: {log}");
            return Err(GfxError::ProgramLink { log });
        }

        Ok(program)
    }
}

/// Strips trailing NULs and whitespace some drivers leave in info logs.
fn clean_info_log(raw: &str) -> String {
    let log = raw.trim_end_matches(|c: char| c == '\0' || c.is_whitespace());
    if log.is_empty() {
        "(driver returned no info log)".to_string()
    } else {
        log.to_string()
    }
}
