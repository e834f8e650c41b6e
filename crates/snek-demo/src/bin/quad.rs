//! The four-corner quad, drawn as two indexed triangles.

use std::process::ExitCode;

use snek_demo::DemoHarness;
use snek_engine::core::FrameCtx;
use snek_engine::gfx::{Geometry, Mesh, ShaderProgram};
use snek_engine::harness::WindowConfig;

const VERTEX_SHADER: &str = r#"#version 330 core
layout (location = 0) in vec3 aPos;

void main()
{
    gl_Position = vec4(aPos, 1.0);
}
"#;

const FRAGMENT_SHADER: &str = r#"#version 330 core
out vec4 FragColor;

void main()
{
    FragColor = vec4(1.0, 1.0, 1.0, 1.0);
}
"#;

const CORNERS: [[f32; 3]; 4] = [
    [-0.4, 0.4, 0.0],   // top left
    [0.6, 0.64, 0.0],   // top right
    [0.3, -0.3, 0.0],   // bottom right
    [-0.1, -0.15, 0.0], // bottom left
];

const INDICES: [u32; 6] = [0, 1, 2, 2, 3, 0];

#[derive(Clone, Copy)]
struct Scene {
    program: ShaderProgram,
    mesh: Mesh,
}

fn setup(harness: &mut DemoHarness) -> anyhow::Result<Scene> {
    let program = ShaderProgram::compile(snek_demo::gl(harness)?, VERTEX_SHADER, FRAGMENT_SHADER)?;
    harness.on_release(move |gl| program.delete(gl));

    let geometry = Geometry::indexed(CORNERS.to_vec(), INDICES.to_vec())?;
    let mesh = Mesh::upload(snek_demo::gl(harness)?, &geometry)?;
    harness.on_release(move |gl| mesh.delete(gl));

    Ok(Scene { program, mesh })
}

fn draw(scene: &mut Scene, frame: &mut FrameCtx<'_, glow::Context>) {
    scene.program.bind(frame.gl);
    scene.mesh.draw(frame.gl);
}

fn main() -> ExitCode {
    snek_demo::run_demo(WindowConfig::default(), setup, draw)
}
