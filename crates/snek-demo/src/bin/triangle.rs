//! One hardcoded triangle through a trivial shader pair.

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
    FragColor = vec4(1.0, 0.5, 0.2, 1.0);
}
"#;

const VERTICES: [[f32; 3]; 3] = [
    [-0.5, -0.5, 0.0],
    [0.5, -0.5, 0.0],
    [0.0, 0.5, 0.0],
];

#[derive(Clone, Copy)]
struct Scene {
    program: ShaderProgram,
    mesh: Mesh,
}

fn setup(harness: &mut DemoHarness) -> anyhow::Result<Scene> {
    let program = ShaderProgram::compile(snek_demo::gl(harness)?, VERTEX_SHADER, FRAGMENT_SHADER)?;
    harness.on_release(move |gl| program.delete(gl));

    let geometry = Geometry::new(VERTICES.to_vec())?;
    let mesh = Mesh::upload(snek_demo::gl(harness)?, &geometry)?;
    harness.on_release(move |gl| mesh.delete(gl));

    Ok(Scene { program, mesh })
}

fn draw(scene: &mut Scene, frame: &mut FrameCtx<'_, glow::Context>) {
    scene.program.bind(frame.gl);
    scene.mesh.draw(frame.gl);
}

fn main() -> ExitCode {
    snek_demo::run_demo(WindowConfig::default().title("Snek triangle"), setup, draw)
}
