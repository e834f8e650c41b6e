//! Shared bootstrap for the demo binaries.

use std::process::ExitCode;

use anyhow::Context;

use snek_engine::core::FrameCtx;
use snek_engine::device::GlBackend;
use snek_engine::harness::{Harness, WindowConfig};
use snek_engine::logging::{init_logging, LoggingConfig};

pub type DemoHarness = Harness<GlBackend>;

/// Opens the window, builds demo state once with `setup`, then calls `draw`
/// every frame until the window is closed.
///
/// Any startup failure (library, window, bindings, or `setup` itself) is
/// logged and reported as `ExitCode::FAILURE`.
pub fn run_demo<T, S, D>(config: WindowConfig, setup: S, draw: D) -> ExitCode
where
    S: FnOnce(&mut DemoHarness) -> anyhow::Result<T>,
    D: FnMut(&mut T, &mut FrameCtx<'_, glow::Context>),
{
    init_logging(LoggingConfig::default());

    let mut harness = Harness::new(GlBackend::new());
    let result = start(&mut harness, &config, setup, draw);
    harness.shutdown();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}: {err:#}", config.title);
            ExitCode::FAILURE
        }
    }
}

fn start<T, S, D>(harness: &mut DemoHarness, config: &WindowConfig, setup: S, mut draw: D) -> anyhow::Result<()>
where
    S: FnOnce(&mut DemoHarness) -> anyhow::Result<T>,
    D: FnMut(&mut T, &mut FrameCtx<'_, glow::Context>),
{
    harness.initialize(config)?;
    harness.load_graphics_bindings()?;

    let mut state = setup(harness).context("demo setup failed")?;
    harness.run(|frame| draw(&mut state, frame))?;
    Ok(())
}

/// Bindings for setup code.
pub fn gl(harness: &DemoHarness) -> anyhow::Result<&glow::Context> {
    harness.gl().context("graphics bindings are not loaded")
}
