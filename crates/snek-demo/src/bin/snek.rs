//! Empty window; arrow keys pick the clear color, Escape quits.

use std::process::ExitCode;

use snek_engine::harness::WindowConfig;

fn main() -> ExitCode {
    snek_demo::run_demo(WindowConfig::default(), |_| Ok(()), |_, _| {})
}
