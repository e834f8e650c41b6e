use thiserror::Error;

use super::runtime::Phase;

/// Failures surfaced by the harness and its backends.
///
/// `Init`, `WindowCreation` and `BindingLoad` are startup failures; the
/// harness has already released whatever it acquired when they are returned.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("unable to initialize the windowing library: {0}")]
    Init(String),

    #[error("window or OpenGL context creation failed: {0}")]
    WindowCreation(String),

    #[error("failed to load OpenGL function pointers: {0}")]
    BindingLoad(String),

    #[error("failed to present frame: {0}")]
    Present(String),

    #[error("graphics bindings have not been loaded")]
    BindingsNotLoaded,

    #[error("harness is {actual:?}, expected {expected:?}")]
    InvalidPhase { expected: Phase, actual: Phase },
}

impl HarnessError {
    /// True for the errors that end a run during startup.
    pub fn is_startup(&self) -> bool {
        matches!(
            self,
            HarnessError::Init(_) | HarnessError::WindowCreation(_) | HarnessError::BindingLoad(_)
        )
    }
}
