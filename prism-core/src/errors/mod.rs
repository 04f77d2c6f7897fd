//! Error types for the prism workspace.
//!
//! Each subsystem defines its own error enum; `PrismError` folds them into
//! one top-level type via `From` so engine code can use `?` throughout.

pub mod cube_error;
pub mod validation_error;

pub use cube_error::CubeError;
pub use validation_error::InconsistentInputError;

/// Top-level error for the prism workspace.
#[derive(Debug, thiserror::Error)]
pub enum PrismError {
    #[error("inconsistent input: {0}")]
    InconsistentInput(#[from] InconsistentInputError),

    #[error("cube error: {0}")]
    Cube(#[from] CubeError),
}

/// Result alias used across the workspace.
pub type PrismResult<T> = Result<T, PrismError>;
