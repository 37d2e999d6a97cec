//! Tuning error types

use thiserror::Error;

/// Tuning errors
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("tunable has no hyperparameters")]
    EmptySpace,

    #[error("hyperparameter not found: {0}")]
    MissingParam(String),

    #[error("invalid tunable definition: {0}")]
    Configuration(String),

    #[error("shape mismatch: {0}")]
    Shape(String),

    #[error("cannot encode value: {0}")]
    Encoding(String),

    #[error("empty batch of configurations")]
    EmptyBatch,
}

impl TuningError {
    /// Attribute an encoding failure to the hyperparameter it came from.
    ///
    /// Hyperparameters do not know their own names; the `Tunable` does.
    pub(crate) fn in_param(self, name: &str) -> TuningError {
        match self {
            TuningError::Encoding(detail) => TuningError::Encoding(format!("{name}: {detail}")),
            other => other,
        }
    }
}

/// Result type for tuning operations
pub type Result<T> = std::result::Result<T, TuningError>;
