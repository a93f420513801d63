//! Error types for ShiftForge

use std::time::Duration;

use thiserror::Error;

/// Main error type for ShiftForge operations.
///
/// Infeasible and unbounded models are not errors: they are reported through
/// [`SolveStatus`](crate::SolveStatus) on the returned solution.
#[derive(Debug, Error)]
pub enum ShiftForgeError {
    /// Missing or malformed staff, wage or weight data
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The solver backend failed or reported a status outside the known set
    #[error("Solver integration error: {0}")]
    SolverIntegration(String),

    /// Solving was cancelled by the host
    #[error("Solver was cancelled")]
    Cancelled,

    /// The backend did not return within the watchdog deadline
    #[error("Solver did not return within {0:?}")]
    DeadlineExceeded(Duration),

    /// Invalid operation for current model state
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl ShiftForgeError {
    /// Shorthand for a [`ShiftForgeError::Configuration`] error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Shorthand for a [`ShiftForgeError::SolverIntegration`] error.
    pub fn solver(msg: impl Into<String>) -> Self {
        Self::SolverIntegration(msg.into())
    }
}

/// Result type alias for ShiftForge operations
pub type Result<T> = std::result::Result<T, ShiftForgeError>;
