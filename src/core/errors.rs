/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for everything that touches caller-supplied input
pub type SchedResult<T> = Result<T, SchedError>;

/// Errors surfaced at the simulation boundary
///
/// The engine never produces these; they are raised before a run begins.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedError {
    #[error("Invalid input for {field}: {reason}")]
    #[diagnostic(
        code(sched::invalid_input),
        help("Check the named field of the request. Arrival must be >= 0, burst > 0, and the time quantum > 0.")
    )]
    InvalidInput { field: String, reason: String },

    #[error("Unsupported scheduling policy '{0}'")]
    #[diagnostic(
        code(sched::unsupported_policy),
        help("Valid policies: fcfs, priority, round_robin, srtf")
    )]
    UnsupportedPolicy(String),
}

impl SchedError {
    /// Build an `InvalidInput` error for a named field
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Offending field, if the error concerns one
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidInput { field, .. } => Some(field),
            Self::UnsupportedPolicy(_) => None,
        }
    }
}
