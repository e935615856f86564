//! Error types for crew-core

use thiserror::Error;

/// Result type alias for crew operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while a crew runs
///
/// Construction failures are reported separately as [`crate::CrewError`].
#[derive(Error, Debug)]
pub enum Error {
    /// A tool received parameters that do not match its schema
    #[error("Invalid input for tool '{tool}': {detail}")]
    InvalidToolInput {
        /// Tool name
        tool: String,
        /// What was wrong with the input
        detail: String,
    },

    /// A tool call failed
    #[error("Tool '{tool}' failed: {detail}")]
    ToolFailed {
        /// Tool name
        tool: String,
        /// Underlying cause
        detail: String,
    },

    /// The execution engine could not complete the run
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),
}
