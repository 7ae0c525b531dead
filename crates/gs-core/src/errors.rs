//! Cross-cutting error types for GenScript.
//!
//! Domain-specific errors (e.g., `DatabaseError`, `AiError`) are defined in
//! their respective crates. They converge in `gs-server`, where each is mapped
//! to an HTTP status.

use thiserror::Error;

/// Errors that can be raised by any GenScript crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The requested generation mode is not in the prompt catalog.
    #[error("Invalid mode: {mode}")]
    InvalidMode { mode: String },

    /// Request data failed validation.
    #[error("Validation error: {0}")]
    Validation(String),
}
