//! Error types for exam-core.

use thiserror::Error;

/// Result type alias using CoreError.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised when parsing selector strings coming from callers.
///
/// Formatting itself never fails; these only cover names that do not map
/// onto a known enum value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("unknown output format: {0}")]
    UnknownOutputFormat(String),

    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),
}
