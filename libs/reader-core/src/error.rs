//! Error types for reader-core.

use thiserror::Error;

/// Result type alias using CoreError.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Contract violations raised by the core.
///
/// Missing cards and reversed scopes are not errors; they resolve to no-ops
/// and empty selections.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid rating `{value}`, expected one of again, hard, good, easy")]
    InvalidRating { value: String },
}
