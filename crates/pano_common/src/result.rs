//! Defects in the static board tables.

/// Result of a lookup into a table that must be total.
pub type PanoResult<T> = Result<T, InternalError>;

/// A table that must cover every revision has a gap.
///
/// This is a bug in the board description, never a user input problem, so
/// callers propagate it rather than falling back to a default.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("internal consistency fault: {message}")]
pub struct InternalError {
    /// What is missing or inconsistent.
    pub message: String,
}

impl InternalError {
    /// Creates a fault with the given description.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
