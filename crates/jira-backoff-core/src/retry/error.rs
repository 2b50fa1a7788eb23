//! Failure of a single request attempt.

use crate::response::ResponseHead;

/// Returned by an attempt closure so the retry loop can classify it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttemptError {
    /// No response was received (connect failure, reset, timeout).
    #[error("connection failed: {0}")]
    Connection(String),
    /// A response arrived with a non-success status.
    #[error("HTTP {}", .0.status)]
    Status(ResponseHead),
}

impl AttemptError {
    /// The response behind this error, if one was received.
    pub fn response(&self) -> Option<&ResponseHead> {
        match self {
            AttemptError::Connection(_) => None,
            AttemptError::Status(head) => Some(head),
        }
    }
}
