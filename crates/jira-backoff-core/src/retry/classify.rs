//! Classify HTTP status codes and attempt errors into retry kinds.

use super::error::AttemptError;
use super::policy::ErrorKind;

/// Classify an HTTP status code for retry decisions.
///
/// 429 is throttling; 5xx other than 501 is retryable; everything else,
/// including 403 and 404, is terminal.
pub fn classify_status(code: u32) -> ErrorKind {
    match code {
        429 => ErrorKind::Throttled,
        501 => ErrorKind::Other,
        500..=599 => ErrorKind::Http5xx(code as u16),
        _ => ErrorKind::Other,
    }
}

/// Classify an attempt error into an ErrorKind.
pub fn classify(e: &AttemptError) -> ErrorKind {
    match e {
        AttemptError::Connection(_) => ErrorKind::Connection,
        AttemptError::Status(head) => classify_status(head.status),
    }
}
