//! Retry loop: run a closure until success or the policy says stop.

use std::time::Duration;

use super::classify;
use super::error::AttemptError;
use super::policy::{ErrorKind, RetryDecision, RetryPolicy};
use crate::backoff::BackoffPolicy;

/// Runs `attempt_fn` until it succeeds, fails terminally, or retries run out.
///
/// Between attempts the delay chosen by `backoff` is handed to `sleep`
/// (pass `std::thread::sleep` in production). `backoff` should be shared by
/// every loop that talks to the same client so node state is pooled.
pub fn run_with_retry<T, F, S>(
    policy: &RetryPolicy,
    backoff: &BackoffPolicy,
    mut attempt_fn: F,
    mut sleep: S,
) -> Result<T, AttemptError>
where
    F: FnMut() -> Result<T, AttemptError>,
    S: FnMut(Duration),
{
    let mut attempt = 0u32;
    loop {
        let err = match attempt_fn() {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };
        let kind = classify::classify(&err);
        match policy.decide(attempt, kind, err.response(), backoff) {
            RetryDecision::NoRetry => {
                if kind == ErrorKind::Other {
                    tracing::debug!(error = %err, "not retryable");
                } else {
                    tracing::warn!(error = %err, retries = attempt, "giving up after retries");
                }
                return Err(err);
            }
            RetryDecision::RetryAfter(delay) => {
                tracing::debug!(error = %err, attempt, ?delay, "retrying");
                sleep(delay);
                attempt += 1;
            }
        }
    }
}
