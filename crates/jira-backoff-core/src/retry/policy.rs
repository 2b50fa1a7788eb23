use std::time::Duration;

use crate::backoff::BackoffPolicy;
use crate::config::RetryConfig;
use crate::response::ResponseHead;

/// High-level classification of a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No response at all (connect/read failure).
    Connection,
    /// Server asked us to slow down (429).
    Throttled,
    /// Retryable server error.
    Http5xx(u16),
    /// Anything else; not retried.
    Other,
}

/// Decision returned by the retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Do not retry this error.
    NoRetry,
    /// Retry after the given delay.
    RetryAfter(Duration),
}

/// Attempt ceiling plus the wait bounds handed to the backoff policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of retries (not counting the first attempt).
    pub max_retries: u32,
    /// Lower bound of the exponential schedule.
    pub min_wait: Duration,
    /// Upper bound of the exponential schedule.
    pub max_wait: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 4,
            min_wait: Duration::from_secs(1),
            max_wait: Duration::from_secs(30),
        }
    }
}

impl RetryPolicy {
    /// Build from config. A negative or non-finite `min_wait_secs` keeps the default.
    pub fn from_config(cfg: &RetryConfig) -> Self {
        let defaults = Self::default();
        Self {
            max_retries: cfg.max_retries,
            min_wait: Duration::try_from_secs_f64(cfg.min_wait_secs).unwrap_or(defaults.min_wait),
            max_wait: Duration::from_secs(cfg.max_wait_secs),
        }
    }

    /// Decide whether retry number `attempt` (0-based) should happen and after how long.
    pub fn decide(
        &self,
        attempt: u32,
        kind: ErrorKind,
        response: Option<&ResponseHead>,
        backoff: &BackoffPolicy,
    ) -> RetryDecision {
        if attempt >= self.max_retries {
            return RetryDecision::NoRetry;
        }

        match kind {
            ErrorKind::Other => RetryDecision::NoRetry,
            ErrorKind::Connection | ErrorKind::Throttled | ErrorKind::Http5xx(_) => {
                RetryDecision::RetryAfter(backoff.compute(
                    self.min_wait,
                    self.max_wait,
                    attempt,
                    response,
                ))
            }
        }
    }
}
