//! Retry decisions layered over the backoff policy.
//!
//! Status classification (throttling, server errors, terminal client errors)
//! and the attempt ceiling live here; the delay itself always comes from
//! [`BackoffPolicy`](crate::backoff::BackoffPolicy). No I/O happens in this
//! module: callers supply the attempt closure and the sleep function.

mod classify;
mod error;
mod policy;
mod run;

pub use classify::{classify, classify_status};
pub use error::AttemptError;
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
pub use run::run_with_retry;
