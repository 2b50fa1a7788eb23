//! Rate-limit aware backoff policy.
//!
//! Invoked by an HTTP retry loop after every failed attempt. For most
//! responses it returns a plain exponential delay. For a 429 that carries the
//! full set of rate-limit headers it records the rejecting node's
//! `Retry-After` in a table shared by every caller of the same client, and
//! when no known node is currently asking for a wait it paces retries at the
//! token-bucket refill rate instead.

mod exponential;
mod headers;
mod table;

use std::sync::Arc;
use std::time::Duration;

use crate::response::ResponseHead;

pub use exponential::exponential_backoff;
pub use headers::{
    HeaderError, RateLimitHeaders, FILL_RATE, INTERVAL_SECONDS, LIMIT, NODE_ID, REMAINING,
    RETRY_AFTER,
};
pub use table::{sum_wait_values, NodeWaitTable};

pub(crate) use headers::{header_int, header_str};

/// Backoff strategy with per-node rate-limit state.
///
/// Create one per HTTP client. Clones share the same node table, so hand a
/// clone to each concurrent retry loop of that client.
#[derive(Debug, Clone, Default)]
pub struct BackoffPolicy {
    nodes: Arc<NodeWaitTable>,
}

impl BackoffPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Per-node waits recorded so far.
    pub fn nodes(&self) -> &NodeWaitTable {
        &self.nodes
    }

    /// Delay before retry number `attempt` (0 = first retry).
    ///
    /// `response` is `None` when the previous attempt got no response at all.
    /// Never fails: unusable rate-limit headers fall back to
    /// [`exponential_backoff`].
    ///
    /// A complete 429 overwrites the node's recorded wait. The steady-state
    /// interval `interval / fill_rate` is returned only when the recorded
    /// waits of *all* nodes sum to zero; otherwise the exponential schedule is
    /// used and the recorded `Retry-After` does not shape the delay.
    pub fn compute(
        &self,
        min: Duration,
        max: Duration,
        attempt: u32,
        response: Option<&ResponseHead>,
    ) -> Duration {
        let Some(response) = response.filter(|r| r.is_too_many_requests()) else {
            return exponential_backoff(min, max, attempt);
        };

        let headers = match RateLimitHeaders::from_response(response) {
            Ok(headers) => headers,
            Err(err) => {
                tracing::debug!(error = %err, attempt, "ignoring rate-limit headers");
                return exponential_backoff(min, max, attempt);
            }
        };

        let total_wait = self
            .nodes
            .record_and_sum(&headers.node_id, headers.retry_after_secs);
        if total_wait != 0 {
            tracing::debug!(
                node = %headers.node_id,
                retry_after_secs = headers.retry_after_secs,
                total_wait,
                attempt,
                "nodes still throttling"
            );
            return exponential_backoff(min, max, attempt);
        }

        match steady_state_interval(headers.interval_secs, headers.fill_rate) {
            Some(delay) => {
                tracing::debug!(
                    node = %headers.node_id,
                    interval_secs = headers.interval_secs,
                    fill_rate = headers.fill_rate,
                    delay_secs = delay.as_secs(),
                    "no node throttling, pacing at fill rate"
                );
                delay
            }
            None => {
                tracing::debug!(
                    node = %headers.node_id,
                    interval_secs = headers.interval_secs,
                    fill_rate = headers.fill_rate,
                    "unusable fill rate"
                );
                exponential_backoff(min, max, attempt)
            }
        }
    }
}

/// `interval / fill_rate` whole seconds; `None` for a zero fill rate.
/// A negative quotient is clamped to zero.
fn steady_state_interval(interval_secs: i64, fill_rate: i64) -> Option<Duration> {
    let secs = interval_secs.checked_div(fill_rate)?;
    Some(Duration::from_secs(u64::try_from(secs).unwrap_or(0)))
}
