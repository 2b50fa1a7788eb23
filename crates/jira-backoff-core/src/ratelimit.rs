//! Human-readable rate-limit summary of a response.
//!
//! Purely informational: the backoff policy does not read it. Useful for
//! logging and for the CLI, which prints one per evaluated response.

use std::fmt;

use serde::Serialize;

use crate::backoff::{
    header_int, header_str, FILL_RATE, INTERVAL_SECONDS, LIMIT, NODE_ID, REMAINING, RETRY_AFTER,
};
use crate::response::ResponseHead;

/// Every rate-limit header the server may send, each optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RateLimitSummary {
    pub node_id: Option<String>,
    pub limit: Option<i64>,
    pub remaining: Option<i64>,
    pub interval_secs: Option<i64>,
    pub fill_rate: Option<i64>,
    pub retry_after_secs: Option<i64>,
}

impl RateLimitSummary {
    pub fn from_response(resp: &ResponseHead) -> Self {
        Self {
            node_id: header_str(resp, NODE_ID).ok().map(str::to_string),
            limit: header_int(resp, LIMIT).ok(),
            remaining: header_int(resp, REMAINING).ok(),
            interval_secs: header_int(resp, INTERVAL_SECONDS).ok(),
            fill_rate: header_int(resp, FILL_RATE).ok(),
            retry_after_secs: header_int(resp, RETRY_AFTER).ok(),
        }
    }

    /// True when the response carried none of the rate-limit headers.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn dash(v: Option<i64>) -> String {
    v.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string())
}

impl fmt::Display for RateLimitSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tokens {}/{} available, fill rate {} per {}s, retry after {}s",
            dash(self.remaining),
            dash(self.limit),
            dash(self.fill_rate),
            dash(self.interval_secs),
            dash(self.retry_after_secs),
        )?;
        if let Some(node) = &self.node_id {
            write!(f, " (node {node})")?;
        }
        Ok(())
    }
}
