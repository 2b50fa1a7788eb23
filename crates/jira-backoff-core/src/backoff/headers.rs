//! Rate-limit headers sent alongside a 429.

use crate::response::ResponseHead;

/// Backend node that rejected the request.
pub const NODE_ID: &str = "x-anodeid";
/// Token-bucket refill interval, in seconds.
pub const INTERVAL_SECONDS: &str = "x-ratelimit-interval-seconds";
/// Tokens added per refill interval.
pub const FILL_RATE: &str = "x-ratelimit-fillrate";
/// Server-suggested wait, in seconds.
pub const RETRY_AFTER: &str = "retry-after";
/// Bucket capacity (informational).
pub const LIMIT: &str = "x-ratelimit-limit";
/// Tokens left in the bucket (informational).
pub const REMAINING: &str = "x-ratelimit-remaining";

/// Why a rate-limit header could not be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeaderError {
    #[error("missing header {name}")]
    Missing { name: &'static str },
    #[error("header {name} is not an integer: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// The four headers the policy needs before it will touch the node table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitHeaders {
    pub node_id: String,
    pub interval_secs: i64,
    pub fill_rate: i64,
    pub retry_after_secs: i64,
}

impl RateLimitHeaders {
    /// Read all four headers; the first missing or malformed one is reported.
    pub fn from_response(resp: &ResponseHead) -> Result<Self, HeaderError> {
        let node_id = header_str(resp, NODE_ID)?.to_string();
        let interval_secs = header_int(resp, INTERVAL_SECONDS)?;
        let fill_rate = header_int(resp, FILL_RATE)?;
        let retry_after_secs = header_int(resp, RETRY_AFTER)?;
        Ok(Self {
            node_id,
            interval_secs,
            fill_rate,
            retry_after_secs,
        })
    }
}

pub(crate) fn header_str<'a>(
    resp: &'a ResponseHead,
    name: &'static str,
) -> Result<&'a str, HeaderError> {
    resp.header(name).ok_or(HeaderError::Missing { name })
}

pub(crate) fn header_int(resp: &ResponseHead, name: &'static str) -> Result<i64, HeaderError> {
    let value = header_str(resp, name)?;
    value.parse::<i64>().map_err(|_| HeaderError::Invalid {
        name,
        value: value.to_string(),
    })
}
