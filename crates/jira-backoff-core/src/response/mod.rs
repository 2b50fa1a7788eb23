//! The slice of an HTTP response that retry decisions look at.
//!
//! Only the status code and header lines are kept; bodies never influence
//! backoff, so they are not modelled here.

mod parse;

pub use parse::parse_head_lines;

/// HTTP 429 Too Many Requests.
pub const TOO_MANY_REQUESTS: u32 = 429;

/// Status line and headers of a response, in the order they were received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseHead {
    pub status: u32,
    pub headers: Vec<(String, String)>,
}

impl ResponseHead {
    pub fn new(status: u32) -> Self {
        Self {
            status,
            headers: Vec::new(),
        }
    }

    /// Builder-style helper for appending a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Value of the first header named `name` (ASCII case-insensitive).
    ///
    /// An empty value is reported as `None`, same as a missing header.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn is_too_many_requests(&self) -> bool {
        self.status == TOO_MANY_REQUESTS
    }
}
