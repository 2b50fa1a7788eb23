//! `jira-backoff compute` – evaluate the policy once.

use anyhow::{bail, Result};
use jira_backoff_core::backoff::BackoffPolicy;
use jira_backoff_core::ratelimit::RateLimitSummary;
use jira_backoff_core::response::ResponseHead;
use jira_backoff_core::retry::RetryPolicy;

/// Split `Name: value`.
pub(crate) fn parse_header_arg(arg: &str) -> Result<(String, String)> {
    let Some((name, value)) = arg.split_once(':') else {
        bail!("header must look like 'Name: value', got {arg:?}");
    };
    let name = name.trim();
    if name.is_empty() {
        bail!("header name is empty in {arg:?}");
    }
    Ok((name.to_string(), value.trim().to_string()))
}

pub(crate) fn build_response(status: u32, headers: &[String]) -> Result<ResponseHead> {
    let mut head = ResponseHead::new(status);
    for arg in headers {
        let (name, value) = parse_header_arg(arg)?;
        head = head.with_header(name, value);
    }
    Ok(head)
}

pub fn run_compute(
    policy: &RetryPolicy,
    status: u32,
    headers: &[String],
    attempt: u32,
) -> Result<()> {
    let head = build_response(status, headers)?;
    let backoff = BackoffPolicy::new();
    let delay = backoff.compute(policy.min_wait, policy.max_wait, attempt, Some(&head));
    println!("delay: {:?}", delay);
    println!("rate limit: {}", RateLimitSummary::from_response(&head));
    Ok(())
}
