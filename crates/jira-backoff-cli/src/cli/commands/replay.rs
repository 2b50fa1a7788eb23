//! `jira-backoff replay` – run recorded responses through one shared policy.
//!
//! File format:
//!
//! ```toml
//! [[response]]
//! status = 429
//! attempt = 0
//! headers = { x-anodeid = "node-1", retry-after = "2" }
//! ```

use anyhow::{Context, Result};
use jira_backoff_core::backoff::BackoffPolicy;
use jira_backoff_core::ratelimit::RateLimitSummary;
use jira_backoff_core::response::ResponseHead;
use jira_backoff_core::retry::{classify_status, RetryDecision, RetryPolicy};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RecordedResponse {
    pub status: u32,
    #[serde(default)]
    pub attempt: u32,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

impl RecordedResponse {
    fn to_head(&self) -> ResponseHead {
        self.headers
            .iter()
            .fold(ResponseHead::new(self.status), |head, (k, v)| {
                head.with_header(k.as_str(), v.as_str())
            })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ReplayFile {
    #[serde(rename = "response", default)]
    pub responses: Vec<RecordedResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct ReplayStep {
    pub index: usize,
    pub status: u32,
    pub attempt: u32,
    /// Delay in milliseconds, or `None` when the response is not retried.
    pub delay_ms: Option<u128>,
    pub rate_limit: RateLimitSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct ReplayReport {
    pub steps: Vec<ReplayStep>,
    /// Node table after the last response.
    pub nodes: BTreeMap<String, i64>,
}

/// Evaluate every response in order against a single BackoffPolicy.
pub(crate) fn replay_responses(policy: &RetryPolicy, file: &ReplayFile) -> ReplayReport {
    let backoff = BackoffPolicy::new();
    let steps = file
        .responses
        .iter()
        .enumerate()
        .map(|(index, recorded)| {
            let head = recorded.to_head();
            let kind = classify_status(recorded.status);
            let delay_ms = match policy.decide(recorded.attempt, kind, Some(&head), &backoff) {
                RetryDecision::NoRetry => None,
                RetryDecision::RetryAfter(d) => Some(d.as_millis()),
            };
            ReplayStep {
                index,
                status: recorded.status,
                attempt: recorded.attempt,
                delay_ms,
                rate_limit: RateLimitSummary::from_response(&head),
            }
        })
        .collect();
    ReplayReport {
        steps,
        nodes: backoff.nodes().snapshot().into_iter().collect(),
    }
}

pub fn run_replay(policy: &RetryPolicy, path: &Path, json: bool) -> Result<()> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("read replay file: {}", path.display()))?;
    let file: ReplayFile =
        toml::from_str(&data).with_context(|| format!("parse replay file: {}", path.display()))?;
    tracing::debug!("replaying {} responses from {}", file.responses.len(), path.display());

    let report = replay_responses(policy, &file);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{:<4} {:<6} {:<8} {:<10} {}", "#", "STATUS", "ATTEMPT", "DELAY", "RATE LIMIT");
    for step in &report.steps {
        let delay = step
            .delay_ms
            .map(|ms| format!("{ms}ms"))
            .unwrap_or_else(|| "no retry".to_string());
        println!(
            "{:<4} {:<6} {:<8} {:<10} {}",
            step.index, step.status, step.attempt, delay, step.rate_limit
        );
    }
    if report.nodes.is_empty() {
        println!("No nodes recorded.");
    } else {
        println!("{:<24} {}", "NODE", "RETRY-AFTER");
        for (node, wait) in &report.nodes {
            println!("{:<24} {}", node, wait);
        }
    }
    Ok(())
}
