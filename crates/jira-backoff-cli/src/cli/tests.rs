//! CLI parse and command tests.

use super::commands::{build_response, parse_header_arg, replay_responses, ReplayFile};
use super::{Cli, CliCommand, WaitArgs};
use clap::Parser;
use jira_backoff_core::retry::RetryPolicy;
use std::time::Duration;

fn parse(args: &[&str]) -> CliCommand {
    Cli::try_parse_from(args).unwrap().command
}

#[test]
fn cli_parse_compute_defaults() {
    match parse(&["jira-backoff", "compute"]) {
        CliCommand::Compute {
            status,
            headers,
            attempt,
            wait,
        } => {
            assert_eq!(status, 429);
            assert!(headers.is_empty());
            assert_eq!(attempt, 0);
            assert!(wait.min_wait_secs.is_none());
            assert!(wait.max_wait_secs.is_none());
        }
        _ => panic!("expected Compute"),
    }
}

#[test]
fn cli_parse_compute_with_headers() {
    match parse(&[
        "jira-backoff",
        "compute",
        "-H",
        "X-Anodeid: node-1",
        "--header",
        "Retry-After: 0",
        "--attempt",
        "3",
        "--max-wait-secs",
        "10",
    ]) {
        CliCommand::Compute {
            headers,
            attempt,
            wait,
            ..
        } => {
            assert_eq!(headers, vec!["X-Anodeid: node-1", "Retry-After: 0"]);
            assert_eq!(attempt, 3);
            assert_eq!(wait.max_wait_secs, Some(10));
        }
        _ => panic!("expected Compute"),
    }
}

#[test]
fn cli_parse_replay() {
    match parse(&["jira-backoff", "replay", "recorded.toml", "--json"]) {
        CliCommand::Replay { path, json, .. } => {
            assert_eq!(path.to_str(), Some("recorded.toml"));
            assert!(json);
        }
        _ => panic!("expected Replay"),
    }
}

#[test]
fn cli_parse_config() {
    assert!(matches!(parse(&["jira-backoff", "config"]), CliCommand::Config));
}

#[test]
fn wait_args_override_policy() {
    let wait = WaitArgs {
        min_wait_secs: Some(0.25),
        max_wait_secs: Some(5),
    };
    let p = wait.apply(RetryPolicy::default()).unwrap();
    assert_eq!(p.min_wait, Duration::from_millis(250));
    assert_eq!(p.max_wait, Duration::from_secs(5));
    assert_eq!(p.max_retries, RetryPolicy::default().max_retries);
}

#[test]
fn wait_args_reject_negative_min() {
    let wait = WaitArgs {
        min_wait_secs: Some(-1.0),
        max_wait_secs: None,
    };
    assert!(wait.apply(RetryPolicy::default()).is_err());
}

#[test]
fn header_args() {
    assert_eq!(
        parse_header_arg("Retry-After: 2").unwrap(),
        ("Retry-After".to_string(), "2".to_string())
    );
    assert!(parse_header_arg("Retry-After 2").is_err());
    assert!(parse_header_arg(": 2").is_err());

    let head = build_response(429, &["x-anodeid: node-1".to_string()]).unwrap();
    assert_eq!(head.header("X-Anodeid"), Some("node-1"));
}

#[test]
fn replay_shares_node_table_across_responses() {
    let file: ReplayFile = toml::from_str(
        r#"
        [[response]]
        status = 429
        attempt = 0
        headers = { x-anodeid = "node-a", x-ratelimit-interval-seconds = "60", x-ratelimit-fillrate = "15", retry-after = "3" }

        [[response]]
        status = 429
        attempt = 3
        headers = { x-anodeid = "node-b", x-ratelimit-interval-seconds = "60", x-ratelimit-fillrate = "15", retry-after = "0" }

        [[response]]
        status = 429
        attempt = 3
        headers = { x-anodeid = "node-a", x-ratelimit-interval-seconds = "60", x-ratelimit-fillrate = "15", retry-after = "0" }

        [[response]]
        status = 404
        "#,
    )
    .unwrap();

    let report = replay_responses(&RetryPolicy::default(), &file);
    let delays: Vec<_> = report.steps.iter().map(|s| s.delay_ms).collect();
    assert_eq!(delays, vec![Some(1000), Some(8000), Some(4000), None]);
    assert_eq!(report.nodes.get("node-a"), Some(&0));
    assert_eq!(report.nodes.get("node-b"), Some(&0));
    assert_eq!(report.steps[0].rate_limit.retry_after_secs, Some(3));
}
