//! Integration test: many retry loops sharing one BackoffPolicy across worker threads.
//!
//! Each task owns one node and reports a descending series of `Retry-After`
//! values ending at zero. Afterwards every node must hold exactly its last
//! write, and the shared table must unlock fill-rate pacing.

use std::time::Duration;

use jira_backoff_core::backoff::BackoffPolicy;
use jira_backoff_core::response::ResponseHead;

const MIN: Duration = Duration::from_secs(1);
const MAX: Duration = Duration::from_secs(30);

fn throttled(node: &str, retry_after: u32) -> ResponseHead {
    ResponseHead::new(429)
        .with_header("X-Anodeid", node)
        .with_header("X-Ratelimit-Interval-Seconds", "60")
        .with_header("X-Ratelimit-Fillrate", "15")
        .with_header("Retry-After", retry_after.to_string())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_nodes_keep_their_last_write() {
    let policy = BackoffPolicy::new();
    let nodes = 32u32;
    let rounds = 200u32;

    let mut handles = Vec::new();
    for n in 0..nodes {
        let policy = policy.clone();
        handles.push(tokio::task::spawn_blocking(move || {
            let node = format!("node-{n}");
            for round in 0..rounds {
                let retry_after = rounds - 1 - round;
                let attempt = round % 6;
                let delay = policy.compute(MIN, MAX, attempt, Some(&throttled(&node, retry_after)));
                assert!(delay <= MAX);
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let snapshot = policy.nodes().snapshot();
    assert_eq!(snapshot.len(), nodes as usize);
    for n in 0..nodes {
        assert_eq!(snapshot.get(&format!("node-{n}")), Some(&0), "node-{n}");
    }

    // Every node now reports zero, so the next complete 429 is paced at 60/15.
    let delay = policy.compute(MIN, MAX, 5, Some(&throttled("node-0", 0)));
    assert_eq!(delay, Duration::from_secs(4));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn one_throttling_node_holds_everyone_on_exponential() {
    let policy = BackoffPolicy::new();
    policy.compute(MIN, MAX, 0, Some(&throttled("slow-node", 9)));

    let mut handles = Vec::new();
    for n in 0..8u32 {
        let policy = policy.clone();
        handles.push(tokio::task::spawn_blocking(move || {
            policy.compute(MIN, MAX, 3, Some(&throttled(&format!("node-{n}"), 0)))
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap(), Duration::from_secs(8));
    }
    assert_eq!(policy.nodes().get("slow-node"), Some(9));
}
