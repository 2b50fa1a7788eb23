//! Per-node record of the most recent `Retry-After`, shared by concurrent retry loops.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Last reported wait (seconds) for each backend node.
///
/// Values are point-in-time snapshots, never accumulated. Entries are never
/// removed; the table grows with the number of distinct nodes seen.
#[derive(Debug, Default)]
pub struct NodeWaitTable {
    waits: Mutex<HashMap<String, i64>>,
}

impl NodeWaitTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the wait for `node_id` and return the sum over all nodes.
    ///
    /// Both happen under one lock acquisition, so the sum always includes this write.
    pub fn record_and_sum(&self, node_id: &str, wait_secs: i64) -> i64 {
        let mut waits = self.lock();
        waits.insert(node_id.to_string(), wait_secs);
        sum_wait_values(&waits)
    }

    pub fn get(&self, node_id: &str) -> Option<i64> {
        self.lock().get(node_id).copied()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Copy of the current table.
    pub fn snapshot(&self) -> HashMap<String, i64> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, i64>> {
        // Critical sections are a single insert or read; a poisoned map is still consistent.
        self.waits.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Sum of all recorded waits. An empty table sums to 0.
///
/// Addition wraps on overflow, so the result does not depend on map iteration order.
pub fn sum_wait_values(waits: &HashMap<String, i64>) -> i64 {
    waits.values().fold(0i64, |acc, v| acc.wrapping_add(*v))
}
