/*!
 * Scheduler Statistics
 * Counters and per-tick reports
 */

use super::TaskManager;
use crate::core::types::Pid;
use serde::{Deserialize, Serialize};

/// Cumulative scheduler counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerStats {
    pub ticks: u64,
    pub enqueued: u64,
    /// Dispatch attempts, whether or not the process progressed
    pub dispatched: u64,
    pub completed: u64,
    /// Ticks that attempted nothing while stalled work existed
    pub livelock_ticks: u64,
    pub active_processes: usize,
}

/// Outcome of a single tick
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    /// Processes attempted this tick (at most the dispatch budget)
    pub attempted: usize,
    /// Processes that completed this tick, in completion order
    pub completed: Vec<Pid>,
    /// Processes moved from stalled to ready by completions this tick
    pub readied: Vec<Pid>,
    /// Nothing was attempted while stalled work existed
    pub livelock: bool,
}

impl TickReport {
    pub fn is_idle(&self) -> bool {
        self.attempted == 0
    }
}

impl TaskManager {
    /// Snapshot of the cumulative counters
    pub fn stats(&self) -> SchedulerStats {
        SchedulerStats {
            active_processes: self.processes.len(),
            ..self.stats
        }
    }
}
