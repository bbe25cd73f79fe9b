/*!
 * Task Manager
 * Priority-bucketed cooperative scheduler driven by simulated ticks
 */

use crate::core::errors::ConfigError;
use crate::core::id::PidGenerator;
use crate::core::types::{Pid, Priority};
use crate::process::types::DispatchState;
use crate::process::Process;
use ahash::HashMap;
use std::collections::BTreeMap;
use tracing::info;

pub mod config;
mod dispatch;
mod entry;
pub mod graph;
mod operations;
pub mod queue;
pub mod stats;

pub use config::SchedulerConfig;
pub use graph::DependencyGraph;
pub use queue::TaskQueue;
pub use stats::{SchedulerStats, TickReport};

use entry::Entry;

/// The manager for scheduling and task updates of a simulated OS
///
/// Owns every priority bucket and, through them, every enqueued process
/// until it completes. Priorities are serviced in ascending order, sharing
/// one dispatch budget per tick.
#[derive(Debug)]
pub struct TaskManager {
    config: SchedulerConfig,

    // Priority buckets, created on first use
    queues: BTreeMap<Priority, TaskQueue>,

    // Live processes; evicted on completion
    processes: HashMap<Pid, Entry>,

    graph: DependencyGraph,
    pids: PidGenerator,
    stats: SchedulerStats,
}

impl TaskManager {
    /// Create a task manager with default configuration
    pub fn new() -> Self {
        Self::build(SchedulerConfig::default())
    }

    /// Create a task manager with validated configuration
    pub fn with_config(config: SchedulerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: SchedulerConfig) -> Self {
        info!(
            dispatch_budget = config.dispatch_budget_per_tick,
            max_priority_levels = config.max_priority_levels,
            "Task manager initialized"
        );

        Self {
            config,
            queues: BTreeMap::new(),
            processes: HashMap::default(),
            graph: DependencyGraph::new(),
            pids: PidGenerator::default(),
            stats: SchedulerStats::default(),
        }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// A live (enqueued, not yet completed) process
    pub fn process(&self, pid: Pid) -> Option<&Process> {
        self.processes.get(&pid).map(|e| &e.process)
    }

    /// Priority bucket a live process was filed under
    pub fn priority_of(&self, pid: Pid) -> Option<Priority> {
        self.processes.get(&pid).map(|e| e.priority)
    }

    /// Whether a live process is stalled or ready
    pub fn dispatch_state(&self, pid: Pid) -> Option<DispatchState> {
        let entry = self.processes.get(&pid)?;
        let queue = self.queues.get(&entry.priority)?;
        if queue.is_ready(pid) {
            Some(DispatchState::Ready)
        } else if queue.is_stalled(pid) {
            Some(DispatchState::Stalled)
        } else {
            None
        }
    }

    /// Bucket for a priority, if anything was ever enqueued there
    pub fn queue(&self, priority: Priority) -> Option<&TaskQueue> {
        self.queues.get(&priority)
    }

    /// Priorities with a bucket, ascending
    pub fn priorities(&self) -> impl Iterator<Item = Priority> + '_ {
        self.queues.keys().copied()
    }

    /// Live processes waiting on `pid`, in registration order
    pub fn dependents_of(&self, pid: Pid) -> &[Pid] {
        self.graph.dependents_of(pid)
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    /// Number of live processes
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}
