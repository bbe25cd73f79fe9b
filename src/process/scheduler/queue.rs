/*!
 * Task Queue
 * Ready and stalled pools for a single priority level
 */

use crate::core::types::Pid;
use crate::process::Process;
use std::collections::VecDeque;

/// A queue for the processes of one priority
///
/// Every PID filed here sits in exactly one of the two pools until it is
/// removed on completion. Both pools keep insertion order.
#[derive(Debug, Default)]
pub struct TaskQueue {
    ready: VecDeque<Pid>,
    stalled: Vec<Pid>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// File a process as stalled if it has unmet dependencies, else ready
    pub fn enqueue(&mut self, process: &Process) {
        let Some(pid) = process.pid() else {
            debug_assert!(false, "process '{}' queued without a PID", process.name());
            return;
        };
        debug_assert!(!self.contains(pid), "process {} queued twice", pid);

        if process.has_unmet_dependencies() {
            self.stalled.push(pid);
        } else {
            self.ready.push_back(pid);
        }
    }

    /// Move a stalled process to the back of the ready pool once its last
    /// dependency has concluded; no-op otherwise
    pub fn try_ready(&mut self, process: &Process) -> bool {
        if process.has_unmet_dependencies() {
            return false;
        }
        let Some(pid) = process.pid() else {
            return false;
        };
        match self.stalled.iter().position(|&p| p == pid) {
            Some(pos) => {
                self.stalled.remove(pos);
                self.ready.push_back(pid);
                true
            }
            None => false,
        }
    }

    /// Up to `max` PIDs from the front of the ready pool, left in place,
    /// and whether anything is stalled
    pub fn pull(&self, max: usize) -> (Vec<Pid>, bool) {
        let processes = self.ready.iter().take(max).copied().collect();
        (processes, !self.stalled.is_empty())
    }

    /// Remove a completed process from the ready pool (idempotent)
    pub fn remove_completed(&mut self, pid: Pid) -> bool {
        match self.ready.iter().position(|&p| p == pid) {
            Some(pos) => {
                self.ready.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn ready(&self) -> impl ExactSizeIterator<Item = Pid> + '_ {
        self.ready.iter().copied()
    }

    pub fn stalled(&self) -> impl ExactSizeIterator<Item = Pid> + '_ {
        self.stalled.iter().copied()
    }

    pub fn is_ready(&self, pid: Pid) -> bool {
        self.ready.contains(&pid)
    }

    pub fn is_stalled(&self, pid: Pid) -> bool {
        self.stalled.contains(&pid)
    }

    pub fn contains(&self, pid: Pid) -> bool {
        self.is_ready(pid) || self.is_stalled(pid)
    }

    pub fn has_stalled(&self) -> bool {
        !self.stalled.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ready.len() + self.stalled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ready.is_empty() && self.stalled.is_empty()
    }
}
