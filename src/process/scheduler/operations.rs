/*!
 * Task Manager Operations
 * Enqueue processes and resolve completions
 */

use super::entry::Entry;
use super::TaskManager;
use crate::core::errors::SchedulerError;
use crate::core::types::{Pid, Priority};
use crate::process::Process;
use tracing::{debug, trace, warn};

impl TaskManager {
    /// Enqueue a process at `priority`, returning its newly assigned PID
    ///
    /// The process is filed as stalled if it still waits on dependencies,
    /// otherwise as ready. Dependencies on processes that already concluded
    /// are dropped; dependencies on PIDs not yet issued wait for whichever
    /// process later receives that PID.
    pub fn enqueue(
        &mut self,
        mut process: Process,
        priority: Priority,
    ) -> Result<Pid, SchedulerError> {
        let pid = self.pids.next().ok_or(SchedulerError::PidSpaceExhausted)?;
        process.assign_pid(pid);

        let pids = &self.pids;
        let live = &self.processes;
        process.retain_dependencies(|dep| {
            *dep == pid || !pids.was_issued(*dep) || live.contains_key(dep)
        });

        if priority >= self.config.max_priority_levels {
            warn!(
                pid = %pid,
                priority,
                max_priority_levels = self.config.max_priority_levels,
                "Process enqueued above the serviced priority range; it will never be dispatched"
            );
        }

        self.queues.entry(priority).or_default().enqueue(&process);
        for &dependency in process.dependencies() {
            self.graph.add_edge(dependency, pid);
        }

        debug!(
            pid = %pid,
            name = process.name(),
            priority,
            dependencies = process.dependencies().len(),
            total_work = process.total_work(),
            "Process enqueued"
        );

        self.processes.insert(pid, Entry::new(process, priority));
        self.stats.enqueued += 1;
        Ok(pid)
    }

    /// Evict a completed process and ready whatever waited on it
    ///
    /// Runs after the process's own conclude hooks: first the process leaves
    /// its queue, then each dependent (in registration order) drops the
    /// dependency and is moved to ready if it was the last one.
    pub(super) fn conclude(&mut self, pid: Pid) -> Vec<Pid> {
        let Some(entry) = self.processes.remove(&pid) else {
            return Vec::new();
        };
        if let Some(queue) = self.queues.get_mut(&entry.priority) {
            queue.remove_completed(pid);
        }

        let mut readied = Vec::new();
        for dependent in self.graph.take_dependents(pid) {
            let Some(waiting) = self.processes.get_mut(&dependent) else {
                continue;
            };
            waiting.process.resolve_dependency(pid);

            let Some(queue) = self.queues.get_mut(&waiting.priority) else {
                continue;
            };
            if queue.try_ready(&waiting.process) {
                trace!(pid = %dependent, dependency = %pid, "Process readied");
                readied.push(dependent);
            }
        }

        debug!(
            pid = %pid,
            name = entry.process.name(),
            readied = readied.len(),
            "Process completed"
        );
        readied
    }
}
