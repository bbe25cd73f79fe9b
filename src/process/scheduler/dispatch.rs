/*!
 * Tick Dispatch
 * Per-tick budgeted pass over the priority buckets
 */

use super::stats::TickReport;
use super::TaskManager;
use crate::core::errors::SchedulerError;
use crate::core::limits::BASE_WORK_RATE;
use crate::core::types::{Pid, Seconds};
use crate::hardware::CapabilitySource;
use tracing::{debug_span, trace, warn};

impl TaskManager {
    /// Advance simulated time by `dt` seconds
    ///
    /// Priorities `0..max_priority_levels` are visited in ascending order and
    /// each bucket is asked for at most the remaining budget of ready
    /// processes, front first. Every attempt consumes one budget slot whether
    /// or not the process finishes. Processes readied by a completion join
    /// the back of their bucket; if that bucket was already pulled this tick
    /// they wait for the next one.
    ///
    /// When nothing at all is attempted while some visited bucket holds
    /// stalled work, the tick is reported as a livelock. Partial starvation
    /// (some work attempted, other buckets stuck) is not reported.
    ///
    /// Only an invalid `dt` is an error; per-process failures are logged.
    pub fn tick<S>(&mut self, dt: Seconds, source: &S) -> Result<TickReport, SchedulerError>
    where
        S: CapabilitySource + ?Sized,
    {
        if !(dt.is_finite() && dt >= 0.0) {
            return Err(SchedulerError::InvalidTimeStep(dt));
        }

        let span = debug_span!("tick", tick = self.stats.ticks + 1, dt);
        let _entered = span.enter();

        let budget = self.config.dispatch_budget_per_tick;
        let mut remaining = budget;
        let mut any_stalled = false;
        let mut report = TickReport::default();

        for priority in 0..self.config.max_priority_levels {
            if remaining == 0 {
                break;
            }
            let Some(queue) = self.queues.get(&priority) else {
                continue;
            };

            let (pulled, stalled) = queue.pull(remaining);
            any_stalled |= stalled;

            for pid in pulled {
                self.process_task(pid, source, dt, &mut report);
                remaining -= 1;
            }
        }

        report.attempted = budget - remaining;
        self.stats.ticks += 1;
        self.stats.dispatched += report.attempted as u64;

        if remaining == budget && any_stalled {
            self.stats.livelock_ticks += 1;
            report.livelock = true;
            warn!(
                live_processes = self.processes.len(),
                "Scheduler livelock: stalled processes exist but none were dispatched this tick"
            );
        }

        Ok(report)
    }

    /// Apply one tick's worth of work to a single ready process
    ///
    /// Failures are logged and the attempt still counts; one process never
    /// aborts the rest of the pass.
    fn process_task<S>(&mut self, pid: Pid, source: &S, dt: Seconds, report: &mut TickReport)
    where
        S: CapabilitySource + ?Sized,
    {
        let Some(entry) = self.processes.get_mut(&pid) else {
            warn!(pid = %pid, "Pulled process missing from the process table");
            return;
        };

        // Single-resource model: the primary compute unit serves every task
        let capabilities = source.primary_compute_capabilities();
        let modifier = entry.process.characterization().modifier(&capabilities);
        let work = saturate(BASE_WORK_RATE * modifier * dt);

        if modifier == 0.0 {
            trace!(pid = %pid, "Required capability unavailable; no progress");
        }

        let completed = match entry.process.apply_work(work) {
            Ok(completed) => completed,
            Err(e) => {
                warn!(pid = %pid, error = %e, "Work could not be applied");
                return;
            }
        };
        trace!(
            pid = %pid,
            modifier,
            work,
            current = entry.process.current_work(),
            total = entry.process.total_work(),
            "Work applied"
        );

        if completed {
            self.stats.completed += 1;
            report.completed.push(pid);
            let readied = self.conclude(pid);
            report.readied.extend(readied);
        }
    }
}

/// Clamp overflowed work to the largest finite amount
///
/// `offered / required` can exceed `f64::MAX` for extreme but valid
/// magnitudes; such a process simply completes.
#[inline]
fn saturate(work: f64) -> f64 {
    if work.is_nan() {
        0.0
    } else {
        work.min(f64::MAX)
    }
}
