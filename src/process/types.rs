/*!
 * Process Types
 * Common types for process lifecycle and dispatch
 */

use serde::{Deserialize, Serialize};

/// Lifecycle of a process's work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessState {
    /// No work has been applied yet
    NotStarted,
    /// Work has been applied at least once
    Running,
    /// Accumulated work reached the total; terminal
    Completed,
}

impl ProcessState {
    #[inline(always)]
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Dispatchability of a queued process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchState {
    /// Blocked on at least one dependency
    Stalled,
    /// Eligible to be pulled for work
    Ready,
}

/// Progress reported to a process's update hook
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkProgress {
    /// Accumulated work after this application
    pub current: f64,
    /// Work needed to complete
    pub total: f64,
    /// Work applied by this call
    pub delta: f64,
}

impl WorkProgress {
    /// Fraction of the total completed, clamped to `0.0..=1.0`
    #[inline]
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.total <= 0.0 {
            1.0
        } else {
            (self.current / self.total).clamp(0.0, 1.0)
        }
    }
}
