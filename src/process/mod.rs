/*!
 * Process Module
 * Processes, their workload profiles, and the task manager that runs them
 */

pub mod hooks;
#[allow(clippy::module_inception)]
pub mod process;
pub mod scheduler;
pub mod types;
pub mod workload;

// Re-export for convenience
pub use hooks::{ConcludeHook, ProcessHooks, StartHook, UpdateHook};
pub use process::{Process, ProcessBuilder};
pub use scheduler::{
    DependencyGraph, SchedulerConfig, SchedulerStats, TaskManager, TaskQueue, TickReport,
};
pub use types::{DispatchState, ProcessState, WorkProgress};
pub use workload::WorkloadCharacterization;
