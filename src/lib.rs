/*!
 * Terminal OS Kernel Library
 * Simulated hardware and a tick-driven cooperative process scheduler
 */

pub mod computer;
pub mod core;
pub mod hardware;
pub mod monitoring;
pub mod process;

// Re-exports
pub use computer::Computer;
pub use crate::core::errors::{ConfigError, HardwareError, KernelError, ProcessError, SchedulerError};
pub use crate::core::types::{KernelResult, Pid, Priority, Seconds};
pub use hardware::{capabilities, Capabilities, CapabilitySource, Cpu, HwComponent, HwManager};
pub use monitoring::init_tracing;
pub use process::{
    Process, ProcessBuilder, ProcessState, SchedulerConfig, SchedulerStats, TaskManager,
    TickReport, WorkProgress, WorkloadCharacterization,
};
