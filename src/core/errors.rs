/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use crate::core::types::Pid;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Process-related errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ProcessError {
    #[error("Process '{0}' has already completed")]
    #[diagnostic(
        code(process::already_completed),
        help("Completed processes are evicted by the task manager. Do not apply work after conclusion.")
    )]
    AlreadyCompleted(String),

    #[error("Invalid work amount: {0}")]
    #[diagnostic(
        code(process::invalid_work),
        help("Work applied to a process must be finite and non-negative.")
    )]
    InvalidWork(f64),

    #[error("Invalid requirement for capability '{capability}': {magnitude}")]
    #[diagnostic(
        code(process::invalid_requirement),
        help("Required capability magnitudes must be finite and greater than zero.")
    )]
    InvalidRequirement { capability: String, magnitude: f64 },
}

/// Scheduler-related errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("Invalid time step: {0}")]
    #[diagnostic(
        code(scheduler::invalid_time_step),
        help("Tick durations must be finite and non-negative.")
    )]
    InvalidTimeStep(f64),

    #[error("Process ID space exhausted")]
    #[diagnostic(
        code(scheduler::pid_space_exhausted),
        help("Construct a new task manager to restart PID numbering.")
    )]
    PidSpaceExhausted,

    #[error("Process {0} not found in scheduler")]
    #[diagnostic(
        code(scheduler::process_not_found),
        help("Process may never have been enqueued or has already completed.")
    )]
    ProcessNotFound(Pid),

    #[error("Process error: {0}")]
    #[diagnostic(transparent)]
    Process(#[from] ProcessError),
}

/// Hardware-related errors
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum HardwareError {
    #[error("Invalid capability '{capability}' on {component}: {magnitude}")]
    #[diagnostic(
        code(hardware::invalid_capability),
        help("Offered capability magnitudes must be finite and non-negative. Remove the capability instead of zeroing it to mark it unavailable.")
    )]
    InvalidCapability {
        component: String,
        capability: String,
        magnitude: f64,
    },

    #[error("Insufficient storage on {component}: requested {requested} KB, {available} KB free")]
    #[diagnostic(
        code(hardware::insufficient_storage),
        help("Release space on the medium or install a larger one.")
    )]
    InsufficientStorage {
        component: String,
        requested: u32,
        available: u32,
    },
}

/// Configuration errors
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ConfigError {
    #[error("Invalid value for {key}: {reason}")]
    #[diagnostic(
        code(config::invalid_value),
        help("Check the scheduler configuration and environment overrides.")
    )]
    InvalidValue { key: String, reason: String },

    #[error("Failed to parse configuration: {0}")]
    #[diagnostic(code(config::parse_failed), help("Configuration must be valid JSON."))]
    Parse(String),
}

/// Unified kernel error type with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum KernelError {
    #[error("Process error: {0}")]
    #[diagnostic(transparent)]
    Process(#[from] ProcessError),

    #[error("Scheduler error: {0}")]
    #[diagnostic(transparent)]
    Scheduler(#[from] SchedulerError),

    #[error("Hardware error: {0}")]
    #[diagnostic(transparent)]
    Hardware(#[from] HardwareError),

    #[error("Configuration error: {0}")]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}
