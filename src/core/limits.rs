/*!
 * System Limits and Constants
 *
 * Centralized location for scheduler defaults and magic numbers.
 */

// =============================================================================
// SCHEDULER
// =============================================================================

/// Processes attempted per tick across all priorities
pub const DEFAULT_DISPATCH_BUDGET: usize = 3;

/// Priority levels serviced by a tick (0..N)
/// Processes enqueued at or above this level are never dispatched
pub const DEFAULT_MAX_PRIORITY_LEVELS: u32 = 5;

/// Work units produced per simulated second at modifier 1.0
pub const BASE_WORK_RATE: f64 = 1.0;

/// First PID handed out by a fresh task manager
pub const FIRST_PID: u32 = 1;

// =============================================================================
// WORKLOAD
// =============================================================================

/// Per-thread throughput penalty carried by workload characterizations
pub const DEFAULT_THREAD_PENALTY: f64 = 0.96;

// =============================================================================
// HARDWARE
// =============================================================================

/// Rated draw of the reference CPU (watts)
pub const INTEL_8086_MAX_POWER_DRAW: f64 = 65.0;

/// Rated draw of a DDR1 memory module (watts)
pub const DDR1_MAX_POWER_DRAW: f64 = 5.0;

/// Rated draw of the reference hard disk (watts)
pub const IBM_3380_MAX_POWER_DRAW: f64 = 25.0;

/// Capacity of the reference hard disk (KB)
pub const IBM_3380_CAPACITY_KB: u32 = 500_000;

// =============================================================================
// ENVIRONMENT
// =============================================================================

pub const ENV_DISPATCH_BUDGET: &str = "KERNEL_DISPATCH_BUDGET";
pub const ENV_MAX_PRIORITY_LEVELS: &str = "KERNEL_MAX_PRIORITY_LEVELS";
pub const ENV_TRACE_JSON: &str = "KERNEL_TRACE_JSON";
pub const ENV_TICK_DT: &str = "KERNEL_TICK_DT";
pub const ENV_TICKS: &str = "KERNEL_TICKS";
