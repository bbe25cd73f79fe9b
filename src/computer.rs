/*!
 * Computer
 * Container tying simulated hardware to the OS task manager
 */

use crate::core::errors::{ConfigError, SchedulerError};
use crate::core::types::{Pid, Priority, Seconds};
use crate::hardware::HwManager;
use crate::process::{Process, SchedulerConfig, TaskManager, TickReport};
use tracing::info;

/// A computer: hardware plus the scheduler running on it
pub struct Computer {
    hardware: HwManager,
    tasks: TaskManager,
    booted: bool,
}

impl Computer {
    pub fn new(hardware: HwManager) -> Self {
        Self {
            hardware,
            tasks: TaskManager::new(),
            booted: false,
        }
    }

    pub fn with_config(hardware: HwManager, config: SchedulerConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            hardware,
            tasks: TaskManager::with_config(config)?,
            booted: false,
        })
    }

    /// Catalogue the installed hardware
    pub fn boot(&mut self) {
        self.hardware.initialize();
        self.booted = true;
        info!(
            primary_compute = self.hardware.primary_compute().map(|c| c.name()),
            "Computer booted"
        );
    }

    pub fn is_booted(&self) -> bool {
        self.booted
    }

    pub fn enqueue(&mut self, process: Process, priority: Priority) -> Result<Pid, SchedulerError> {
        self.tasks.enqueue(process, priority)
    }

    /// Advance the hardware, then run one scheduler pass against it
    pub fn tick(&mut self, dt: Seconds) -> Result<TickReport, SchedulerError> {
        if !(dt.is_finite() && dt >= 0.0) {
            return Err(SchedulerError::InvalidTimeStep(dt));
        }
        self.hardware.tick(dt);
        self.tasks.tick(dt, &self.hardware)
    }

    pub fn hardware(&self) -> &HwManager {
        &self.hardware
    }

    pub fn hardware_mut(&mut self) -> &mut HwManager {
        &mut self.hardware
    }

    pub fn tasks(&self) -> &TaskManager {
        &self.tasks
    }
}
