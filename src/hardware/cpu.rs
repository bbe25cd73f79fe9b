/*!
 * CPU Component
 * Basic processor with an adjustable capability table
 */

use super::capability::{capabilities, Capabilities};
use super::component::{ComputeKind, HwCategory, HwComponent};
use crate::core::errors::HardwareError;
use crate::core::limits::INTEL_8086_MAX_POWER_DRAW;
use parking_lot::{Mutex, RwLock};
use smartstring::alias::String as SmartString;
use tracing::debug;

/// A basic CPU
///
/// The capability table sits behind a lock so the hardware side can retune
/// it between ticks while the scheduler only ever reads snapshots.
pub struct Cpu {
    name: SmartString,
    max_power_draw: f64,
    capabilities: RwLock<Capabilities>,
    joules_since_poll: Mutex<f64>,
}

impl Cpu {
    /// Create a CPU, validating every offered magnitude
    pub fn new(
        name: &str,
        max_power_draw: f64,
        offered: Capabilities,
    ) -> Result<Self, HardwareError> {
        for (capability, magnitude) in &offered {
            validate_magnitude(name, capability, *magnitude)?;
        }

        Ok(Self {
            name: SmartString::from(name),
            max_power_draw,
            capabilities: RwLock::new(offered),
            joules_since_poll: Mutex::new(0.0),
        })
    }

    /// The reference processor: baseline compute, enough graphics for text
    pub fn intel_8086() -> Self {
        Self {
            name: SmartString::from("Intel 8086"),
            max_power_draw: INTEL_8086_MAX_POWER_DRAW,
            capabilities: RwLock::new(capabilities([("computing", 1.0), ("graphics", 2.0)])),
            joules_since_poll: Mutex::new(0.0),
        }
    }

    /// Offer (or retune) a capability
    pub fn set_capability(&self, capability: &str, magnitude: f64) -> Result<(), HardwareError> {
        validate_magnitude(&self.name, capability, magnitude)?;
        self.capabilities
            .write()
            .insert(capability.to_string(), magnitude);
        debug!(cpu = %self.name, capability, magnitude, "Capability updated");
        Ok(())
    }

    /// Stop offering a capability, returning its previous magnitude
    pub fn remove_capability(&self, capability: &str) -> Option<f64> {
        let previous = self.capabilities.write().remove(capability);
        if previous.is_some() {
            debug!(cpu = %self.name, capability, "Capability removed");
        }
        previous
    }
}

impl HwComponent for Cpu {
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> HwCategory {
        HwCategory::Computing(ComputeKind::Cpu)
    }

    fn max_power_draw(&self) -> f64 {
        self.max_power_draw
    }

    fn poll_joules_used(&self) -> f64 {
        std::mem::take(&mut *self.joules_since_poll.lock())
    }

    fn capabilities(&self) -> Capabilities {
        self.capabilities.read().clone()
    }

    fn tick(&self, dt: f64) {
        *self.joules_since_poll.lock() += self.max_power_draw * dt;
    }
}

fn validate_magnitude(component: &str, capability: &str, magnitude: f64) -> Result<(), HardwareError> {
    if magnitude.is_finite() && magnitude >= 0.0 {
        Ok(())
    } else {
        Err(HardwareError::InvalidCapability {
            component: component.to_string(),
            capability: capability.to_string(),
            magnitude,
        })
    }
}
