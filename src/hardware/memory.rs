/*!
 * Memory Component
 * RAM module offering a fixed memory capability
 */

use super::capability::{capabilities, Capabilities};
use super::component::{HwCategory, HwComponent};
use crate::core::errors::HardwareError;
use crate::core::limits::DDR1_MAX_POWER_DRAW;

/// A RAM module
///
/// Offers its size (KB) as the `memory` capability. Draw is static, so no
/// energy is reported on poll.
#[derive(Debug)]
pub struct Memory {
    amount_kbytes: f64,
    capabilities: Capabilities,
}

impl Memory {
    /// A DDR1 module holding `amount_kbytes` of RAM
    pub fn ddr1(amount_kbytes: f64) -> Result<Self, HardwareError> {
        if !(amount_kbytes.is_finite() && amount_kbytes >= 0.0) {
            return Err(HardwareError::InvalidCapability {
                component: "RAM DDR1".to_string(),
                capability: "memory".to_string(),
                magnitude: amount_kbytes,
            });
        }

        Ok(Self {
            amount_kbytes,
            capabilities: capabilities([("memory", amount_kbytes)]),
        })
    }

    pub fn amount_kbytes(&self) -> f64 {
        self.amount_kbytes
    }
}

impl HwComponent for Memory {
    fn name(&self) -> &str {
        "RAM DDR1"
    }

    fn category(&self) -> HwCategory {
        HwCategory::Memory
    }

    fn max_power_draw(&self) -> f64 {
        DDR1_MAX_POWER_DRAW
    }

    fn poll_joules_used(&self) -> f64 {
        0.0
    }

    fn capabilities(&self) -> Capabilities {
        self.capabilities.clone()
    }

    fn tick(&self, _dt: f64) {}
}
