/*!
 * Storage Component
 * Hard disk with capacity accounting
 */

use super::capability::{capabilities, Capabilities};
use super::component::{HwCategory, HwComponent, StorageKind};
use crate::core::errors::HardwareError;
use crate::core::limits::{IBM_3380_CAPACITY_KB, IBM_3380_MAX_POWER_DRAW};
use parking_lot::Mutex;
use smartstring::alias::String as SmartString;
use tracing::debug;

/// Capability every storage medium offers
pub const PERSISTENT_STORAGE: &str = "persistent storage";

/// A hard disk
///
/// Offers `persistent storage` with its free space (KB) as the magnitude.
pub struct Hdd {
    name: SmartString,
    total_kbytes: u32,
    used_kbytes: Mutex<u32>,
    max_power_draw: f64,
    joules_since_poll: Mutex<f64>,
}

impl Hdd {
    pub fn new(name: &str, total_kbytes: u32, max_power_draw: f64) -> Self {
        Self {
            name: SmartString::from(name),
            total_kbytes,
            used_kbytes: Mutex::new(0),
            max_power_draw,
            joules_since_poll: Mutex::new(0.0),
        }
    }

    /// The reference disk: 500 MB
    pub fn ibm_3380() -> Self {
        Self::new("IBM 3380 Hard Disk", IBM_3380_CAPACITY_KB, IBM_3380_MAX_POWER_DRAW)
    }

    pub fn total_kbytes(&self) -> u32 {
        self.total_kbytes
    }

    pub fn used_kbytes(&self) -> u32 {
        *self.used_kbytes.lock()
    }

    pub fn free_kbytes(&self) -> u32 {
        self.total_kbytes - self.used_kbytes()
    }

    /// Reserve `kbytes` on the disk
    pub fn allocate(&self, kbytes: u32) -> Result<(), HardwareError> {
        let mut used = self.used_kbytes.lock();
        let available = self.total_kbytes - *used;
        if kbytes > available {
            return Err(HardwareError::InsufficientStorage {
                component: self.name.to_string(),
                requested: kbytes,
                available,
            });
        }
        *used += kbytes;
        debug!(disk = %self.name, kbytes, used = *used, "Storage allocated");
        Ok(())
    }

    /// Return up to `kbytes` to the free pool
    pub fn release(&self, kbytes: u32) {
        let mut used = self.used_kbytes.lock();
        *used = used.saturating_sub(kbytes);
    }
}

impl HwComponent for Hdd {
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> HwCategory {
        HwCategory::Storage(StorageKind::Hdd)
    }

    fn max_power_draw(&self) -> f64 {
        self.max_power_draw
    }

    fn poll_joules_used(&self) -> f64 {
        std::mem::take(&mut *self.joules_since_poll.lock())
    }

    fn capabilities(&self) -> Capabilities {
        capabilities([(PERSISTENT_STORAGE, f64::from(self.free_kbytes()))])
    }

    fn tick(&self, dt: f64) {
        *self.joules_since_poll.lock() += self.max_power_draw * dt;
    }
}
