/*!
 * Hardware Components
 * Common interface for simulated hardware
 */

use super::capability::Capabilities;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of computing hardware
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComputeKind {
    Cpu,
}

/// Kind of persistent storage medium
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageKind {
    Hdd,
}

/// Kind of user-facing interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterfaceKind {
    Monitor,
}

/// General category a component fits into
///
/// The hardware manager builds its catalogs from this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HwCategory {
    Computing(ComputeKind),
    Memory,
    Storage(StorageKind),
    Interface(InterfaceKind),
}

impl HwCategory {
    #[inline]
    pub const fn is_compute(&self) -> bool {
        matches!(self, Self::Computing(_))
    }
}

impl fmt::Display for HwCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Computing(ComputeKind::Cpu) => f.write_str("Computing:CPU"),
            Self::Memory => f.write_str("Memory"),
            Self::Storage(StorageKind::Hdd) => f.write_str("Storage:HDD"),
            Self::Interface(InterfaceKind::Monitor) => f.write_str("Interfaces:Monitor"),
        }
    }
}

/// A piece of simulated hardware
pub trait HwComponent: Send + Sync {
    /// Name of this component
    fn name(&self) -> &str;

    /// Category used for cataloguing
    fn category(&self) -> HwCategory;

    /// Maximal power draw in watts
    fn max_power_draw(&self) -> f64;

    /// Joules consumed since the last poll (resets the counter)
    fn poll_joules_used(&self) -> f64;

    /// Capabilities offered by this component
    fn capabilities(&self) -> Capabilities;

    /// Advance this component's simulation by `dt` seconds
    fn tick(&self, dt: f64);
}
