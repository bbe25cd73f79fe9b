/*!
 * Capability Source
 * Read-side contract between the hardware subsystem and the scheduler
 */

use ahash::HashMap;
use std::sync::Arc;

/// Capability name to offered (or required) magnitude
///
/// Absence of a key means the capability is unavailable, not zero.
pub type Capabilities = HashMap<String, f64>;

/// Build a capability table from name/magnitude pairs
pub fn capabilities<I, K>(pairs: I) -> Capabilities
where
    I: IntoIterator<Item = (K, f64)>,
    K: Into<String>,
{
    pairs.into_iter().map(|(k, v)| (k.into(), v)).collect()
}

/// Supplies the capabilities of the hardware work is currently running on
///
/// The scheduler queries this once per dispatched process and never writes
/// through it.
pub trait CapabilitySource {
    /// Capabilities of the primary compute resource
    fn primary_compute_capabilities(&self) -> Capabilities;
}

/// Fixed hardware described directly by a table
impl CapabilitySource for Capabilities {
    fn primary_compute_capabilities(&self) -> Capabilities {
        self.clone()
    }
}

impl<T: CapabilitySource + ?Sized> CapabilitySource for Arc<T> {
    fn primary_compute_capabilities(&self) -> Capabilities {
        (**self).primary_compute_capabilities()
    }
}

impl<T: CapabilitySource + ?Sized> CapabilitySource for &T {
    fn primary_compute_capabilities(&self) -> Capabilities {
        (**self).primary_compute_capabilities()
    }
}
