/*!
 * Workload Characterization
 * Resource profile of a process and its throughput modifier
 */

use crate::core::errors::ProcessError;
use crate::core::limits::DEFAULT_THREAD_PENALTY;
use crate::hardware::Capabilities;
use serde::{Deserialize, Serialize};

/// The characterization of a process's needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadCharacterization {
    /// How much IO factors into this process's operation
    pub io: f64,

    /// Memory requirements of this process
    pub memory: f64,

    /// Maximum number of threads allocable to this process
    #[serde(default = "default_max_threads")]
    pub max_threads: u32,

    /// Exponential penalty applied per additional thread
    #[serde(default = "default_thread_penalty")]
    pub thread_penalty: f64,

    /// Required magnitude per named capability
    #[serde(default)]
    additional_needs: Capabilities,
}

fn default_max_threads() -> u32 {
    1
}

fn default_thread_penalty() -> f64 {
    DEFAULT_THREAD_PENALTY
}

impl WorkloadCharacterization {
    /// Create a characterization with no additional needs
    pub fn new(io: f64, memory: f64) -> Self {
        Self {
            io,
            memory,
            max_threads: default_max_threads(),
            thread_penalty: default_thread_penalty(),
            additional_needs: Capabilities::default(),
        }
    }

    /// Require a capability at the given magnitude
    ///
    /// Zero, negative and non-finite magnitudes are rejected since the
    /// modifier divides by them.
    pub fn with_need(mut self, capability: &str, magnitude: f64) -> Result<Self, ProcessError> {
        self.require(capability, magnitude)?;
        Ok(self)
    }

    /// Require a capability in place (replaces an existing requirement)
    pub fn require(&mut self, capability: &str, magnitude: f64) -> Result<(), ProcessError> {
        if !(magnitude.is_finite() && magnitude > 0.0) {
            return Err(ProcessError::InvalidRequirement {
                capability: capability.to_string(),
                magnitude,
            });
        }
        self.additional_needs
            .insert(capability.to_string(), magnitude);
        Ok(())
    }

    pub fn additional_needs(&self) -> &Capabilities {
        &self.additional_needs
    }

    /// Throughput modifier against the offered hardware capabilities
    ///
    /// Product of `offered / required` over every requirement, or exactly 0.0
    /// as soon as one requirement is not offered at all (impossible on this
    /// hardware). With no requirements the modifier is exactly 1.0. Values
    /// above 1.0 model hardware faster than the workload's baseline.
    pub fn modifier(&self, offered: &Capabilities) -> f64 {
        let mut modifier = 1.0;

        for (capability, required) in &self.additional_needs {
            match offered.get(capability) {
                Some(available) => modifier *= available / required,
                None => return 0.0,
            }
        }

        modifier
    }

    /// Characterization used for text rendering
    pub fn text_rendering() -> Self {
        let mut w = Self::new(0.2, 0.01);
        w.additional_needs.insert("computing".to_string(), 1.0);
        w.additional_needs.insert("graphics".to_string(), 2.0);
        w
    }
}

impl Default for WorkloadCharacterization {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}
