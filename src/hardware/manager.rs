/*!
 * Hardware Manager
 * Catalogs installed components and serves compute capabilities
 */

use super::capability::{Capabilities, CapabilitySource};
use super::component::{HwCategory, HwComponent};
use std::sync::Arc;
use tracing::{info, warn};

/// Manager for all hardware resources on a computer
#[derive(Default)]
pub struct HwManager {
    components: Vec<Arc<dyn HwComponent>>,
    compute_catalog: Vec<Arc<dyn HwComponent>>,
    memory_catalog: Vec<Arc<dyn HwComponent>>,
    storage_catalog: Vec<Arc<dyn HwComponent>>,
    interface_catalog: Vec<Arc<dyn HwComponent>>,
}

impl HwManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a component; it is catalogued on the next [`initialize`](Self::initialize)
    pub fn install(&mut self, component: Arc<dyn HwComponent>) {
        info!(
            component = component.name(),
            category = %component.category(),
            "Hardware component installed"
        );
        self.components.push(component);
    }

    /// Rebuild the catalogs from installed components, in installation order
    pub fn initialize(&mut self) {
        self.compute_catalog.clear();
        self.memory_catalog.clear();
        self.storage_catalog.clear();
        self.interface_catalog.clear();

        for component in &self.components {
            let catalog = match component.category() {
                HwCategory::Computing(_) => &mut self.compute_catalog,
                HwCategory::Memory => &mut self.memory_catalog,
                HwCategory::Storage(_) => &mut self.storage_catalog,
                HwCategory::Interface(_) => &mut self.interface_catalog,
            };
            catalog.push(Arc::clone(component));
        }

        if self.compute_catalog.is_empty() {
            warn!("No compute hardware catalogued; every capability requirement will be unmet");
        }

        info!(
            compute = self.compute_catalog.len(),
            memory = self.memory_catalog.len(),
            storage = self.storage_catalog.len(),
            interface = self.interface_catalog.len(),
            max_power_draw = self.max_power_draw(),
            "Hardware catalogued"
        );
    }

    /// First entry of the compute catalog
    pub fn primary_compute(&self) -> Option<&Arc<dyn HwComponent>> {
        self.compute_catalog.first()
    }

    pub fn compute_catalog(&self) -> &[Arc<dyn HwComponent>] {
        &self.compute_catalog
    }

    pub fn memory_catalog(&self) -> &[Arc<dyn HwComponent>] {
        &self.memory_catalog
    }

    pub fn storage_catalog(&self) -> &[Arc<dyn HwComponent>] {
        &self.storage_catalog
    }

    pub fn interface_catalog(&self) -> &[Arc<dyn HwComponent>] {
        &self.interface_catalog
    }

    pub fn components(&self) -> &[Arc<dyn HwComponent>] {
        &self.components
    }

    /// Combined rated draw of every installed component (watts)
    pub fn max_power_draw(&self) -> f64 {
        self.components.iter().map(|c| c.max_power_draw()).sum()
    }

    /// Joules consumed by every component since the last poll
    pub fn poll_joules_used(&self) -> f64 {
        self.components.iter().map(|c| c.poll_joules_used()).sum()
    }

    /// Advance every installed component
    pub fn tick(&self, dt: f64) {
        for component in &self.components {
            component.tick(dt);
        }
    }
}

impl CapabilitySource for HwManager {
    fn primary_compute_capabilities(&self) -> Capabilities {
        self.primary_compute()
            .map(|cpu| cpu.capabilities())
            .unwrap_or_default()
    }
}
