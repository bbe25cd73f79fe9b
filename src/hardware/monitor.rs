/*!
 * Monitor Component
 * Text display interface
 */

use super::capability::{capabilities, Capabilities};
use super::component::{HwCategory, HwComponent, InterfaceKind};

/// Capability offered by text displays
pub const DISPLAY_TEXT: &str = "Display:Text";

/// A text monitor; draws no modelled power
#[derive(Debug, Default)]
pub struct Monitor;

impl Monitor {
    pub fn new() -> Self {
        Self
    }
}

impl HwComponent for Monitor {
    fn name(&self) -> &str {
        "Monitor"
    }

    fn category(&self) -> HwCategory {
        HwCategory::Interface(InterfaceKind::Monitor)
    }

    fn max_power_draw(&self) -> f64 {
        0.0
    }

    fn poll_joules_used(&self) -> f64 {
        0.0
    }

    fn capabilities(&self) -> Capabilities {
        capabilities([(DISPLAY_TEXT, 1.0)])
    }

    fn tick(&self, _dt: f64) {}
}
