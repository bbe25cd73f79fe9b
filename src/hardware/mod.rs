/*!
 * Hardware Module
 * Simulated components and the capability source consumed by the scheduler
 */

pub mod capability;
pub mod component;
pub mod cpu;
pub mod manager;
pub mod memory;
pub mod monitor;
pub mod storage;

// Re-export public API
pub use capability::{capabilities, Capabilities, CapabilitySource};
pub use component::{ComputeKind, HwCategory, HwComponent, InterfaceKind, StorageKind};
pub use cpu::Cpu;
pub use manager::HwManager;
pub use memory::Memory;
pub use monitor::Monitor;
pub use storage::Hdd;
