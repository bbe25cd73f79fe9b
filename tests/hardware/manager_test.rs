/*!
 * Hardware Manager Tests
 * Cataloguing and the capability view handed to the scheduler
 */

use pretty_assertions::assert_eq;
use std::sync::Arc;
use terminal_os_kernel::hardware::{
    ComputeKind, Hdd, HwCategory, InterfaceKind, Memory, Monitor, StorageKind,
};
use terminal_os_kernel::{capabilities, CapabilitySource, Cpu, HwComponent, HwManager};

#[test]
fn test_first_compute_component_is_primary() {
    let mut hw = HwManager::new();
    hw.install(Arc::new(Cpu::intel_8086()));
    hw.install(Arc::new(
        Cpu::new("coprocessor", 10.0, capabilities([("computing", 8.0)])).unwrap(),
    ));
    hw.initialize();

    assert_eq!(hw.compute_catalog().len(), 2);
    assert_eq!(hw.primary_compute().unwrap().name(), "Intel 8086");
    assert_eq!(
        hw.primary_compute_capabilities(),
        capabilities([("computing", 1.0), ("graphics", 2.0)])
    );
}

#[test]
fn test_uninitialized_manager_offers_nothing() {
    let mut hw = HwManager::new();
    hw.install(Arc::new(Cpu::intel_8086()));

    assert!(hw.primary_compute().is_none());
    assert!(hw.primary_compute_capabilities().is_empty());
}

#[test]
fn test_power_accounting_across_components() {
    let mut hw = HwManager::new();
    hw.install(Arc::new(Cpu::intel_8086()));
    hw.install(Arc::new(
        Cpu::new("coprocessor", 10.0, capabilities([("computing", 8.0)])).unwrap(),
    ));
    hw.initialize();

    assert_eq!(hw.max_power_draw(), 75.0);
    hw.tick(2.0);
    assert_eq!(hw.poll_joules_used(), 150.0);
    assert_eq!(hw.poll_joules_used(), 0.0);
}

#[test]
fn test_cpu_category() {
    let cpu = Cpu::intel_8086();
    assert_eq!(cpu.category(), HwCategory::Computing(ComputeKind::Cpu));
    assert!(cpu.category().is_compute());
}

#[test]
fn test_components_catalogued_by_category() {
    let mut hw = HwManager::new();
    hw.install(Arc::new(Monitor::new()));
    hw.install(Arc::new(Hdd::ibm_3380()));
    hw.install(Arc::new(Memory::ddr1(640.0).unwrap()));
    hw.install(Arc::new(Cpu::intel_8086()));
    hw.initialize();

    assert_eq!(hw.compute_catalog().len(), 1);
    assert_eq!(hw.memory_catalog().len(), 1);
    assert_eq!(hw.storage_catalog().len(), 1);
    assert_eq!(hw.interface_catalog().len(), 1);

    assert_eq!(
        hw.storage_catalog()[0].category(),
        HwCategory::Storage(StorageKind::Hdd)
    );
    assert_eq!(
        hw.interface_catalog()[0].category(),
        HwCategory::Interface(InterfaceKind::Monitor)
    );
    assert_eq!(hw.memory_catalog()[0].name(), "RAM DDR1");

    // Only compute hardware feeds the scheduler, whatever the install order
    assert_eq!(hw.primary_compute().unwrap().name(), "Intel 8086");
    assert_eq!(hw.max_power_draw(), 65.0 + 25.0 + 5.0);
}

#[test]
fn test_storage_only_machine_offers_nothing() {
    let mut hw = HwManager::new();
    hw.install(Arc::new(Hdd::ibm_3380()));
    hw.install(Arc::new(Memory::ddr1(64.0).unwrap()));
    hw.initialize();

    assert!(hw.primary_compute().is_none());
    assert!(hw.primary_compute_capabilities().is_empty());
}
