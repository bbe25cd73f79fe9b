/*!
 * Terminal OS Kernel - Main Entry Point
 *
 * Boots a simulated computer and drives its scheduler:
 * - Hardware catalogue (Intel 8086, RAM, hard disk, monitor)
 * - A chain of dependent text rendering jobs
 * - A fixed number of simulated ticks
 */

use anyhow::{Context, Result};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, warn};

use terminal_os_kernel::core::limits::{ENV_TICKS, ENV_TICK_DT};
use terminal_os_kernel::hardware::{Hdd, Memory, Monitor};
use terminal_os_kernel::{
    init_tracing, Computer, Cpu, HwManager, Process, SchedulerConfig, WorkloadCharacterization,
};

const DEFAULT_TICK_DT: f64 = 0.5;
const DEFAULT_TICKS: u32 = 12;
const DEMO_JOBS: [(&str, f64); 4] = [
    ("boot_banner", 1.0),
    ("prompt", 0.5),
    ("motd", 2.0),
    ("status_line", 0.5),
];

fn main() -> Result<()> {
    // Initialize structured tracing
    init_tracing();

    info!("Terminal OS kernel starting...");

    let config = SchedulerConfig::from_env().context("Invalid scheduler configuration")?;
    let dt: f64 = env_or(ENV_TICK_DT, DEFAULT_TICK_DT)?;
    let ticks: u32 = env_or(ENV_TICKS, DEFAULT_TICKS)?;

    info!("Installing hardware...");
    let mut hardware = HwManager::new();
    hardware.install(Arc::new(Cpu::intel_8086()));
    hardware.install(Arc::new(Memory::ddr1(640.0)?));
    hardware.install(Arc::new(Hdd::ibm_3380()));
    hardware.install(Arc::new(Monitor::new()));

    let mut computer = Computer::with_config(hardware, config)?;
    computer.boot();

    // Each job renders only after the previous one has concluded
    let mut previous = None;
    for (name, work) in DEMO_JOBS {
        let label = name.to_string();
        let mut builder = Process::builder(name, work)
            .characterization(WorkloadCharacterization::text_rendering())
            .on_start({
                let label = label.clone();
                move || info!(process = %label, "Process started")
            })
            .on_conclude(move || info!(process = %label, "Process concluded"));
        if let Some(dependency) = previous {
            builder = builder.depends_on(dependency);
        }
        previous = Some(computer.enqueue(builder.build()?, 0)?);
    }

    info!(ticks, dt, "Kernel entering main loop...");
    for _ in 0..ticks {
        let report = computer.tick(dt)?;
        info!(
            attempted = report.attempted,
            completed = report.completed.len(),
            readied = report.readied.len(),
            livelock = report.livelock,
            "Tick complete"
        );
        if computer.tasks().is_empty() {
            break;
        }
    }

    let stats = computer.tasks().stats();
    if !computer.tasks().is_empty() {
        warn!(remaining = stats.active_processes, "Processes still live at shutdown");
    }
    info!(
        ticks = stats.ticks,
        completed = stats.completed,
        joules = computer.hardware().poll_joules_used(),
        "Kernel shutting down"
    );

    Ok(())
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid value for {key}: {raw:?}")),
        Err(_) => Ok(default),
    }
}
