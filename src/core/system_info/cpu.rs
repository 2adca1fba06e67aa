use std::time::Duration;

use crate::core::system_info::types::{MetricSnapshot, MetricValue};
use crate::error::{Result, SysMenuError};
use sysinfo::System;

/// Window over which the CPU info query observes usage
pub const CPU_INFO_WINDOW: Duration = Duration::from_secs(1);

/// Block for `window` and return global busy-percent observed over it.
pub fn measure_usage(system: &mut System, window: Duration) -> Result<f32> {
    system.refresh_cpu_usage();
    if system.cpus().is_empty() {
        return Err(SysMenuError::metrics_unavailable("no CPUs reported"));
    }

    // sysinfo needs at least this long between refreshes to compute a delta
    std::thread::sleep(window.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL));
    system.refresh_cpu_usage();

    Ok(system.global_cpu_usage().clamp(0.0, 100.0))
}

pub fn collect(system: &mut System) -> Result<MetricSnapshot> {
    system.refresh_cpu_frequency();

    let cpus = system.cpus();
    let Some(first_cpu) = cpus.first() else {
        return Err(SysMenuError::metrics_unavailable("no CPUs reported"));
    };

    let logical_cores = cpus.len();
    let frequency_mhz = first_cpu.frequency() as f64;
    let physical_cores = System::physical_core_count()
        .map(MetricValue::from)
        .unwrap_or_else(|| MetricValue::from("Unknown"));

    let usage = measure_usage(system, CPU_INFO_WINDOW)?;

    Ok(MetricSnapshot::builder()
        .entry("Physical Cores", physical_cores)
        .entry("Total Cores", logical_cores)
        .entry("Current Frequency (MHz)", frequency_mhz)
        .entry("CPU Usage (%)", usage)
        .build())
}
