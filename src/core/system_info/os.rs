use crate::core::system_info::types::MetricSnapshot;
use crate::error::Result;
use sysinfo::System;

pub fn collect(system: &System) -> Result<MetricSnapshot> {
    let processor = system
        .cpus()
        .first()
        .map(|cpu| cpu.brand().trim().to_string())
        .filter(|brand| !brand.is_empty())
        .unwrap_or_else(|| "Unknown".to_string());

    Ok(MetricSnapshot::builder()
        .entry(
            "Operating System",
            System::name().unwrap_or_else(|| "Unknown".to_string()),
        )
        .entry(
            "Computer Name",
            System::host_name().unwrap_or_else(|| "Unknown".to_string()),
        )
        .entry(
            "Release",
            System::kernel_version().unwrap_or_else(|| "Unknown".to_string()),
        )
        .entry("Machine Type", std::env::consts::ARCH)
        .entry("Processor", processor)
        .build())
}
