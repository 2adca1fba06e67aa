use crate::core::system_info::types::{percent_of, MetricSnapshot};
use crate::error::{Result, SysMenuError};
use sysinfo::System;

pub fn collect(system: &mut System) -> Result<MetricSnapshot> {
    system.refresh_memory();

    let total = system.total_memory();
    if total == 0 {
        return Err(SysMenuError::metrics_unavailable(
            "total memory reported as zero",
        ));
    }

    let available = system.available_memory();
    let used = system.used_memory();

    Ok(MetricSnapshot::builder()
        .entry("Total Memory", total)
        .entry("Available Memory", available)
        .entry("Used Memory", used)
        .entry(
            "Memory Usage (%)",
            percent_of(total.saturating_sub(available), total),
        )
        .build())
}
