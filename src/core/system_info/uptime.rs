use chrono::{Local, TimeZone};

use crate::core::system_info::types::MetricSnapshot;
use crate::error::{Result, SysMenuError};
use crate::ui::formatters::format_uptime;
use sysinfo::System;

pub fn collect() -> Result<MetricSnapshot> {
    let boot_time = System::boot_time();
    if boot_time == 0 {
        return Err(SysMenuError::metrics_unavailable("boot time not reported"));
    }

    let boot = Local
        .timestamp_opt(boot_time as i64, 0)
        .single()
        .ok_or_else(|| {
            SysMenuError::metrics_unavailable(format!("invalid boot timestamp {}", boot_time))
        })?;

    let uptime_secs = (Local::now().timestamp() - boot_time as i64).max(0) as u64;

    Ok(MetricSnapshot::builder()
        .entry("Boot Time", boot.format("%Y-%m-%d %H:%M:%S").to_string())
        .entry("Uptime", format_uptime(uptime_secs))
        .build())
}
