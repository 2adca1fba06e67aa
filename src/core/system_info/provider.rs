use std::time::Duration;

use super::types::{DiskRecord, MetricSnapshot, ProcessRecord};
use crate::error::Result;

/// Source of point-in-time host measurements
///
/// Every query is synchronous and may block. A query that cannot be answered
/// on this host fails with `SysMenuError::MetricsUnavailable`; there are no
/// retries.
pub trait MetricsProvider {
    /// OS name, host name, kernel release, architecture, processor
    fn system_identity(&mut self) -> Result<MetricSnapshot>;

    /// Core counts, frequency and busy-percent observed over one second
    fn cpu_info(&mut self) -> Result<MetricSnapshot>;

    fn memory_info(&mut self) -> Result<MetricSnapshot>;

    /// One record per mounted volume, in the order the OS reports them
    fn disks(&mut self) -> Result<Vec<DiskRecord>>;

    fn network_info(&mut self) -> Result<MetricSnapshot>;

    fn uptime(&mut self) -> Result<MetricSnapshot>;

    fn disk_io(&mut self) -> Result<MetricSnapshot>;

    /// Every visible process, ordered by pid
    fn processes(&mut self) -> Result<Vec<ProcessRecord>>;
}

/// Something that can observe global CPU busy-percent over a window
pub trait CpuLoadSource {
    /// Block for `window` and return the busy-percent seen during it.
    fn measure_cpu_load(&mut self, window: Duration) -> Result<f32>;
}
