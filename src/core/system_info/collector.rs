use std::time::Duration;

use sysinfo::{CpuRefreshKind, Disks, MemoryRefreshKind, Networks, RefreshKind, System};

use super::provider::{CpuLoadSource, MetricsProvider};
use super::types::{DiskRecord, MetricSnapshot, ProcessRecord};
use super::{cpu, disk_io, memory, network, os, processes, storage, uptime};
use crate::error::Result;

/// `MetricsProvider` backed by the sysinfo crate
pub struct SysinfoProvider {
    system: System,
    disks: Disks,
    networks: Networks,
}

impl SysinfoProvider {
    pub fn new() -> Self {
        let refresh_kind = RefreshKind::nothing()
            .with_cpu(CpuRefreshKind::everything())
            .with_memory(MemoryRefreshKind::everything());

        Self {
            system: System::new_with_specifics(refresh_kind),
            disks: Disks::new_with_refreshed_list(),
            networks: Networks::new_with_refreshed_list(),
        }
    }
}

impl Default for SysinfoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsProvider for SysinfoProvider {
    fn system_identity(&mut self) -> Result<MetricSnapshot> {
        os::collect(&self.system)
    }

    fn cpu_info(&mut self) -> Result<MetricSnapshot> {
        cpu::collect(&mut self.system)
    }

    fn memory_info(&mut self) -> Result<MetricSnapshot> {
        memory::collect(&mut self.system)
    }

    fn disks(&mut self) -> Result<Vec<DiskRecord>> {
        storage::collect(&mut self.disks)
    }

    fn network_info(&mut self) -> Result<MetricSnapshot> {
        network::collect(&mut self.networks)
    }

    fn uptime(&mut self) -> Result<MetricSnapshot> {
        uptime::collect()
    }

    fn disk_io(&mut self) -> Result<MetricSnapshot> {
        disk_io::collect()
    }

    fn processes(&mut self) -> Result<Vec<ProcessRecord>> {
        processes::collect(&mut self.system)
    }
}

impl CpuLoadSource for SysinfoProvider {
    fn measure_cpu_load(&mut self, window: Duration) -> Result<f32> {
        cpu::measure_usage(&mut self.system, window)
    }
}
