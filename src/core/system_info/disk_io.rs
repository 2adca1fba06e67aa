use crate::core::system_info::types::MetricSnapshot;
use crate::error::Result;
use crate::platform::read_disk_io_counters;

pub fn collect() -> Result<MetricSnapshot> {
    let counters = read_disk_io_counters()?;

    Ok(MetricSnapshot::builder()
        .entry("Data Read (B)", counters.read_bytes)
        .entry("Data Written (B)", counters.write_bytes)
        .entry("Read Count", counters.read_count)
        .entry("Write Count", counters.write_count)
        .build())
}
