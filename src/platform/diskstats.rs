// Block device I/O counters

use crate::core::system_info::types::DiskIoCounters;
use crate::error::{Result, SysMenuError};

/// Bytes per sector as reported by /proc/diskstats, independent of the device
const SECTOR_SIZE: u64 = 512;

/// Read cumulative I/O counters summed over whole disks
#[cfg(target_os = "linux")]
pub fn read_disk_io_counters() -> Result<DiskIoCounters> {
    let contents = std::fs::read_to_string("/proc/diskstats").map_err(|e| {
        SysMenuError::metrics_unavailable(format!("cannot read /proc/diskstats: {}", e))
    })?;

    // Only whole devices have an entry directly under /sys/block
    parse_diskstats(&contents, |name| {
        std::path::Path::new("/sys/block").join(name).exists()
    })
}

#[cfg(not(target_os = "linux"))]
pub fn read_disk_io_counters() -> Result<DiskIoCounters> {
    Err(SysMenuError::metrics_unavailable(
        "disk I/O counters are not supported on this platform",
    ))
}

/// Sum the devices accepted by `is_whole_disk` from /proc/diskstats text.
///
/// Lines with fewer than the ten leading fields are skipped.
pub fn parse_diskstats<F>(contents: &str, is_whole_disk: F) -> Result<DiskIoCounters>
where
    F: Fn(&str) -> bool,
{
    let mut totals = DiskIoCounters::default();
    let mut devices = 0usize;

    for line in contents.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 10 {
            continue;
        }

        let name = fields[2];
        if !is_whole_disk(name) {
            continue;
        }

        let parse = |idx: usize| fields[idx].parse::<u64>().ok();
        let (Some(reads), Some(sectors_read), Some(writes), Some(sectors_written)) =
            (parse(3), parse(5), parse(7), parse(9))
        else {
            log::debug!("Skipping malformed diskstats line: {}", line);
            continue;
        };

        totals.read_count = totals.read_count.saturating_add(reads);
        totals.read_bytes = totals
            .read_bytes
            .saturating_add(sectors_read.saturating_mul(SECTOR_SIZE));
        totals.write_count = totals.write_count.saturating_add(writes);
        totals.write_bytes = totals
            .write_bytes
            .saturating_add(sectors_written.saturating_mul(SECTOR_SIZE));
        devices += 1;
    }

    if devices == 0 {
        return Err(SysMenuError::metrics_unavailable("no block devices found"));
    }

    Ok(totals)
}
