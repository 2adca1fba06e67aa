use crate::core::system_info::types::{percent_of, DiskRecord};
use crate::error::Result;
use sysinfo::Disks;

pub fn collect(disks: &mut Disks) -> Result<Vec<DiskRecord>> {
    disks.refresh(true);

    let records = disks
        .list()
        .iter()
        .map(|disk| {
            let total = disk.total_space();
            let available = disk.available_space();
            let used = total.saturating_sub(available);

            DiskRecord {
                device: disk.name().to_string_lossy().to_string(),
                mount_point: disk.mount_point().to_string_lossy().to_string(),
                fs_type: disk.file_system().to_string_lossy().to_string(),
                total_bytes: total,
                used_bytes: used,
                free_bytes: available,
                usage_percent: percent_of(used, total),
            }
        })
        .collect();

    Ok(records)
}
