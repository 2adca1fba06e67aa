use crate::core::system_info::types::ProcessRecord;
use crate::error::{Result, SysMenuError};
use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, System, UpdateKind, Users};

pub fn collect(system: &mut System) -> Result<Vec<ProcessRecord>> {
    system.refresh_processes_specifics(
        ProcessesToUpdate::All,
        true,
        ProcessRefreshKind::nothing().with_user(UpdateKind::OnlyIfNotSet),
    );

    if system.processes().is_empty() {
        return Err(SysMenuError::metrics_unavailable(
            "process table could not be read",
        ));
    }

    let users = Users::new_with_refreshed_list();

    let mut records: Vec<_> = system
        .processes()
        .values()
        .map(|process| ProcessRecord {
            pid: process.pid().as_u32(),
            name: process.name().to_string_lossy().to_string(),
            user: process
                .user_id()
                .and_then(|uid| users.get_user_by_id(uid))
                .map(|user| user.name().to_string()),
        })
        .collect();

    records.sort_by_key(|record| record.pid);
    Ok(records)
}
