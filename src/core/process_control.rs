//! Process termination.
//!
//! `terminate` reports why a termination failed; `terminate_pid` collapses
//! that into a plain boolean for callers that only need success or failure.

use sysinfo::{Pid, ProcessRefreshKind, ProcessStatus, ProcessesToUpdate, Signal, System};

use crate::error::{Result, SysMenuError};

/// Outcome of a termination request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminateOutcome {
    /// The process received the signal and has exited
    Terminated,
    /// No process with that pid exists
    NotFound,
    /// The OS refused to deliver the signal
    Denied,
    /// The signal was delivered but the process is still present
    WaitFailed,
}

impl TerminateOutcome {
    pub fn is_success(self) -> bool {
        self == TerminateOutcome::Terminated
    }

    pub fn into_result(self, pid: u32) -> Result<()> {
        let reason = match self {
            TerminateOutcome::Terminated => return Ok(()),
            TerminateOutcome::NotFound => "no such process",
            TerminateOutcome::Denied => "termination denied",
            TerminateOutcome::WaitFailed => "process did not exit",
        };
        Err(SysMenuError::process_control(pid, reason))
    }
}

/// Send a termination request to `pid` and block until it has exited.
pub fn terminate(pid: u32) -> TerminateOutcome {
    let target = Pid::from_u32(pid);
    let mut system = System::new();
    refresh_one(&mut system, target);

    let Some(process) = system.process(target) else {
        log::info!("Terminate pid {}: no such process", pid);
        return TerminateOutcome::NotFound;
    };

    // Fall back to the platform's default kill where SIGTERM is unsupported
    let delivered = process.kill_with(Signal::Term).unwrap_or_else(|| process.kill());
    if !delivered {
        log::warn!("Terminate pid {}: signal was not delivered", pid);
        return TerminateOutcome::Denied;
    }

    let _ = process.wait();

    refresh_one(&mut system, target);
    let still_running = system
        .process(target)
        .is_some_and(|p| !matches!(p.status(), ProcessStatus::Zombie | ProcessStatus::Dead));

    if still_running {
        log::warn!("Terminate pid {}: process still present after wait", pid);
        TerminateOutcome::WaitFailed
    } else {
        log::info!("Terminated pid {}", pid);
        TerminateOutcome::Terminated
    }
}

/// Boolean form of [`terminate`]: true only when the process exited.
pub fn terminate_pid(pid: u32) -> bool {
    terminate(pid).is_success()
}

fn refresh_one(system: &mut System, pid: Pid) {
    system.refresh_processes_specifics(
        ProcessesToUpdate::Some(&[pid]),
        true,
        ProcessRefreshKind::nothing(),
    );
}
