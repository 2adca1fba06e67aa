use std::io;
use thiserror::Error;

/// Custom error type for sysmenu
#[derive(Error, Debug)]
pub enum SysMenuError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Metrics unavailable: {0}")]
    MetricsUnavailable(String),

    #[error("Viewport too small: row {row} is outside a {height}-line viewport")]
    ViewportTooSmall { row: u16, height: u16 },

    #[error("Process control failed for pid {pid}: {reason}")]
    ProcessControl { pid: u32, reason: String },

    #[error("TUI error: {0}")]
    Tui(String),

    #[error("Interrupted by user")]
    Interrupted,
}

/// Result type alias for sysmenu
pub type Result<T> = std::result::Result<T, SysMenuError>;

impl SysMenuError {
    /// Create a metrics unavailable error
    pub fn metrics_unavailable<S: Into<String>>(msg: S) -> Self {
        SysMenuError::MetricsUnavailable(msg.into())
    }

    pub fn process_control<S: Into<String>>(pid: u32, reason: S) -> Self {
        SysMenuError::ProcessControl {
            pid,
            reason: reason.into(),
        }
    }

    pub fn tui<S: Into<String>>(msg: S) -> Self {
        SysMenuError::Tui(msg.into())
    }
}
