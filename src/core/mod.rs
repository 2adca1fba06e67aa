// Core business logic module

pub mod config;
pub mod process_control;
pub mod system_info;
pub mod system_monitor;

// Re-export commonly used items
pub use config::Config;
pub use process_control::{terminate, terminate_pid, TerminateOutcome};
pub use system_info::{MetricsProvider, SysinfoProvider};
pub use system_monitor::{sample, sample_until, CpuSample, SampleLog, SamplerConfig};
