//! Host metrics snapshots.
//!
//! Each submodule turns one OS facility into a plain record; the
//! `SysinfoProvider` ties them together behind the `MetricsProvider` trait.

pub mod collector;
pub mod cpu;
pub mod disk_io;
pub mod memory;
pub mod network;
pub mod os;
pub mod processes;
pub mod provider;
pub mod storage;
pub mod types;
pub mod uptime;

pub use collector::SysinfoProvider;
pub use provider::{CpuLoadSource, MetricsProvider};
pub use types::*;
