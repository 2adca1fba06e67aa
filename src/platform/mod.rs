// Platform-specific code module

pub mod diskstats;

// Re-exports for cleaner imports
pub use diskstats::read_disk_io_counters;
