// sysmenu Library - Public API

// Re-export error types
pub mod error;
pub use error::{Result, SysMenuError};

// Module declarations
pub mod core;
pub mod platform;
pub mod ui;

// Re-export commonly used types
pub use core::config::Config;

use std::fs::OpenOptions;
use std::str::FromStr;

use anyhow::Context;

/// Initialize logging.
///
/// The menu owns the terminal while it runs, so records go to the configured
/// log file instead of stderr. `RUST_LOG` still overrides the configured level.
pub fn init_logging(config: &Config) -> anyhow::Result<()> {
    let path = config
        .log_path()
        .context("Could not determine a log file location")?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {:?}", parent))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {:?}", path))?;

    let level = log::LevelFilter::from_str(&config.log_level).unwrap_or(log::LevelFilter::Info);

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("Logger already initialized")?;

    log::debug!("Logging to {:?} at level {}", path, level);
    Ok(())
}
