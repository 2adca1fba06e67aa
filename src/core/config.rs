use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::system_monitor::SamplerConfig;

const DEFAULT_SAMPLE_INTERVAL_MS: u64 = 1000;
const DEFAULT_SAMPLE_DURATION_SECS: u64 = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Measurement window of one CPU usage sample, in milliseconds
    pub sample_interval_ms: u64,
    /// Total wall-clock time spent collecting the CPU usage plot
    pub sample_duration_secs: u64,
    pub log_level: String,
    /// Log destination; defaults to the user cache directory
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sample_interval_ms: DEFAULT_SAMPLE_INTERVAL_MS,
            sample_duration_secs: DEFAULT_SAMPLE_DURATION_SECS,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let data = fs::read(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        // If the file is empty or corrupted, return default config
        let mut config = if data.is_empty() {
            Config::default()
        } else {
            serde_json::from_slice(&data).unwrap_or_else(|e| {
                log::warn!("Ignoring unreadable config {:?}: {}", config_path, e);
                Config::default()
            })
        };

        config.normalize();
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let data =
            serde_json::to_vec_pretty(self).with_context(|| "Failed to serialize config")?;

        fs::write(config_path, data)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        Ok(())
    }

    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().with_context(|| "Could not determine config directory")?;

        Ok(config_dir.join("sysmenu").join("config.json"))
    }

    /// Resolved log file location
    pub fn log_path(&self) -> Option<PathBuf> {
        match &self.log_file {
            Some(path) => Some(path.clone()),
            None => dirs::cache_dir().map(|dir| dir.join("sysmenu").join("sysmenu.log")),
        }
    }

    pub fn sample_interval(&self) -> Duration {
        Duration::from_millis(self.sample_interval_ms)
    }

    pub fn sample_duration(&self) -> Duration {
        Duration::from_secs(self.sample_duration_secs)
    }

    pub fn sampler_config(&self) -> SamplerConfig {
        SamplerConfig {
            interval: self.sample_interval(),
            duration: self.sample_duration(),
        }
    }

    // A zero interval would spin without ever observing CPU activity
    fn normalize(&mut self) {
        if self.sample_interval_ms == 0 {
            log::warn!(
                "sample_interval_ms must be positive, using {}",
                DEFAULT_SAMPLE_INTERVAL_MS
            );
            self.sample_interval_ms = DEFAULT_SAMPLE_INTERVAL_MS;
        }
    }
}
