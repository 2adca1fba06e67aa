use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use sysmenu::core::config::Config;
use tempfile::TempDir;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.sample_interval_ms, 1000);
    assert_eq!(config.sample_duration_secs, 20);
    assert_eq!(config.log_level, "info");
    assert!(config.log_file.is_none());
}

#[test]
fn test_config_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("nested").join("config.json");

    let config = Config {
        sample_interval_ms: 250,
        sample_duration_secs: 5,
        log_level: "debug".to_string(),
        log_file: Some(PathBuf::from("/tmp/sysmenu-test.log")),
    };
    config.save_to(&config_path).unwrap();

    let loaded = Config::load_from(&config_path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_config_missing_file_returns_default() {
    let temp_dir = TempDir::new().unwrap();
    let loaded = Config::load_from(&temp_dir.path().join("absent.json")).unwrap();
    assert_eq!(loaded, Config::default());
}

#[test]
fn test_config_empty_or_corrupt_file_returns_default() {
    let temp_dir = TempDir::new().unwrap();

    let empty = temp_dir.path().join("empty.json");
    fs::write(&empty, b"").unwrap();
    assert_eq!(Config::load_from(&empty).unwrap(), Config::default());

    let corrupt = temp_dir.path().join("corrupt.json");
    fs::write(&corrupt, b"{ not json").unwrap();
    assert_eq!(Config::load_from(&corrupt).unwrap(), Config::default());
}

#[test]
fn test_config_partial_file_fills_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.json");
    fs::write(&config_path, br#"{ "sample_duration_secs": 7 }"#).unwrap();

    let loaded = Config::load_from(&config_path).unwrap();
    assert_eq!(loaded.sample_duration_secs, 7);
    assert_eq!(loaded.sample_interval_ms, 1000);
    assert_eq!(loaded.log_level, "info");
}

#[test]
fn test_config_zero_interval_is_replaced() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.json");
    fs::write(&config_path, br#"{ "sample_interval_ms": 0 }"#).unwrap();

    let loaded = Config::load_from(&config_path).unwrap();
    assert_eq!(loaded.sample_interval_ms, 1000);
}

#[test]
fn test_config_sampler_durations() {
    let config = Config {
        sample_interval_ms: 500,
        sample_duration_secs: 3,
        ..Default::default()
    };

    let sampler = config.sampler_config();
    assert_eq!(sampler.interval, Duration::from_millis(500));
    assert_eq!(sampler.duration, Duration::from_secs(3));
}

#[test]
fn test_config_explicit_log_file_wins() {
    let config = Config {
        log_file: Some(PathBuf::from("/var/tmp/custom.log")),
        ..Default::default()
    };
    assert_eq!(config.log_path(), Some(PathBuf::from("/var/tmp/custom.log")));
}
