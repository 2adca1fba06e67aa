use sysmenu::core::system_info::{MetricValue, MetricsProvider, SysinfoProvider};
use sysmenu::SysMenuError;

fn assert_percent(value: Option<&MetricValue>) {
    let percent = value.and_then(MetricValue::as_float).expect("percent is a float");
    assert!((0.0..=100.0).contains(&percent), "percent out of range: {}", percent);
}

#[test]
fn test_system_identity_fields() {
    let snapshot = SysinfoProvider::new().system_identity().unwrap();

    assert_eq!(
        snapshot.labels(),
        vec![
            "Operating System",
            "Computer Name",
            "Release",
            "Machine Type",
            "Processor"
        ]
    );
    assert!(snapshot.iter().all(|(_, v)| v.as_text().is_some()));
    assert_eq!(
        snapshot.get("Machine Type").and_then(MetricValue::as_text),
        Some(std::env::consts::ARCH)
    );
}

#[test]
fn test_cpu_info_fields() {
    let snapshot = SysinfoProvider::new().cpu_info().unwrap();

    let total = snapshot
        .get("Total Cores")
        .and_then(MetricValue::as_integer)
        .unwrap();
    assert!(total >= 1);
    assert!(snapshot
        .get("Current Frequency (MHz)")
        .and_then(MetricValue::as_float)
        .is_some_and(|f| f >= 0.0));
    assert_percent(snapshot.get("CPU Usage (%)"));
}

#[test]
fn test_memory_info_fields() {
    let snapshot = SysinfoProvider::new().memory_info().unwrap();

    let total = snapshot
        .get("Total Memory")
        .and_then(MetricValue::as_integer)
        .unwrap();
    let available = snapshot
        .get("Available Memory")
        .and_then(MetricValue::as_integer)
        .unwrap();
    assert!(total > 0);
    assert!(available <= total);
    assert!(snapshot
        .get("Used Memory")
        .and_then(MetricValue::as_integer)
        .is_some());
    assert_percent(snapshot.get("Memory Usage (%)"));
}

#[test]
fn test_disk_records_are_consistent() {
    let disks = SysinfoProvider::new().disks().unwrap();

    for disk in disks {
        assert!(disk.used_bytes <= disk.total_bytes);
        assert!((0.0..=100.0).contains(&disk.usage_percent));
    }
}

#[test]
fn test_network_info_fields() {
    let snapshot = SysinfoProvider::new().network_info().unwrap();

    assert!(snapshot.get("IP Address").and_then(MetricValue::as_text).is_some());
    assert!(snapshot
        .get("Data Sent (B)")
        .and_then(MetricValue::as_integer)
        .is_some());
    assert!(snapshot
        .get("Data Received (B)")
        .and_then(MetricValue::as_integer)
        .is_some());
}

#[test]
fn test_uptime_fields() {
    let snapshot = SysinfoProvider::new().uptime().unwrap();

    let boot = snapshot.get("Boot Time").and_then(MetricValue::as_text).unwrap();
    assert_eq!(boot.len(), "2024-01-01 00:00:00".len());

    let uptime = snapshot.get("Uptime").and_then(MetricValue::as_text).unwrap();
    assert!(uptime.contains(':'));
}

#[test]
fn test_disk_io_is_counters_or_unavailable() {
    match SysinfoProvider::new().disk_io() {
        Ok(snapshot) => {
            for label in ["Data Read (B)", "Data Written (B)", "Read Count", "Write Count"] {
                assert!(snapshot.get(label).and_then(MetricValue::as_integer).is_some());
            }
        }
        Err(e) => assert!(matches!(e, SysMenuError::MetricsUnavailable(_))),
    }
}

#[test]
fn test_process_list_contains_current_process() {
    let processes = SysinfoProvider::new().processes().unwrap();
    let own_pid = std::process::id();

    assert!(processes.iter().any(|p| p.pid == own_pid));
    assert!(processes.windows(2).all(|pair| pair[0].pid < pair[1].pid));
}
