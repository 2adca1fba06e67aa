use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::system_info::MetricValue;

/// Labels containing this are byte counts shown in GB
pub const MEMORY_KEYWORD: &str = "Memory";
/// Labels containing this are byte counts shown in MB
pub const DATA_KEYWORD: &str = "Data";

const GIB: f64 = (1u64 << 30) as f64;
const MIB: f64 = (1u64 << 20) as f64;

/// Format a byte count as GB (2^30) with two decimals
pub fn format_gb(bytes: u64) -> String {
    format!("{:.2} GB", bytes as f64 / GIB)
}

/// Format a byte count as MB (2^20) with two decimals
pub fn format_mb(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / MIB)
}

/// Format one value of a flat record.
///
/// Only integers are converted, and only when the label names memory or a
/// data volume.
pub fn format_record_value(label: &str, value: &MetricValue) -> String {
    match value {
        MetricValue::Integer(bytes) if label.contains(MEMORY_KEYWORD) => format_gb(*bytes),
        MetricValue::Integer(bytes) if label.contains(DATA_KEYWORD) => format_mb(*bytes),
        other => other.to_string(),
    }
}

/// Format one field of a disk record: every integer is a byte count in GB.
pub fn format_disk_value(value: &MetricValue) -> String {
    match value {
        MetricValue::Integer(bytes) => format_gb(*bytes),
        other => other.to_string(),
    }
}

/// Format seconds as `H:MM:SS`, prefixed with `N day(s), ` past one day
pub fn format_uptime(secs: u64) -> String {
    let days = secs / 86400;
    let hours = (secs % 86400) / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;

    let clock = format!("{}:{:02}:{:02}", hours, minutes, seconds);
    match days {
        0 => clock,
        1 => format!("1 day, {}", clock),
        n => format!("{} days, {}", n, clock),
    }
}

/// Cut `text` so it occupies at most `width` terminal columns
pub fn fit_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }

    let mut used = 0;
    let mut fitted = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        fitted.push(ch);
    }
    fitted
}
