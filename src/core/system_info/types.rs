//! Plain snapshot records produced by the metrics provider.
//!
//! Every type here is a value: no OS handles, no back-references.

use std::fmt;

/// A single scalar measurement
#[derive(Debug, Clone, PartialEq)]
pub enum MetricValue {
    /// Byte counts and counters
    Integer(u64),
    /// Percentages and frequencies
    Float(f64),
    Text(String),
}

impl MetricValue {
    pub fn as_integer(&self) -> Option<u64> {
        match self {
            MetricValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            MetricValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            MetricValue::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Integer(v) => write!(f, "{}", v),
            MetricValue::Float(v) => write!(f, "{:.1}", v),
            MetricValue::Text(v) => f.write_str(v),
        }
    }
}

impl From<u64> for MetricValue {
    fn from(value: u64) -> Self {
        MetricValue::Integer(value)
    }
}

impl From<usize> for MetricValue {
    fn from(value: usize) -> Self {
        MetricValue::Integer(value as u64)
    }
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        MetricValue::Float(value)
    }
}

impl From<f32> for MetricValue {
    fn from(value: f32) -> Self {
        MetricValue::Float(value as f64)
    }
}

impl From<String> for MetricValue {
    fn from(value: String) -> Self {
        MetricValue::Text(value)
    }
}

impl From<&str> for MetricValue {
    fn from(value: &str) -> Self {
        MetricValue::Text(value.to_string())
    }
}

/// Ordered label -> value mapping produced by one provider call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricSnapshot {
    entries: Vec<(String, MetricValue)>,
}

impl MetricSnapshot {
    pub fn builder() -> MetricSnapshotBuilder {
        MetricSnapshotBuilder::default()
    }

    pub fn get(&self, label: &str) -> Option<&MetricValue> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetricValue)> {
        self.entries.iter().map(|(l, v)| (l.as_str(), v))
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|(l, _)| l.as_str()).collect()
    }
}

/// Collects entries in insertion order; the snapshot is frozen on `build`
#[derive(Debug, Default)]
pub struct MetricSnapshotBuilder {
    entries: Vec<(String, MetricValue)>,
}

impl MetricSnapshotBuilder {
    pub fn entry(mut self, label: impl Into<String>, value: impl Into<MetricValue>) -> Self {
        self.entries.push((label.into(), value.into()));
        self
    }

    pub fn build(self) -> MetricSnapshot {
        MetricSnapshot {
            entries: self.entries,
        }
    }
}

/// Usage of one mounted volume
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiskRecord {
    pub device: String,
    pub mount_point: String,
    pub fs_type: String,
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub free_bytes: u64,
    pub usage_percent: f64,
}

impl DiskRecord {
    /// Labeled fields in display order
    pub fn fields(&self) -> Vec<(&'static str, MetricValue)> {
        vec![
            ("Device", MetricValue::from(self.device.as_str())),
            ("Mount Point", MetricValue::from(self.mount_point.as_str())),
            ("File System", MetricValue::from(self.fs_type.as_str())),
            ("Total Space", MetricValue::Integer(self.total_bytes)),
            ("Used", MetricValue::Integer(self.used_bytes)),
            ("Free", MetricValue::Integer(self.free_bytes)),
            ("Usage (%)", MetricValue::Float(self.usage_percent)),
        ]
    }
}

/// One running process at sampling time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRecord {
    pub pid: u32,
    pub name: String,
    pub user: Option<String>,
}

/// Cumulative block device counters summed over whole disks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiskIoCounters {
    pub read_bytes: u64,
    pub write_bytes: u64,
    pub read_count: u64,
    pub write_count: u64,
}

/// Percentage of `part` in `total`, 0 when `total` is 0
pub fn percent_of(part: u64, total: u64) -> f64 {
    if total > 0 {
        (part as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}
