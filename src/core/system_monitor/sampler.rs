use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

use crate::core::system_info::CpuLoadSource;
use crate::error::{Result, SysMenuError};

const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);
const DEFAULT_DURATION: Duration = Duration::from_secs(20);

/// One CPU usage measurement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CpuSample {
    pub timestamp: DateTime<Local>,
    pub percent: f32,
}

/// Ordered CPU samples collected over one sampling window
#[derive(Debug, Clone, Default)]
pub struct SampleLog {
    samples: Vec<CpuSample>,
}

impl SampleLog {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[CpuSample] {
        &self.samples
    }

    pub fn first(&self) -> Option<&CpuSample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&CpuSample> {
        self.samples.last()
    }

    /// (seconds since the first sample, percent) pairs for charting
    pub fn points(&self) -> Vec<(f64, f64)> {
        let Some(start) = self.first().map(|s| s.timestamp) else {
            return Vec::new();
        };

        self.samples
            .iter()
            .map(|s| {
                let offset = (s.timestamp - start)
                    .num_microseconds()
                    .unwrap_or_default() as f64
                    / 1_000_000.0;
                (offset, s.percent as f64)
            })
            .collect()
    }

    fn push(&mut self, percent: f32) {
        let now = Local::now();
        // The wall clock may step backwards; the log stays strictly ordered
        let timestamp = match self.samples.last() {
            Some(prev) if now <= prev.timestamp => {
                prev.timestamp + chrono::Duration::microseconds(1)
            }
            _ => now,
        };

        self.samples.push(CpuSample { timestamp, percent });
    }
}

/// Cadence and bound of one sampling run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerConfig {
    pub interval: Duration,
    pub duration: Duration,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            duration: DEFAULT_DURATION,
        }
    }
}

/// Poll `source` every `interval` until `duration` of wall-clock time has passed.
///
/// Each iteration blocks inside the measurement itself, so the wait *is* the
/// measurement window. The body runs before the bound is checked: a
/// `duration` shorter than `interval` still yields exactly one sample.
pub fn sample<S>(source: &mut S, interval: Duration, duration: Duration) -> Result<SampleLog>
where
    S: CpuLoadSource + ?Sized,
{
    sample_until(source, interval, duration, || false)
}

/// Like [`sample`], but `stop` is checked after every sample.
///
/// A `true` from `stop` abandons the run with `SysMenuError::Interrupted`.
pub fn sample_until<S, F>(
    source: &mut S,
    interval: Duration,
    duration: Duration,
    mut stop: F,
) -> Result<SampleLog>
where
    S: CpuLoadSource + ?Sized,
    F: FnMut() -> bool,
{
    let started = Instant::now();
    let mut log = SampleLog::default();

    loop {
        let percent = source.measure_cpu_load(interval)?;
        log.push(percent);
        log::debug!("CPU sample {}: {:.1}%", log.len(), percent);

        if stop() {
            log::info!("CPU sampling interrupted after {} samples", log.len());
            return Err(SysMenuError::Interrupted);
        }

        if started.elapsed() >= duration {
            break;
        }
    }

    log::info!(
        "Collected {} CPU samples in {:.1}s",
        log.len(),
        started.elapsed().as_secs_f64()
    );

    Ok(log)
}
