//! CPU usage time series.
//!
//! The sampler polls a `CpuLoadSource` in a blocking loop and hands the
//! finished `SampleLog` to the plot renderer.

mod sampler;

pub use sampler::{sample, sample_until, CpuSample, SampleLog, SamplerConfig};
