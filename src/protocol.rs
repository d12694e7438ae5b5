//! Protocol types shared by all pipeline stages.
//!
//! [`DebugSnapshot`] is the decoded form of the debug endpoint's payload.
//! [`Series`] is the backend-agnostic translated form that every sink
//! consumes. Both live only for the duration of one pipeline run.

use std::time::SystemTime;

use serde::Deserialize;

/// Allocator statistics reported by the debug endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct MemStats {
    /// Bytes currently allocated on the heap.
    #[serde(default, rename = "Alloc")]
    pub alloc: f64,
}

/// A decoded snapshot of the monitored process's runtime counters.
///
/// Decoding is permissive: unknown fields are ignored and missing numeric
/// fields default to zero. Both the `numGoroutines` and `numGoRoutines`
/// casings seen in the wild are accepted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct DebugSnapshot {
    /// Number of goroutines currently running in the monitored process.
    #[serde(default, rename = "numGoroutines", alias = "numGoRoutines")]
    pub num_goroutines: u64,
    /// Allocator statistics.
    #[serde(default)]
    pub memstats: MemStats,
}

/// A single measured value at a point in time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MetricPoint {
    /// Capture time in whole unix seconds.
    pub timestamp: u64,
    /// The measured value.
    pub value: f64,
}

/// A named metric with its points, host label and tags.
#[derive(Clone, Debug, PartialEq)]
pub struct Metric {
    /// Metric name, e.g. `garden.numGoroutines`.
    pub name: String,
    /// The measured points, one per collection cycle.
    pub points: Vec<MetricPoint>,
    /// Host label. The empty string is a valid, explicit "no host" value.
    pub host: String,
    /// Tags attached to every point of this metric.
    pub tags: Vec<String>,
}

impl Metric {
    /// Creates a metric carrying a single point and no host or tags.
    pub fn new(name: impl Into<String>, point: MetricPoint) -> Self {
        Self {
            name: name.into(),
            points: vec![point],
            host: String::new(),
            tags: Vec::new(),
        }
    }

    /// Sets the host label.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Adds a tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }
}

/// The ordered collection of metrics produced by one collection cycle.
///
/// One cycle always yields exactly two metrics, all of whose points share
/// the same capture timestamp and host label.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    /// The metrics, in translation order.
    pub metrics: Vec<Metric>,
}

impl Series {
    /// Returns the number of metrics in the series.
    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    /// Returns true if the series carries no metrics.
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// Applies the same tag set to every metric of the series.
    #[must_use]
    pub fn with_tags(mut self, tags: &[String]) -> Self {
        if !tags.is_empty() {
            for metric in &mut self.metrics {
                metric.tags = tags.to_vec();
            }
        }
        self
    }
}

/// Converts a `SystemTime` into whole unix seconds.
///
/// Times before the epoch clamp to zero.
pub fn unix_seconds(st: SystemTime) -> u64 {
    match st.duration_since(SystemTime::UNIX_EPOCH) {
        Ok(duration) => duration.as_secs(),
        Err(_) => 0,
    }
}
