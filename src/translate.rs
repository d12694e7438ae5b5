//! The translate stage: snapshot to backend-agnostic series.

use std::time::SystemTime;

use crate::protocol::{unix_seconds, DebugSnapshot, Metric, MetricPoint, Series};

/// Name of the goroutine-count metric.
pub const GOROUTINES_METRIC: &str = "garden.numGoroutines";

/// Name of the allocated-memory metric.
pub const MEMORY_METRIC: &str = "garden.memory";

/// Translates a snapshot into a series of exactly two metrics.
///
/// Pure and deterministic: [`GOROUTINES_METRIC`] first, [`MEMORY_METRIC`]
/// second, both carrying a point at `captured_at` and the given host label.
/// No aggregation, filtering or unit conversion happens here.
pub fn translate(snapshot: &DebugSnapshot, host: &str, captured_at: SystemTime) -> Series {
    let timestamp = unix_seconds(captured_at);
    Series {
        metrics: vec![
            Metric::new(
                GOROUTINES_METRIC,
                MetricPoint {
                    timestamp,
                    value: snapshot.num_goroutines as f64,
                },
            )
            .with_host(host),
            Metric::new(
                MEMORY_METRIC,
                MetricPoint {
                    timestamp,
                    value: snapshot.memstats.alloc,
                },
            )
            .with_host(host),
        ],
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::protocol::MemStats;

    fn snapshot() -> DebugSnapshot {
        DebugSnapshot {
            num_goroutines: 19,
            memstats: MemStats { alloc: 12345.0 },
        }
    }

    #[test]
    fn test_translate_yields_two_metrics_in_order() {
        let captured_at = SystemTime::UNIX_EPOCH + Duration::from_secs(1000);
        let series = translate(&snapshot(), "cactus", captured_at);

        assert_eq!(series.len(), 2);
        assert_eq!(series.metrics[0].name, GOROUTINES_METRIC);
        assert_eq!(series.metrics[1].name, MEMORY_METRIC);
        assert_eq!(series.metrics[0].points[0].value, 19.0);
        assert_eq!(series.metrics[1].points[0].value, 12345.0);
    }

    #[test]
    fn test_all_points_share_the_capture_timestamp() {
        let captured_at = SystemTime::UNIX_EPOCH + Duration::from_secs(1000);
        let series = translate(&snapshot(), "", captured_at);

        for metric in &series.metrics {
            for point in &metric.points {
                assert_eq!(point.timestamp, 1000);
            }
        }
    }

    #[test]
    fn test_host_label_is_uniform() {
        let series = translate(&snapshot(), "cactus", SystemTime::now());
        assert!(series.metrics.iter().all(|m| m.host == "cactus"));

        let series = translate(&snapshot(), "", SystemTime::now());
        assert!(series.metrics.iter().all(|m| m.host.is_empty()));
    }

    #[test]
    fn test_tags_default_to_empty() {
        let series = translate(&snapshot(), "cactus", SystemTime::now());
        assert!(series.metrics.iter().all(|m| m.tags.is_empty()));
    }
}
