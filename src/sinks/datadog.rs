//! A [`Sink`] that POSTs the series to a Datadog-style ingestion API.

use log::debug;
use serde::Serialize;
use ureq::{Agent, AgentBuilder};
use url::Url;

use super::Sink;
use crate::error::{ConfigError, EmitError};
use crate::protocol::Series;

/// Wire form of one series: `{"series": [...]}` with each point encoded as
/// a `[timestamp, value]` pair.
#[derive(Serialize)]
struct WireSeries<'a> {
    series: Vec<WireMetric<'a>>,
}

#[derive(Serialize)]
struct WireMetric<'a> {
    metric: &'a str,
    points: Vec<[f64; 2]>,
    host: &'a str,
    tags: &'a [String],
}

fn to_wire(series: &Series) -> WireSeries<'_> {
    WireSeries {
        series: series
            .metrics
            .iter()
            .map(|metric| WireMetric {
                metric: &metric.name,
                points: metric
                    .points
                    .iter()
                    .map(|point| [point.timestamp as f64, point.value])
                    .collect(),
                host: &metric.host,
                tags: &metric.tags,
            })
            .collect(),
    }
}

/// A [`Sink`] that sends the series as one JSON POST.
///
/// The API key travels as the `api_key` query parameter. The backend
/// acknowledges ingestion with 202 Accepted and nothing else; any other
/// status, 200 included, is reported as
/// [`EmitError::UnexpectedStatus`].
pub struct DatadogSink {
    agent: Agent,
    endpoint: Url,
}

impl DatadogSink {
    /// Creates a sink for the given ingestion URL and API key.
    pub fn new(url: &str, api_key: &str) -> Result<Self, ConfigError> {
        Self::with_agent(url, api_key, AgentBuilder::new().build())
    }

    /// Creates a sink that uses the specified [`ureq::Agent`].
    pub fn with_agent(url: &str, api_key: &str, agent: Agent) -> Result<Self, ConfigError> {
        let mut endpoint = Url::parse(url).map_err(ConfigError::InvalidBackendUrl)?;
        endpoint.query_pairs_mut().append_pair("api_key", api_key);
        Ok(Self { agent, endpoint })
    }
}

impl Sink for DatadogSink {
    fn send(&self, series: &Series) -> Result<(), EmitError> {
        // Infallible: the wire types contain only strings and numbers.
        let body = serde_json::to_string(&to_wire(series)).unwrap();

        let response = self
            .agent
            .post(self.endpoint.as_str())
            .set("Content-Type", "application/json")
            .send_string(&body);

        match response {
            Ok(response) if response.status() == 202 => {
                debug!("[datadog] series accepted");
                Ok(())
            }
            Ok(response) => Err(EmitError::UnexpectedStatus(response.status())),
            Err(ureq::Error::Status(code, _)) => Err(EmitError::UnexpectedStatus(code)),
            Err(err) => Err(EmitError::transport(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::protocol::{Metric, MetricPoint};

    #[test]
    fn test_wire_format() {
        let series = Series {
            metrics: vec![
                Metric::new(
                    "garden.numGoroutines",
                    MetricPoint {
                        timestamp: 1000,
                        value: 19.0,
                    },
                )
                .with_host("cactus"),
                Metric::new(
                    "garden.memory",
                    MetricPoint {
                        timestamp: 1000,
                        value: 12345.0,
                    },
                )
                .with_host("cactus")
                .with_tag("env:test"),
            ],
        };

        let wire = serde_json::to_value(to_wire(&series)).unwrap();
        assert_eq!(
            wire,
            json!({
                "series": [
                    {
                        "metric": "garden.numGoroutines",
                        "points": [[1000.0, 19.0]],
                        "host": "cactus",
                        "tags": [],
                    },
                    {
                        "metric": "garden.memory",
                        "points": [[1000.0, 12345.0]],
                        "host": "cactus",
                        "tags": ["env:test"],
                    },
                ]
            })
        );
    }

    #[test]
    fn test_api_key_lands_in_the_query_string() {
        let sink = DatadogSink::new("http://127.0.0.1:9/series", "abc").unwrap();
        assert_eq!(sink.endpoint.query(), Some("api_key=abc"));
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        assert!(matches!(
            DatadogSink::new("not a url", "abc"),
            Err(ConfigError::InvalidBackendUrl(_))
        ));
    }
}
