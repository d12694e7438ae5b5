//! Bridges a process debug endpoint to an external metrics backend.
//!
//! The monitored process exposes an HTTP debug endpoint reporting its
//! goroutine count and allocator statistics. This crate scrapes that
//! endpoint once, translates the snapshot into a backend-agnostic
//! [`Series`] of exactly two gauges (`garden.numGoroutines` and
//! `garden.memory`), and delivers the series through one of three
//! [`Sink`] implementations:
//!
//! - [`DatadogSink`]: one JSON POST to a Datadog-style ingestion API.
//! - [`WavefrontProxySink`]: line protocol over a plain TCP connection.
//! - [`WavefrontSdkSink`]: delegation to an injected [`MetricSender`].
//!
//! # Usage
//!
//! ```rust,no_run
//! use metrics_adapter::{AdapterConfig, BackendConfig};
//!
//! let config = AdapterConfig::new("http://127.0.0.1:17013/debug/vars")
//!     .with_host("cell-42");
//! let sink = metrics_adapter::sinks::from_backend(&BackendConfig::Datadog {
//!     url: "https://app.datadoghq.com/api/v1/series".into(),
//!     api_key: "abc123".into(),
//! })?;
//!
//! metrics_adapter::run(&config, sink.as_ref())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Each run is a single blocking collect → translate → emit sequence with
//! no internal state, retry or scheduling; invoke it from cron, a timer or
//! whatever cadence fits. A failed run reports which stage failed through
//! [`AdapterError`].

#![warn(missing_docs)]

mod collector;
mod config;
mod error;
mod pipeline;
mod protocol;
mod translate;

pub mod sinks;

pub use collector::{collect, decode, fetch};
pub use config::{AdapterConfig, BackendConfig};
pub use error::{AdapterError, CollectError, ConfigError, EmitError};
pub use pipeline::{run, run_with_agent};
pub use protocol::{unix_seconds, DebugSnapshot, MemStats, Metric, MetricPoint, Series};
pub use sinks::{DatadogSink, MetricSender, Sink, WavefrontProxySink, WavefrontSdkSink};
pub use translate::{translate, GOROUTINES_METRIC, MEMORY_METRIC};
