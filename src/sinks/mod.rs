//! The provided emission sinks.
//!
//! Every backend variant implements [`Sink`], which keeps the collect and
//! translate stages backend-agnostic: a new backend is a new `Sink`
//! implementation and nothing else.

use crate::config::BackendConfig;
use crate::error::{ConfigError, EmitError};
use crate::protocol::Series;

mod datadog;
pub use datadog::DatadogSink;

mod wavefront_proxy;
pub use wavefront_proxy::WavefrontProxySink;

mod wavefront_sdk;
pub use wavefront_sdk::{MetricSender, WavefrontSdkSink};

/// The emission capability every backend variant implements.
///
/// A sink either delivers the full series or fails; there is no partial
/// success and no retry.
pub trait Sink: Send + Sync {
    /// Delivers the series to the backend.
    fn send(&self, series: &Series) -> Result<(), EmitError>;
}

/// Creates the sink selected by the backend configuration.
///
/// The configuration is validated before any sink is constructed, so a
/// rejected configuration never results in a network call.
pub fn from_backend(backend: &BackendConfig) -> Result<Box<dyn Sink>, ConfigError> {
    backend.validate()?;
    Ok(match backend {
        BackendConfig::Datadog { url, api_key } => Box::new(DatadogSink::new(url, api_key)?),
        BackendConfig::WavefrontProxy { addr } => Box::new(WavefrontProxySink::new(addr)),
    })
}
