//! Configuration consumed by the pipeline.
//!
//! Flag parsing and validation of user input belong to the embedding
//! process; this module only receives plain values and rejects the ones the
//! pipeline cannot act on. The polling cadence likewise belongs to whatever
//! external scheduler invokes the run.

use url::Url;

use crate::error::ConfigError;

/// Configuration for one pipeline run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdapterConfig {
    /// URL of the monitored process's debug endpoint.
    pub debug_endpoint: String,

    /// Host label attached to every emitted metric.
    ///
    /// The empty string is a valid value and is emitted as-is.
    pub host: String,

    /// Tags attached to every emitted metric.
    pub tags: Vec<String>,
}

impl AdapterConfig {
    /// Creates a configuration for the given debug endpoint.
    pub fn new(debug_endpoint: impl Into<String>) -> Self {
        Self {
            debug_endpoint: debug_endpoint.into(),
            ..Default::default()
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

    /// Checks that the configuration allows a collection attempt.
    ///
    /// Called by the pipeline before any network call is made.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.debug_endpoint.is_empty() {
            return Err(ConfigError::MissingEndpoint);
        }
        Url::parse(&self.debug_endpoint).map_err(ConfigError::InvalidEndpoint)?;
        Ok(())
    }
}

/// Selects the emission backend for a run.
///
/// Exactly one backend is used per run; they are never mixed. SDK-style
/// senders are injected by the caller (see
/// [`WavefrontSdkSink`](crate::sinks::WavefrontSdkSink)) rather than
/// configured here.
#[derive(Clone, PartialEq, Eq)]
pub enum BackendConfig {
    /// POST the series as JSON to a Datadog-style ingestion API.
    Datadog {
        /// Ingestion URL, without the API key.
        url: String,
        /// Static API key, passed as the `api_key` query parameter.
        api_key: String,
    },
    /// Write the series as line protocol to a Wavefront proxy.
    WavefrontProxy {
        /// Proxy address in `host:port` form.
        addr: String,
    },
}

impl BackendConfig {
    /// Checks that the backend selection allows an emission attempt.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            BackendConfig::Datadog { url, api_key } => {
                if url.is_empty() {
                    return Err(ConfigError::MissingBackendUrl);
                }
                Url::parse(url).map_err(ConfigError::InvalidBackendUrl)?;
                if api_key.is_empty() {
                    return Err(ConfigError::MissingApiKey);
                }
                Ok(())
            }
            BackendConfig::WavefrontProxy { addr } => {
                if addr.is_empty() {
                    return Err(ConfigError::MissingProxyAddr);
                }
                Ok(())
            }
        }
    }
}

impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendConfig::Datadog { url, .. } => f
                .debug_struct("Datadog")
                .field("url", url)
                .field("api_key", &"<redacted>")
                .finish(),
            BackendConfig::WavefrontProxy { addr } => f
                .debug_struct("WavefrontProxy")
                .field("addr", addr)
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = AdapterConfig::new("http://127.0.0.1:17013/debug/vars").with_host("cactus");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_endpoint() {
        let config = AdapterConfig::default();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingEndpoint)
        ));
    }

    #[test]
    fn test_invalid_endpoint() {
        let config = AdapterConfig::new("not a url");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn test_datadog_backend_validation() {
        let backend = BackendConfig::Datadog {
            url: "https://app.datadoghq.com/api/v1/series".into(),
            api_key: "abc".into(),
        };
        assert!(backend.validate().is_ok());

        let backend = BackendConfig::Datadog {
            url: String::new(),
            api_key: "abc".into(),
        };
        assert!(matches!(
            backend.validate(),
            Err(ConfigError::MissingBackendUrl)
        ));

        let backend = BackendConfig::Datadog {
            url: "https://app.datadoghq.com/api/v1/series".into(),
            api_key: String::new(),
        };
        assert!(matches!(backend.validate(), Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn test_wavefront_backend_validation() {
        let backend = BackendConfig::WavefrontProxy {
            addr: "localhost:2878".into(),
        };
        assert!(backend.validate().is_ok());

        let backend = BackendConfig::WavefrontProxy {
            addr: String::new(),
        };
        assert!(matches!(
            backend.validate(),
            Err(ConfigError::MissingProxyAddr)
        ));
    }

    #[test]
    fn test_api_key_is_redacted_from_debug() {
        let backend = BackendConfig::Datadog {
            url: "https://app.datadoghq.com/api/v1/series".into(),
            api_key: "secret".into(),
        };
        let rendered = format!("{backend:?}");
        assert!(!rendered.contains("secret"));
    }
}
