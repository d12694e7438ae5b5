//! The error taxonomy of the adapter.
//!
//! Every stage returns its error to the caller unmodified. The pipeline is
//! stateless and idempotent per run, so retry policy belongs to whatever
//! schedules the runs, not to this crate.

use thiserror::Error;

type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Raised when the debug endpoint cannot be collected from.
#[derive(Debug, Error)]
pub enum CollectError {
    /// The debug endpoint could not be reached, answered with a non-success
    /// status, or the response body could not be read.
    #[error("failed to query debug endpoint")]
    Network(#[source] BoxedError),
    /// The response body was not valid JSON.
    #[error("malformed debug payload")]
    Malformed(#[source] serde_json::Error),
}

/// Raised when a sink fails to deliver a series.
#[derive(Debug, Error)]
pub enum EmitError {
    /// The backend could not be reached or the write failed.
    #[error("transport failure while emitting metrics")]
    Transport(#[source] BoxedError),
    /// The backend answered with something other than 202 Accepted.
    #[error("expected 202 response but got {0}")]
    UnexpectedStatus(u16),
    /// The injected metric sender rejected a point.
    #[error("metric sender rejected the series")]
    SinkRejected(#[source] BoxedError),
}

impl EmitError {
    /// Wraps a transport-level failure.
    pub fn transport<E: std::error::Error + Send + Sync + 'static>(err: E) -> Self {
        EmitError::Transport(Box::new(err))
    }
}

/// Raised if the configuration is rejected before any network call is made.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No debug endpoint URL was provided.
    #[error("debug endpoint URL is missing")]
    MissingEndpoint,
    /// The debug endpoint URL could not be parsed.
    #[error("invalid debug endpoint URL")]
    InvalidEndpoint(#[source] url::ParseError),
    /// No backend ingestion URL was provided.
    #[error("backend URL is missing")]
    MissingBackendUrl,
    /// The backend ingestion URL could not be parsed.
    #[error("invalid backend URL")]
    InvalidBackendUrl(#[source] url::ParseError),
    /// No API key was provided for the Datadog backend.
    #[error("datadog API key is missing")]
    MissingApiKey,
    /// No address was provided for the Wavefront proxy backend.
    #[error("wavefront proxy address is missing")]
    MissingProxyAddr,
}

/// The failure of one pipeline run, tagged with the stage that failed.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// The configuration was rejected; no network call was attempted.
    #[error("configuration rejected")]
    Config(#[from] ConfigError),
    /// The collect stage failed.
    #[error("metric collection failed")]
    Collect(#[from] CollectError),
    /// The emit stage failed.
    #[error("metric emission failed")]
    Emit(#[from] EmitError),
}
