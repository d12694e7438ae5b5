//! The collect stage: one blocking GET against the debug endpoint and the
//! decode of its payload.

use std::io::Read;

use log::debug;
use ureq::Agent;

use crate::error::CollectError;
use crate::protocol::DebugSnapshot;

/// Fetches the raw debug payload with a single blocking GET.
///
/// Any transport failure or non-success status is [`CollectError::Network`].
/// The body is read to completion before the response is released.
pub fn fetch(agent: &Agent, endpoint: &str) -> Result<Vec<u8>, CollectError> {
    let response = agent
        .get(endpoint)
        .call()
        .map_err(|err| CollectError::Network(Box::new(err)))?;

    let mut body = Vec::new();
    response
        .into_reader()
        .read_to_end(&mut body)
        .map_err(|err| CollectError::Network(Box::new(err)))?;

    debug!("[collector] fetched {} bytes from {}", body.len(), endpoint);
    Ok(body)
}

/// Decodes a debug payload into a typed snapshot.
///
/// Input that is not valid JSON is [`CollectError::Malformed`]. Missing
/// numeric fields default to zero and unknown fields are ignored; the debug
/// schema varies across versions of the monitored process.
pub fn decode(body: &[u8]) -> Result<DebugSnapshot, CollectError> {
    serde_json::from_slice(body).map_err(CollectError::Malformed)
}

/// Fetches and decodes in one step.
pub fn collect(agent: &Agent, endpoint: &str) -> Result<DebugSnapshot, CollectError> {
    let body = fetch(agent, endpoint)?;
    decode(&body)
}
