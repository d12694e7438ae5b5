//! The one-shot pipeline: collect, translate, emit.

use std::time::SystemTime;

use log::debug;
use ureq::{Agent, AgentBuilder};

use crate::config::AdapterConfig;
use crate::error::AdapterError;
use crate::sinks::Sink;
use crate::{collector, translate};

/// Runs one collect → translate → emit cycle against the given sink.
///
/// The configuration is validated before any network call. The stages run
/// sequentially and the first failure aborts the rest; there is no retry
/// and no partial emission. Periodic invocation is the business of an
/// external scheduler, not of this function.
pub fn run(config: &AdapterConfig, sink: &dyn Sink) -> Result<(), AdapterError> {
    run_with_agent(&AgentBuilder::new().build(), config, sink)
}

/// Like [`run`], but collects through the specified [`ureq::Agent`].
pub fn run_with_agent(
    agent: &Agent,
    config: &AdapterConfig,
    sink: &dyn Sink,
) -> Result<(), AdapterError> {
    config.validate()?;

    debug!("[pipeline] collecting from {}", config.debug_endpoint);
    let snapshot = collector::collect(agent, &config.debug_endpoint)?;

    let series =
        translate::translate(&snapshot, &config.host, SystemTime::now()).with_tags(&config.tags);

    debug!("[pipeline] emitting {} metrics", series.len());
    sink.send(&series)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::error::EmitError;
    use crate::protocol::Series;

    struct RecordingSink {
        sent: Mutex<Vec<Series>>,
    }

    impl Sink for RecordingSink {
        fn send(&self, series: &Series) -> Result<(), EmitError> {
            self.sent.lock().unwrap().push(series.clone());
            Ok(())
        }
    }

    #[test]
    fn test_invalid_config_prevents_any_network_call() {
        let sink = RecordingSink {
            sent: Mutex::new(Vec::new()),
        };

        let err = run(&AdapterConfig::default(), &sink).unwrap_err();
        assert!(matches!(err, AdapterError::Config(_)));
        assert!(sink.sent.lock().unwrap().is_empty());
    }
}
