//! A [`Sink`] that delegates to an injected Wavefront SDK-style sender.

use std::sync::Mutex;

use log::debug;

use super::Sink;
use crate::error::EmitError;
use crate::protocol::Series;

/// The sender capability this sink delegates to.
///
/// The sender is an external collaborator with its own buffering and flush
/// state; this crate only drives it through the two calls below.
///
/// # Example
///
/// ```rust
/// use metrics_adapter::MetricSender;
///
/// struct PrintSender;
///
/// impl MetricSender for PrintSender {
///     fn send_metric(
///         &mut self,
///         name: &str,
///         value: f64,
///         timestamp: u64,
///         source: &str,
///         _tags: &[String],
///     ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
///         println!("{name} {value} {timestamp} source={source}");
///         Ok(())
///     }
///
///     fn flush(&mut self) {}
/// }
/// ```
pub trait MetricSender: Send {
    /// Sends one metric point.
    fn send_metric(
        &mut self,
        name: &str,
        value: f64,
        timestamp: u64,
        source: &str,
        tags: &[String],
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Flushes any buffered points to the backend.
    fn flush(&mut self);
}

/// A [`Sink`] that forwards each point to an injected [`MetricSender`].
///
/// Points are sent in series order. The first `send_metric` failure stops
/// the iteration and is reported as [`EmitError::SinkRejected`]; later
/// points are not sent. `flush` runs exactly once per send, on every exit
/// path.
pub struct WavefrontSdkSink<S> {
    sender: Mutex<S>,
}

impl<S: MetricSender> WavefrontSdkSink<S> {
    /// Creates a sink around the given sender.
    pub fn new(sender: S) -> Self {
        Self {
            sender: Mutex::new(sender),
        }
    }

    /// Consumes the sink and returns the sender.
    pub fn into_inner(self) -> S {
        self.sender.into_inner().unwrap()
    }
}

impl<S: MetricSender> Sink for WavefrontSdkSink<S> {
    fn send(&self, series: &Series) -> Result<(), EmitError> {
        let mut sender = self.sender.lock().unwrap();

        let mut result = Ok(());
        'points: for metric in &series.metrics {
            for point in &metric.points {
                if let Err(err) = sender.send_metric(
                    &metric.name,
                    point.value,
                    point.timestamp,
                    &metric.host,
                    &metric.tags,
                ) {
                    result = Err(EmitError::SinkRejected(err));
                    break 'points;
                }
            }
        }

        sender.flush();
        debug!("[wavefront-sdk] sender flushed");
        result
    }
}
