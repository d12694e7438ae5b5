//! A [`Sink`] that writes line protocol to a Wavefront proxy over TCP.

use std::io::{self, Write};
use std::net::TcpStream;

use log::debug;

use super::Sink;
use crate::error::EmitError;
use crate::protocol::Series;

/// A [`Sink`] speaking the Wavefront proxy line protocol.
///
/// One TCP connection is opened per send and dropped once the whole series
/// has been written. The proxy sends no acknowledgement; a completed write
/// is success.
pub struct WavefrontProxySink {
    addr: String,
}

impl WavefrontProxySink {
    /// Creates a sink for the given `host:port` proxy address.
    pub fn new(addr: impl Into<String>) -> Self {
        Self { addr: addr.into() }
    }
}

impl Sink for WavefrontProxySink {
    fn send(&self, series: &Series) -> Result<(), EmitError> {
        let mut stream = TcpStream::connect(&self.addr).map_err(EmitError::transport)?;
        write_series(&mut stream, series).map_err(EmitError::transport)?;
        debug!("[wavefront-proxy] series written to {}", self.addr);
        Ok(())
    }
}

/// Writes one `<name> <value> <timestamp> source=<host>\n` line per point.
///
/// Value and timestamp are formatted as fixed six-decimal floats; that is
/// the wire contract the receiving proxy expects, integers are not accepted.
fn write_series<W: Write>(writer: &mut W, series: &Series) -> io::Result<()> {
    for metric in &series.metrics {
        for point in &metric.points {
            writeln!(
                writer,
                "{} {:.6} {:.6} source={}",
                metric.name, point.value, point.timestamp as f64, metric.host
            )?;
        }
    }
    writer.flush()
}
