use std::io::Write;
use std::time::Duration;

use crate::channel::Channel;
use crate::error::Result;
use crate::traits::LinkTransport;

/// Link that writes every channel's bytes to one `Write` sink.
///
/// Used when a host process stands in for the device's serial ports,
/// e.g. the interactive console replying on stdout. Writes block until
/// the sink accepts them; `max_wait` is not enforced here.
#[derive(Debug)]
pub struct StreamLink<W: Write> {
    inner: W,
}

impl StreamLink<std::io::Stdout> {
    /// Link that replies on standard output.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> StreamLink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Get a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Get a mutable reference to the underlying writer.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Consume and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> LinkTransport for StreamLink<W> {
    fn send(&mut self, _channel: Channel, bytes: &[u8], _max_wait: Duration) -> Result<()> {
        self.inner.write_all(bytes)?;
        self.inner.flush()?;
        Ok(())
    }
}
