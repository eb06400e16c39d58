use std::time::Duration;

use crate::channel::Channel;
use crate::error::Result;

/// A byte link the console can answer on.
///
/// Implementations cover the real serial ports on a device as well as the
/// in-memory and stream-backed links used by tests and host tooling.
/// `send` is synchronous: when it returns `Ok(())` the bytes have been
/// accepted by the link, not necessarily received by the far side.
pub trait LinkTransport {
    /// Transmit `bytes` on `channel`, waiting at most `max_wait` for the
    /// link to accept them.
    fn send(&mut self, channel: Channel, bytes: &[u8], max_wait: Duration) -> Result<()>;
}
