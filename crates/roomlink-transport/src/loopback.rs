use std::time::Duration;

use bytes::{Bytes, BytesMut};
use tracing::warn;

use crate::channel::{Channel, CHANNEL_COUNT};
use crate::error::{Result, TransportError};
use crate::traits::LinkTransport;

/// In-memory link that captures everything sent on each channel.
///
/// Backs the simulator and most tests: feed a console input bytes, then
/// inspect what it transmitted with [`LoopbackLink::take`]. An optional
/// outbox cap models a link whose far side stopped draining.
#[derive(Debug, Default)]
pub struct LoopbackLink {
    outboxes: [BytesMut; CHANNEL_COUNT],
    outbox_limit: Option<usize>,
}

impl LoopbackLink {
    /// Create a link with unbounded per-channel outboxes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap each outbox at `limit` bytes. A send that would exceed the cap
    /// fails with [`TransportError::WriteTimeout`].
    pub fn with_outbox_limit(limit: usize) -> Self {
        Self {
            outboxes: Default::default(),
            outbox_limit: Some(limit),
        }
    }

    /// Bytes sent on `channel` since the last take, leaving the outbox empty.
    pub fn take(&mut self, channel: Channel) -> Bytes {
        self.outboxes[channel.index()].split().freeze()
    }

    /// Bytes currently queued on `channel`, without consuming them.
    pub fn peek(&self, channel: Channel) -> &[u8] {
        &self.outboxes[channel.index()]
    }

    /// Total bytes queued across all channels.
    pub fn queued(&self) -> usize {
        self.outboxes.iter().map(|b| b.len()).sum()
    }
}

impl LinkTransport for LoopbackLink {
    fn send(&mut self, channel: Channel, bytes: &[u8], max_wait: Duration) -> Result<()> {
        if let Some(limit) = self.outbox_limit {
            let queued = self.outboxes[channel.index()].len();
            if queued + bytes.len() > limit {
                warn!(%channel, queued, limit, "outbox full, dropping send");
                return Err(TransportError::WriteTimeout {
                    channel,
                    waited: max_wait,
                });
            }
        }
        self.outboxes[channel.index()].extend_from_slice(bytes);
        Ok(())
    }
}
