use std::time::Duration;

use bytes::BytesMut;
use tracing::trace;

use roomlink_transport::{Channel, LinkTransport};

use crate::codec::{encode_reply, COMMAND_BUFFER_SIZE};
use crate::error::Result;

/// Default wait for a link to accept a reply.
pub const DEFAULT_REPLY_WAIT: Duration = Duration::from_millis(100);

/// Formats reply lines and hands them to a link.
///
/// Keeps one reusable encode buffer so steady-state replies do not
/// allocate.
#[derive(Debug)]
pub struct ReplyWriter<T> {
    link: T,
    buf: BytesMut,
    max_wait: Duration,
}

impl<T: LinkTransport> ReplyWriter<T> {
    /// Create a writer with the default reply wait.
    pub fn new(link: T) -> Self {
        Self::with_max_wait(link, DEFAULT_REPLY_WAIT)
    }

    /// Create a writer with an explicit per-send wait.
    pub fn with_max_wait(link: T, max_wait: Duration) -> Self {
        Self {
            link,
            buf: BytesMut::with_capacity(COMMAND_BUFFER_SIZE),
            max_wait,
        }
    }

    /// Encode `text` as a terminated reply line and send it on `channel`.
    pub fn send(&mut self, channel: Channel, text: &str) -> Result<()> {
        self.buf.clear();
        encode_reply(text, &mut self.buf)?;
        self.link.send(channel, &self.buf, self.max_wait)?;
        trace!(%channel, len = self.buf.len(), "reply sent");
        Ok(())
    }

    /// Borrow the underlying link.
    pub fn get_ref(&self) -> &T {
        &self.link
    }

    /// Mutably borrow the underlying link.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.link
    }

    /// Consume the writer and return the link.
    pub fn into_inner(self) -> T {
        self.link
    }

    /// The per-send wait handed to the link.
    pub fn max_wait(&self) -> Duration {
        self.max_wait
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LineError;
    use roomlink_transport::{LoopbackLink, TransportError};

    #[test]
    fn sends_terminated_reply_on_channel() {
        let mut writer = ReplyWriter::new(LoopbackLink::new());
        writer.send(Channel::Wireless, "TEMP: 21 C").unwrap();

        let link = writer.get_mut();
        assert_eq!(link.take(Channel::Wireless).as_ref(), b"TEMP: 21 C\r\n");
        assert!(link.take(Channel::Debug).is_empty());
    }

    #[test]
    fn buffer_is_reused_between_sends() {
        let mut writer = ReplyWriter::new(LoopbackLink::new());
        writer.send(Channel::Debug, "Password changed").unwrap();
        writer.send(Channel::Debug, "Fan level forced").unwrap();

        assert_eq!(
            writer.get_mut().take(Channel::Debug).as_ref(),
            b"Password changed\r\nFan level forced\r\n"
        );
    }

    #[test]
    fn embedded_terminator_rejected_before_send() {
        let mut writer = ReplyWriter::new(LoopbackLink::new());
        let err = writer.send(Channel::Debug, "a\r\nb").unwrap_err();
        assert!(matches!(err, LineError::ReplyContainsTerminator));
        assert!(writer.get_mut().take(Channel::Debug).is_empty());
    }

    #[test]
    fn transport_failure_propagates() {
        let mut writer = ReplyWriter::new(LoopbackLink::with_outbox_limit(4));
        let err = writer.send(Channel::Wireless, "too big for cap").unwrap_err();
        assert!(matches!(
            err,
            LineError::Transport(TransportError::WriteTimeout { .. })
        ));
    }

    #[test]
    fn explicit_max_wait_is_kept() {
        let writer = ReplyWriter::with_max_wait(LoopbackLink::new(), Duration::from_secs(2));
        assert_eq!(writer.max_wait(), Duration::from_secs(2));
    }

    #[test]
    fn into_inner_returns_link() {
        let mut writer = ReplyWriter::new(LoopbackLink::new());
        writer.send(Channel::Wireless, "bye").unwrap();
        let mut link = writer.into_inner();
        assert_eq!(link.take(Channel::Wireless).as_ref(), b"bye\r\n");
    }
}
