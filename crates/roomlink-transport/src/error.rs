use std::time::Duration;

use crate::channel::Channel;

/// Errors that can occur when handing reply bytes to a link.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The link behind the channel is closed and cannot accept bytes.
    #[error("channel {channel} is closed")]
    ChannelClosed { channel: Channel },

    /// The link did not accept the bytes within the allowed wait.
    #[error("write on channel {channel} timed out after {waited:?}")]
    WriteTimeout { channel: Channel, waited: Duration },

    /// The device driver behind the link reported a failure status.
    #[error("device error on channel {channel} (status {status})")]
    Device { channel: Channel, status: i32 },

    /// An I/O error occurred on the underlying byte stream.
    #[error("link I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TransportError>;
