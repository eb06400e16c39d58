/// Errors that can occur while encoding or sending reply lines.
#[derive(Debug, thiserror::Error)]
pub enum LineError {
    /// Reply text contains a CR or LF and would split into multiple lines.
    #[error("reply text contains a line terminator")]
    ReplyContainsTerminator,

    /// The link refused the encoded reply.
    #[error("link error: {0}")]
    Transport(#[from] roomlink_transport::TransportError),
}

pub type Result<T> = std::result::Result<T, LineError>;
