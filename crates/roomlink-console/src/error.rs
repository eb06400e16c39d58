/// Errors that can escape the dispatcher.
///
/// Malformed input never lands here; it produces a textual reply on the
/// originating channel instead. Only reply write-back failures propagate.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// Reply encoding failed.
    #[error("line error: {0}")]
    Line(#[from] roomlink_line::LineError),

    /// The link refused the reply bytes.
    #[error("transport error: {0}")]
    Transport(#[from] roomlink_transport::TransportError),
}

pub type Result<T> = std::result::Result<T, ConsoleError>;
