use std::fmt;
use std::io;

use roomlink::console::ConsoleError;
use roomlink::transport::TransportError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const TRANSPORT_ERROR: i32 = 3;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const TIMEOUT: i32 = 124;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => TIMEOUT,
        io::ErrorKind::ConnectionRefused => FAILURE,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn transport_error(context: &str, err: TransportError) -> CliError {
    match err {
        TransportError::Io(source) => io_error(context, source),
        timeout @ TransportError::WriteTimeout { .. } => {
            CliError::new(TIMEOUT, format!("{context}: {timeout}"))
        }
        other => CliError::new(TRANSPORT_ERROR, format!("{context}: {other}")),
    }
}

pub fn console_error(context: &str, err: ConsoleError) -> CliError {
    match err {
        ConsoleError::Transport(err) => transport_error(context, err),
        ConsoleError::Line(err) => CliError::new(DATA_INVALID, format!("{context}: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use roomlink::transport::Channel;

    #[test]
    fn write_timeouts_map_to_exit_124() {
        let err = transport_error(
            "reply failed",
            TransportError::WriteTimeout {
                channel: Channel::Debug,
                waited: Duration::from_millis(100),
            },
        );
        assert_eq!(err.code, TIMEOUT);
        assert!(err.message.starts_with("reply failed: "));
    }

    #[test]
    fn io_errors_keep_their_context() {
        let err = io_error(
            "stdin read failed",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.code, PERMISSION_DENIED);
        assert!(err.message.contains("stdin read failed"));
    }

    #[test]
    fn line_errors_are_data_invalid() {
        let err = console_error(
            "encode failed",
            ConsoleError::Line(roomlink::line::LineError::ReplyContainsTerminator),
        );
        assert_eq!(err.code, DATA_INVALID);
    }
}
