//! Reply text for every console outcome.
//!
//! The wire contract is exact: these strings, plus the terminator added
//! by the line layer, are what clients match on.

use crate::command::CommandError;
use crate::room::{FanLevel, RoomState};

/// Reply to `SET_PASS:` with a well-formed code.
pub const PASSWORD_CHANGED: &str = "Password changed";

/// Reply to `SET_PASS:` with a malformed code.
pub const INVALID_PASSWORD_FORMAT: &str = "Invalid password format";

/// Reply to `FORCE_FAN:` with a digit `0`-`3`.
pub const FAN_LEVEL_FORCED: &str = "Fan level forced";

/// Reply to `FORCE_FAN:` with anything else.
pub const INVALID_FAN_LEVEL: &str = "Invalid fan level";

/// Reply to a line that matches no command.
pub const UNKNOWN_COMMAND: &str = "Unknown command";

/// Reply to a line that overflowed the input buffer.
pub const LINE_TOO_LONG: &str = "Line too long";

/// Format a `GET_TEMP` reply.
///
/// The reading is rounded to the nearest whole degree, half away from
/// zero, so -3.5 reports as -4 rather than the -3 a truncating cast
/// would give.
pub fn temperature(celsius: f32) -> String {
    format!("TEMP: {} C", celsius.round() as i32)
}

/// Format a `GET_STATUS` reply.
pub fn status(state: RoomState, fan: FanLevel) -> String {
    format!("STATUS: {}, FAN={}", state.label(), fan.as_u8())
}

/// The fixed reply for a line that failed to parse.
pub const fn rejection(error: CommandError) -> &'static str {
    match error {
        CommandError::Unknown => UNKNOWN_COMMAND,
        CommandError::InvalidPasscode => INVALID_PASSWORD_FORMAT,
        CommandError::InvalidFanLevel => INVALID_FAN_LEVEL,
    }
}
