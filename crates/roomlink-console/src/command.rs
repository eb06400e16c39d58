use crate::room::{FanLevel, Passcode};

/// `GET_TEMP` command token.
pub const GET_TEMP: &str = "GET_TEMP";

/// `GET_STATUS` command token.
pub const GET_STATUS: &str = "GET_STATUS";

/// Prefix for passcode changes; the new code follows the colon.
pub const SET_PASS_PREFIX: &str = "SET_PASS:";

/// Prefix for forcing the fan; a single digit `0`-`3` follows the colon.
pub const FORCE_FAN_PREFIX: &str = "FORCE_FAN:";

/// A parsed command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Report the room temperature.
    GetTemp,
    /// Report the lock state and fan level.
    GetStatus,
    /// Store a new passcode.
    SetPass(Passcode),
    /// Force the ventilation level.
    ForceFan(FanLevel),
}

/// Why a line failed to parse as a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// The line matches no known command shape.
    #[error("unknown command")]
    Unknown,

    /// `SET_PASS:` argument is not exactly four bytes.
    #[error("invalid passcode format")]
    InvalidPasscode,

    /// `FORCE_FAN:` argument is not a single digit `0`-`3`.
    #[error("invalid fan level")]
    InvalidFanLevel,
}

impl Command {
    /// Parse one line of input.
    ///
    /// Bare commands must match their token exactly, so `GET_TEMPERATURE`
    /// is an unknown command rather than a temperature query. Argument
    /// commands validate the whole remainder after the colon, so
    /// `FORCE_FAN:21` is an invalid level rather than level 2.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        if line == GET_TEMP {
            return Ok(Command::GetTemp);
        }
        if line == GET_STATUS {
            return Ok(Command::GetStatus);
        }
        if let Some(arg) = line.strip_prefix(SET_PASS_PREFIX) {
            return match Passcode::new(arg) {
                Some(code) => Ok(Command::SetPass(code)),
                None => Err(CommandError::InvalidPasscode),
            };
        }
        if let Some(arg) = line.strip_prefix(FORCE_FAN_PREFIX) {
            return parse_fan_level(arg).map(Command::ForceFan);
        }
        Err(CommandError::Unknown)
    }
}

fn parse_fan_level(arg: &str) -> Result<FanLevel, CommandError> {
    let bytes = arg.as_bytes();
    if bytes.len() != 1 {
        return Err(CommandError::InvalidFanLevel);
    }
    FanLevel::from_ascii_digit(bytes[0]).ok_or(CommandError::InvalidFanLevel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_commands_parse() {
        assert_eq!(Command::parse("GET_TEMP"), Ok(Command::GetTemp));
        assert_eq!(Command::parse("GET_STATUS"), Ok(Command::GetStatus));
    }

    #[test]
    fn bare_commands_require_exact_token() {
        assert_eq!(
            Command::parse("GET_TEMPERATURE"),
            Err(CommandError::Unknown)
        );
        assert_eq!(Command::parse("GET_TEMP "), Err(CommandError::Unknown));
        assert_eq!(Command::parse("GET_STATUSX"), Err(CommandError::Unknown));
        assert_eq!(Command::parse("get_temp"), Err(CommandError::Unknown));
    }

    #[test]
    fn set_pass_accepts_four_byte_code() {
        let cmd = Command::parse("SET_PASS:1234").unwrap();
        assert_eq!(cmd, Command::SetPass(Passcode::from_bytes(*b"1234")));
    }

    #[test]
    fn set_pass_rejects_wrong_length() {
        assert_eq!(
            Command::parse("SET_PASS:12"),
            Err(CommandError::InvalidPasscode)
        );
        assert_eq!(
            Command::parse("SET_PASS:12345"),
            Err(CommandError::InvalidPasscode)
        );
        assert_eq!(
            Command::parse("SET_PASS:"),
            Err(CommandError::InvalidPasscode)
        );
    }

    #[test]
    fn force_fan_accepts_each_level() {
        for (digit, level) in [
            ('0', FanLevel::Off),
            ('1', FanLevel::Low),
            ('2', FanLevel::Medium),
            ('3', FanLevel::High),
        ] {
            let line = format!("FORCE_FAN:{digit}");
            assert_eq!(Command::parse(&line), Ok(Command::ForceFan(level)));
        }
    }

    #[test]
    fn force_fan_rejects_out_of_range_digit() {
        assert_eq!(
            Command::parse("FORCE_FAN:4"),
            Err(CommandError::InvalidFanLevel)
        );
        assert_eq!(
            Command::parse("FORCE_FAN:9"),
            Err(CommandError::InvalidFanLevel)
        );
    }

    #[test]
    fn force_fan_validates_whole_remainder() {
        // A trailing digit must not be read as "level 2 plus junk".
        assert_eq!(
            Command::parse("FORCE_FAN:21"),
            Err(CommandError::InvalidFanLevel)
        );
        assert_eq!(
            Command::parse("FORCE_FAN:1 "),
            Err(CommandError::InvalidFanLevel)
        );
        assert_eq!(
            Command::parse("FORCE_FAN:"),
            Err(CommandError::InvalidFanLevel)
        );
        assert_eq!(
            Command::parse("FORCE_FAN:x"),
            Err(CommandError::InvalidFanLevel)
        );
    }

    #[test]
    fn unrelated_lines_are_unknown() {
        assert_eq!(Command::parse("PING"), Err(CommandError::Unknown));
        assert_eq!(Command::parse(""), Err(CommandError::Unknown));
        assert_eq!(Command::parse("SET_PASS"), Err(CommandError::Unknown));
        assert_eq!(Command::parse("FORCE_FAN"), Err(CommandError::Unknown));
    }
}
