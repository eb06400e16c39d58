use std::time::Duration;

use tracing::{debug, warn};

use roomlink_line::{Line, LineAssembler, LineConfig, LineError, ReplyWriter, DEFAULT_REPLY_WAIT};
use roomlink_transport::{Channel, LinkTransport, CHANNEL_COUNT};

use crate::command::Command;
use crate::error::{ConsoleError, Result};
use crate::reply;
use crate::room::RoomControl;

/// Configuration for a console instance.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Maximum wait handed to the link for each reply.
    /// Default: [`DEFAULT_REPLY_WAIT`].
    pub reply_wait: Duration,
    /// Line assembly settings shared by every channel.
    pub line: LineConfig,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            reply_wait: DEFAULT_REPLY_WAIT,
            line: LineConfig::default(),
        }
    }
}

/// Line-oriented command interpreter for a room controller.
///
/// Owns one [`LineAssembler`] per channel, the room collaborator and the
/// reply path. Bytes go in through [`Console::on_byte`]; each completed
/// line is parsed, executed against the room, and answered on the channel
/// it arrived on.
///
/// Single-threaded by design: all work happens inside the `on_byte` call,
/// and the channels share nothing but the room and the link.
pub struct Console<T, R> {
    assemblers: [LineAssembler; CHANNEL_COUNT],
    writer: ReplyWriter<T>,
    room: R,
}

impl<T: LinkTransport, R: RoomControl> Console<T, R> {
    /// Create a console with default configuration.
    pub fn new(link: T, room: R) -> Self {
        Self::with_config(link, room, ConsoleConfig::default())
    }

    /// Create a console with explicit configuration.
    pub fn with_config(link: T, room: R, config: ConsoleConfig) -> Self {
        Self {
            assemblers: std::array::from_fn(|_| LineAssembler::with_config(config.line.clone())),
            writer: ReplyWriter::with_max_wait(link, config.reply_wait),
            room,
        }
    }

    /// Consume one received byte from `channel`.
    ///
    /// When the byte completes a line, the line is dispatched and the
    /// reply sent before this returns. Malformed input produces a textual
    /// reply, never an `Err`; only reply write-back failures propagate.
    pub fn on_byte(&mut self, channel: Channel, byte: u8) -> Result<()> {
        match self.assemblers[channel.index()].feed(byte) {
            Some(line) => self.dispatch(channel, line),
            None => Ok(()),
        }
    }

    /// Consume a run of received bytes from `channel`.
    ///
    /// Stops at the first reply failure; remaining bytes are not consumed.
    pub fn on_bytes(&mut self, channel: Channel, bytes: &[u8]) -> Result<()> {
        for &byte in bytes {
            self.on_byte(channel, byte)?;
        }
        Ok(())
    }

    fn dispatch(&mut self, channel: Channel, line: Line) -> Result<()> {
        if line.truncated {
            warn!(%channel, kept = line.payload.len(), "input line overflowed");
            return self.send_reply(channel, reply::LINE_TOO_LONG);
        }

        let text = match line.as_str() {
            Some(text) => text,
            None => {
                debug!(%channel, "non-UTF-8 line");
                return self.send_reply(channel, reply::UNKNOWN_COMMAND);
            }
        };

        match Command::parse(text) {
            Ok(Command::GetTemp) => {
                let text = reply::temperature(self.room.temperature());
                self.send_reply(channel, &text)
            }
            Ok(Command::GetStatus) => {
                let text = reply::status(self.room.state(), self.room.fan_level());
                self.send_reply(channel, &text)
            }
            Ok(Command::SetPass(code)) => {
                self.room.change_password(code);
                debug!(%channel, "passcode changed");
                self.send_reply(channel, reply::PASSWORD_CHANGED)
            }
            Ok(Command::ForceFan(level)) => {
                self.room.force_fan_level(level);
                debug!(%channel, %level, "fan level forced");
                self.send_reply(channel, reply::FAN_LEVEL_FORCED)
            }
            Err(err) => {
                debug!(%channel, %err, "rejected command line");
                self.send_reply(channel, reply::rejection(err))
            }
        }
    }

    fn send_reply(&mut self, channel: Channel, text: &str) -> Result<()> {
        self.writer.send(channel, text).map_err(flatten)
    }

    /// Borrow the room collaborator.
    pub fn room(&self) -> &R {
        &self.room
    }

    /// Mutably borrow the room collaborator.
    pub fn room_mut(&mut self) -> &mut R {
        &mut self.room
    }

    /// Borrow the underlying link.
    pub fn link(&self) -> &T {
        self.writer.get_ref()
    }

    /// Mutably borrow the underlying link.
    pub fn link_mut(&mut self) -> &mut T {
        self.writer.get_mut()
    }

    /// Consume the console and return the link and room.
    pub fn into_parts(self) -> (T, R) {
        (self.writer.into_inner(), self.room)
    }
}

fn flatten(err: LineError) -> ConsoleError {
    match err {
        LineError::Transport(e) => ConsoleError::Transport(e),
        other => ConsoleError::Line(other),
    }
}
