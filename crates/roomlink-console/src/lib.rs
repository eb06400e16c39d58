//! Command interpretation for room access controllers.
//!
//! This is the layer that gives meaning to assembled lines. It defines
//! the command grammar (`GET_TEMP`, `GET_STATUS`, `SET_PASS:`,
//! `FORCE_FAN:`), the [`RoomControl`] contract the device side
//! implements, the exact reply text clients match on, and the
//! [`Console`] dispatcher that ties per-channel line assembly to
//! command execution and reply write-back.

pub mod command;
pub mod console;
pub mod error;
pub mod reply;
pub mod room;

pub use command::{
    Command, CommandError, FORCE_FAN_PREFIX, GET_STATUS, GET_TEMP, SET_PASS_PREFIX,
};
pub use console::{Console, ConsoleConfig};
pub use error::{ConsoleError, Result};
pub use room::{FanLevel, Passcode, RoomControl, RoomState, PASSCODE_LEN};
