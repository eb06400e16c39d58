//! Byte-at-a-time line assembly and reply encoding.
//!
//! Input arrives from serial links one byte per interrupt. This crate
//! turns that stream into terminated lines:
//! - CR (0x0D) and LF (0x0A) each end a line; CRLF costs nothing extra
//!   because the empty LF half is ignored
//! - content is capped at [`MAX_LINE_LEN`] bytes; overflow drops bytes
//!   and marks the eventual line truncated
//! - replies go back out as `text + "\r\n"` through [`ReplyWriter`]
//!
//! No partial lines, no buffer management in user code.

pub mod assembler;
pub mod codec;
pub mod error;
pub mod writer;

pub use assembler::LineAssembler;
pub use codec::{
    encode_reply, is_terminator, Line, LineConfig, COMMAND_BUFFER_SIZE, CR, LF, MAX_LINE_LEN,
    REPLY_TERMINATOR,
};
pub use error::{LineError, Result};
pub use writer::{ReplyWriter, DEFAULT_REPLY_WAIT};
