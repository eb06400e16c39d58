use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{LineError, Result};

/// Carriage return, one of the two accepted line terminators.
pub const CR: u8 = 0x0D;

/// Line feed, the other accepted line terminator.
pub const LF: u8 = 0x0A;

/// Terminator appended to every outgoing reply line.
pub const REPLY_TERMINATOR: &[u8] = b"\r\n";

/// Size of the per-channel assembly buffer.
pub const COMMAND_BUFFER_SIZE: usize = 64;

/// Longest line content the assembler keeps. Bytes past this are dropped
/// and the eventual line is marked truncated.
pub const MAX_LINE_LEN: usize = COMMAND_BUFFER_SIZE - 1;

/// One assembled input line, without its terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Line content.
    pub payload: Bytes,
    /// True if input bytes were dropped because the line outgrew the buffer.
    pub truncated: bool,
}

impl Line {
    /// Create a complete (non-truncated) line.
    pub fn new(payload: impl Into<Bytes>) -> Self {
        Self {
            payload: payload.into(),
            truncated: false,
        }
    }

    /// Content as UTF-8, if it decodes.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.payload).ok()
    }
}

/// Returns true for bytes that end a line.
pub const fn is_terminator(byte: u8) -> bool {
    byte == CR || byte == LF
}

/// Append `text` plus the reply terminator to `dst`.
///
/// Replies are single lines; text containing CR or LF would split into
/// several and is rejected instead.
pub fn encode_reply(text: &str, dst: &mut BytesMut) -> Result<()> {
    if text.bytes().any(is_terminator) {
        return Err(LineError::ReplyContainsTerminator);
    }
    dst.reserve(text.len() + REPLY_TERMINATOR.len());
    dst.put_slice(text.as_bytes());
    dst.put_slice(REPLY_TERMINATOR);
    Ok(())
}

/// Configuration for line assembly.
#[derive(Debug, Clone)]
pub struct LineConfig {
    /// Longest line content kept before truncation. Default: [`MAX_LINE_LEN`].
    pub max_line_len: usize,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            max_line_len: MAX_LINE_LEN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_reply_appends_terminator() {
        let mut buf = BytesMut::new();
        encode_reply("TEMP: 21 C", &mut buf).unwrap();
        assert_eq!(buf.as_ref(), b"TEMP: 21 C\r\n");
    }

    #[test]
    fn encode_reply_reuses_buffer() {
        let mut buf = BytesMut::new();
        encode_reply("one", &mut buf).unwrap();
        encode_reply("two", &mut buf).unwrap();
        assert_eq!(buf.as_ref(), b"one\r\ntwo\r\n");
    }

    #[test]
    fn encode_reply_rejects_embedded_terminators() {
        let mut buf = BytesMut::new();
        let err = encode_reply("two\nlines", &mut buf).unwrap_err();
        assert!(matches!(err, LineError::ReplyContainsTerminator));

        let err = encode_reply("cr\rhere", &mut buf).unwrap_err();
        assert!(matches!(err, LineError::ReplyContainsTerminator));

        assert!(buf.is_empty(), "rejected reply must not write anything");
    }

    #[test]
    fn terminator_bytes() {
        assert!(is_terminator(CR));
        assert!(is_terminator(LF));
        assert!(!is_terminator(b'A'));
        assert!(!is_terminator(0x00));
    }

    #[test]
    fn line_as_str() {
        let line = Line::new(&b"GET_TEMP"[..]);
        assert_eq!(line.as_str(), Some("GET_TEMP"));
        assert!(!line.truncated);

        let raw = Line::new(&[0xFF, 0xFE][..]);
        assert_eq!(raw.as_str(), None);
    }
}
