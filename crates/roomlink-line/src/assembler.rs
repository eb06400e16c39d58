use bytes::{BufMut, BytesMut};

use crate::codec::{is_terminator, Line, LineConfig};

/// Assembles a byte stream into terminated lines.
///
/// Feed bytes one at a time as they arrive; a [`Line`] comes back exactly
/// when a terminator completes non-empty content. Bare terminators (and
/// the LF half of CRLF) produce nothing. Content beyond the configured
/// maximum is dropped and the eventual line is marked truncated; what was
/// kept is exactly the first `max_line_len` bytes.
#[derive(Debug)]
pub struct LineAssembler {
    buf: BytesMut,
    overflowed: bool,
    config: LineConfig,
}

impl LineAssembler {
    /// Create an assembler with default configuration.
    pub fn new() -> Self {
        Self::with_config(LineConfig::default())
    }

    /// Create an assembler with explicit configuration.
    pub fn with_config(config: LineConfig) -> Self {
        Self {
            buf: BytesMut::with_capacity(config.max_line_len),
            overflowed: false,
            config,
        }
    }

    /// Consume one input byte.
    ///
    /// Returns a complete line when `byte` terminates non-empty content.
    pub fn feed(&mut self, byte: u8) -> Option<Line> {
        if is_terminator(byte) {
            let truncated = self.overflowed;
            self.overflowed = false;
            if self.buf.is_empty() {
                return None;
            }
            return Some(Line {
                payload: self.buf.split().freeze(),
                truncated,
            });
        }

        if self.buf.len() < self.config.max_line_len {
            self.buf.put_u8(byte);
        } else {
            self.overflowed = true;
        }
        None
    }

    /// Feed a run of bytes and collect every line they complete.
    pub fn feed_slice(&mut self, bytes: &[u8]) -> Vec<Line> {
        bytes.iter().filter_map(|&b| self.feed(b)).collect()
    }

    /// Bytes accumulated for the line currently being assembled.
    pub fn pending(&self) -> &[u8] {
        &self.buf
    }

    /// Discard any partially assembled line.
    pub fn reset(&mut self) {
        self.buf.clear();
        self.overflowed = false;
    }

    /// Current assembler configuration.
    pub fn config(&self) -> &LineConfig {
        &self.config
    }
}

impl Default for LineAssembler {
    fn default() -> Self {
        Self::new()
    }
}
