//! Reply channel identifiers.
//!
//! A room controller answers on exactly two byte links: the wireless
//! module and the wired maintenance port. The numeric IDs are stable and
//! appear on the C ABI, so the numbering here must not change.

/// Number of reply channels a console manages.
pub const CHANNEL_COUNT: usize = 2;

/// Identifies the link a byte arrived on and the link its reply leaves on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// The wireless serial bridge (ESP-01 style module).
    Wireless,
    /// The wired maintenance port.
    Debug,
}

impl Channel {
    /// All channels, in ID order.
    pub const ALL: [Channel; CHANNEL_COUNT] = [Channel::Wireless, Channel::Debug];

    /// Stable numeric ID, as used on the C ABI.
    pub const fn id(self) -> u8 {
        match self {
            Channel::Wireless => 0,
            Channel::Debug => 1,
        }
    }

    /// Look up a channel by its numeric ID.
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(Channel::Wireless),
            1 => Some(Channel::Debug),
            _ => None,
        }
    }

    /// Dense index for per-channel tables.
    pub const fn index(self) -> usize {
        self.id() as usize
    }

    /// Human-readable name for diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Channel::Wireless => "wireless",
            Channel::Debug => "debug",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
