use std::fmt;

/// Passcode length in bytes.
pub const PASSCODE_LEN: usize = 4;

/// Lock state of the room, as reported by the controller.
///
/// The numeric IDs are stable and appear on the C ABI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomState {
    /// Door locked, waiting for a passcode.
    Locked,
    /// Door released after a successful passcode entry.
    Unlocked,
    /// Occupant inside with access granted.
    AccessGranted,
    /// Last passcode attempt was rejected.
    AccessDenied,
}

impl RoomState {
    /// Name used in `GET_STATUS` replies.
    pub const fn label(self) -> &'static str {
        match self {
            RoomState::Locked => "LOCKED",
            RoomState::Unlocked => "UNLOCKED",
            RoomState::AccessGranted => "ACCESS_GRANTED",
            RoomState::AccessDenied => "ACCESS_DENIED",
        }
    }

    /// Stable numeric ID, as used on the C ABI.
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Look up a state by its numeric ID.
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(RoomState::Locked),
            1 => Some(RoomState::Unlocked),
            2 => Some(RoomState::AccessGranted),
            3 => Some(RoomState::AccessDenied),
            _ => None,
        }
    }
}

impl fmt::Display for RoomState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Forced ventilation level, `0` (off) through `3` (high).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FanLevel {
    Off,
    Low,
    Medium,
    High,
}

impl FanLevel {
    /// Parse from an ASCII digit `'0'..='3'`.
    pub const fn from_ascii_digit(byte: u8) -> Option<Self> {
        match byte {
            b'0' => Some(FanLevel::Off),
            b'1' => Some(FanLevel::Low),
            b'2' => Some(FanLevel::Medium),
            b'3' => Some(FanLevel::High),
            _ => None,
        }
    }

    /// Look up a level by its numeric value `0..=3`.
    pub const fn from_u8(level: u8) -> Option<Self> {
        match level {
            0 => Some(FanLevel::Off),
            1 => Some(FanLevel::Low),
            2 => Some(FanLevel::Medium),
            3 => Some(FanLevel::High),
            _ => None,
        }
    }

    /// Numeric level `0..=3`, as printed in `GET_STATUS` replies.
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for FanLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// Fixed-length room passcode.
///
/// Construction validates the length, so a `Passcode` in hand is always
/// well-formed. Debug output redacts the digits to keep codes out of
/// logs, the same treatment credentials get elsewhere in this workspace.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Passcode([u8; PASSCODE_LEN]);

impl Passcode {
    /// Accepts exactly [`PASSCODE_LEN`] bytes of text.
    pub fn new(text: &str) -> Option<Self> {
        let bytes = text.as_bytes();
        if bytes.len() != PASSCODE_LEN {
            return None;
        }
        let mut code = [0u8; PASSCODE_LEN];
        code.copy_from_slice(bytes);
        Some(Self(code))
    }

    /// Build from raw bytes.
    pub const fn from_bytes(bytes: [u8; PASSCODE_LEN]) -> Self {
        Self(bytes)
    }

    /// The raw passcode bytes.
    pub const fn as_bytes(&self) -> &[u8; PASSCODE_LEN] {
        &self.0
    }
}

impl fmt::Debug for Passcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Passcode(<redacted:{PASSCODE_LEN} bytes>)")
    }
}

/// Interface the console uses to read and drive the room controller.
///
/// The console owns no room state of its own; every query and mutation
/// goes through this trait. Implementations are the real controller on
/// the device, the simulator, or a callback shim over the C ABI.
/// Mutations always succeed — argument validation happens before the
/// call, and the typed arguments make an invalid call unrepresentable.
pub trait RoomControl {
    /// Current room temperature in degrees Celsius.
    fn temperature(&self) -> f32;

    /// Current lock state.
    fn state(&self) -> RoomState;

    /// Current forced ventilation level.
    fn fan_level(&self) -> FanLevel;

    /// Replace the stored passcode.
    fn change_password(&mut self, passcode: Passcode);

    /// Force the ventilation to `level`.
    fn force_fan_level(&mut self, level: FanLevel);
}
