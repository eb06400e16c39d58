//! In-memory room controller.

use roomlink_console::{FanLevel, Passcode, RoomControl, RoomState};

/// A room that lives entirely in memory.
///
/// Backs the CLI and the examples, and is handy anywhere a real
/// controller is not: seed the fields, wire it into a
/// [`Console`](roomlink_console::Console), and inspect them afterwards.
#[derive(Debug, Clone)]
pub struct SimulatedRoom {
    /// Temperature reported to `GET_TEMP`, in degrees Celsius.
    pub temperature: f32,
    /// Lock state reported to `GET_STATUS`.
    pub state: RoomState,
    /// Fan level reported to `GET_STATUS`, updated by `FORCE_FAN:`.
    pub fan: FanLevel,
    /// Current passcode, replaced by `SET_PASS:`.
    pub passcode: Passcode,
}

impl Default for SimulatedRoom {
    fn default() -> Self {
        Self {
            temperature: 21.5,
            state: RoomState::Locked,
            fan: FanLevel::Off,
            passcode: Passcode::from_bytes(*b"0000"),
        }
    }
}

impl SimulatedRoom {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RoomControl for SimulatedRoom {
    fn temperature(&self) -> f32 {
        self.temperature
    }

    fn state(&self) -> RoomState {
        self.state
    }

    fn fan_level(&self) -> FanLevel {
        self.fan
    }

    fn change_password(&mut self, passcode: Passcode) {
        self.passcode = passcode;
    }

    fn force_fan_level(&mut self, level: FanLevel) {
        self.fan = level;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a_fresh_controller() {
        let room = SimulatedRoom::new();
        assert_eq!(room.temperature, 21.5);
        assert_eq!(room.state, RoomState::Locked);
        assert_eq!(room.fan, FanLevel::Off);
        assert_eq!(room.passcode, Passcode::from_bytes(*b"0000"));
    }

    #[test]
    fn change_password_replaces_the_stored_code() {
        let mut room = SimulatedRoom::new();
        room.change_password(Passcode::from_bytes(*b"4321"));
        assert_eq!(room.passcode, Passcode::from_bytes(*b"4321"));
    }

    #[test]
    fn force_fan_level_updates_what_status_reports() {
        let mut room = SimulatedRoom::new();
        room.force_fan_level(FanLevel::High);
        assert_eq!(room.fan_level(), FanLevel::High);
    }
}
