use std::ffi::c_void;

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomResult {
    Ok = 0,
    InvalidArgument = 1,
    TransportError = 2,
    LineError = 3,
    Internal = 99,
}

#[allow(dead_code)]
pub const ROOM_OK: RoomResult = RoomResult::Ok;
#[allow(dead_code)]
pub const ROOM_ERR_INVALID_ARGUMENT: RoomResult = RoomResult::InvalidArgument;
#[allow(dead_code)]
pub const ROOM_ERR_TRANSPORT: RoomResult = RoomResult::TransportError;
#[allow(dead_code)]
pub const ROOM_ERR_LINE: RoomResult = RoomResult::LineError;
#[allow(dead_code)]
pub const ROOM_ERR_INTERNAL: RoomResult = RoomResult::Internal;

#[allow(dead_code)]
pub const ROOM_CHANNEL_WIRELESS: u8 = 0;
#[allow(dead_code)]
pub const ROOM_CHANNEL_DEBUG: u8 = 1;

#[allow(dead_code)]
pub const ROOM_STATE_LOCKED: u8 = 0;
#[allow(dead_code)]
pub const ROOM_STATE_UNLOCKED: u8 = 1;
#[allow(dead_code)]
pub const ROOM_STATE_ACCESS_GRANTED: u8 = 2;
#[allow(dead_code)]
pub const ROOM_STATE_ACCESS_DENIED: u8 = 3;

#[allow(dead_code)]
pub const ROOM_FAN_OFF: u8 = 0;
#[allow(dead_code)]
pub const ROOM_FAN_LOW: u8 = 1;
#[allow(dead_code)]
pub const ROOM_FAN_MEDIUM: u8 = 2;
#[allow(dead_code)]
pub const ROOM_FAN_HIGH: u8 = 3;

pub type RoomConsoleHandle = *mut c_void;

/// Callback table wiring a console to the host application.
///
/// `user_data` is passed back verbatim as the first argument of every
/// callback. All six function pointers must be non-null;
/// `room_console_new` rejects tables with missing entries.
///
/// `send` delivers one complete reply for `channel` and returns `0` on
/// success or a device-specific non-zero status on failure.
/// `max_wait_ms` is the longest the callback may block.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct RoomCallbacks {
    pub user_data: *mut c_void,
    pub temperature: Option<extern "C" fn(user_data: *mut c_void) -> f32>,
    pub state: Option<extern "C" fn(user_data: *mut c_void) -> u8>,
    pub fan_level: Option<extern "C" fn(user_data: *mut c_void) -> u8>,
    pub change_password:
        Option<extern "C" fn(user_data: *mut c_void, passcode: *const u8, len: usize)>,
    pub force_fan_level: Option<extern "C" fn(user_data: *mut c_void, level: u8)>,
    pub send: Option<
        extern "C" fn(
            user_data: *mut c_void,
            channel: u8,
            bytes: *const u8,
            len: usize,
            max_wait_ms: u32,
        ) -> i32,
    >,
}
