use std::ffi::c_void;
use std::time::Duration;

use tracing::warn;

use roomlink_console::{Console, ConsoleConfig, FanLevel, Passcode, RoomControl, RoomState};
use roomlink_transport::{Channel, LinkTransport, TransportError};

use crate::error;
use crate::types::{RoomCallbacks, RoomConsoleHandle, RoomResult};

type TemperatureFn = extern "C" fn(user_data: *mut c_void) -> f32;
type StateFn = extern "C" fn(user_data: *mut c_void) -> u8;
type FanLevelFn = extern "C" fn(user_data: *mut c_void) -> u8;
type ChangePasswordFn = extern "C" fn(user_data: *mut c_void, passcode: *const u8, len: usize);
type ForceFanLevelFn = extern "C" fn(user_data: *mut c_void, level: u8);
type SendFn = extern "C" fn(
    user_data: *mut c_void,
    channel: u8,
    bytes: *const u8,
    len: usize,
    max_wait_ms: u32,
) -> i32;

/// Room-control shim over the host's callback table.
///
/// Function pointers are unwrapped once at construction, so calls on the
/// hot path never re-check for null.
struct CallbackRoom {
    user_data: *mut c_void,
    temperature: TemperatureFn,
    state: StateFn,
    fan_level: FanLevelFn,
    change_password: ChangePasswordFn,
    force_fan_level: ForceFanLevelFn,
}

impl RoomControl for CallbackRoom {
    fn temperature(&self) -> f32 {
        (self.temperature)(self.user_data)
    }

    fn state(&self) -> RoomState {
        let id = (self.state)(self.user_data);
        match RoomState::from_id(id) {
            Some(state) => state,
            None => {
                warn!(id, "state callback returned an unknown id, reporting locked");
                RoomState::Locked
            }
        }
    }

    fn fan_level(&self) -> FanLevel {
        let id = (self.fan_level)(self.user_data);
        match FanLevel::from_u8(id) {
            Some(level) => level,
            None => {
                warn!(id, "fan level callback returned an unknown id, reporting off");
                FanLevel::Off
            }
        }
    }

    fn change_password(&mut self, passcode: Passcode) {
        let bytes = passcode.as_bytes();
        (self.change_password)(self.user_data, bytes.as_ptr(), bytes.len());
    }

    fn force_fan_level(&mut self, level: FanLevel) {
        (self.force_fan_level)(self.user_data, level.as_u8());
    }
}

/// Transport shim that hands replies to the host's `send` callback.
struct CallbackLink {
    user_data: *mut c_void,
    send: SendFn,
}

impl LinkTransport for CallbackLink {
    fn send(
        &mut self,
        channel: Channel,
        bytes: &[u8],
        max_wait: Duration,
    ) -> roomlink_transport::Result<()> {
        let max_wait_ms = u32::try_from(max_wait.as_millis()).unwrap_or(u32::MAX);
        let status = (self.send)(
            self.user_data,
            channel.id(),
            bytes.as_ptr(),
            bytes.len(),
            max_wait_ms,
        );
        if status == 0 {
            Ok(())
        } else {
            Err(TransportError::Device { channel, status })
        }
    }
}

pub(crate) struct ConsoleHandle {
    console: Console<CallbackLink, CallbackRoom>,
}

fn split_callbacks(table: &RoomCallbacks) -> Option<(CallbackLink, CallbackRoom)> {
    macro_rules! required {
        ($field:ident) => {
            match table.$field {
                Some(f) => f,
                None => {
                    let _ = error::set_invalid_argument(concat!(
                        "callbacks.",
                        stringify!($field),
                        " cannot be null"
                    ));
                    return None;
                }
            }
        };
    }

    let link = CallbackLink {
        user_data: table.user_data,
        send: required!(send),
    };
    let room = CallbackRoom {
        user_data: table.user_data,
        temperature: required!(temperature),
        state: required!(state),
        fan_level: required!(fan_level),
        change_password: required!(change_password),
        force_fan_level: required!(force_fan_level),
    };
    Some((link, room))
}

fn with_console_mut<T>(
    handle: RoomConsoleHandle,
    on_error: T,
    f: impl FnOnce(&mut ConsoleHandle) -> T,
) -> T {
    if handle.is_null() {
        let _ = error::set_invalid_argument("console handle cannot be null");
        return on_error;
    }

    let console_handle = {
        // SAFETY: Pointer validity is guaranteed by the caller.
        unsafe { &mut *(handle as *mut ConsoleHandle) }
    };

    f(console_handle)
}

fn channel_arg(id: u8) -> Option<Channel> {
    match Channel::from_id(id) {
        Some(channel) => Some(channel),
        None => {
            let _ = error::set_invalid_argument(format!("channel {id} is out of range"));
            None
        }
    }
}

/// Convert an optional byte pointer + length into a slice.
///
/// # Safety
/// If `len > 0`, `data` must be non-null and readable for `len` bytes.
unsafe fn bytes_arg<'a>(data: *const u8, len: usize, name: &str) -> Option<&'a [u8]> {
    if len == 0 {
        return Some(&[]);
    }
    if data.is_null() {
        let _ = error::set_invalid_argument(format!("{name} cannot be null when len > 0"));
        return None;
    }

    // SAFETY: Pointer and length are validated above and owned by caller for the call duration.
    Some(unsafe { std::slice::from_raw_parts(data, len) })
}

/// Create a console driven by the given callback table.
///
/// Returns null if the table or any of its function pointers is null;
/// `room_link_last_error` then describes the missing entry. `reply_wait_ms`
/// is forwarded to the `send` callback as its blocking bound.
///
/// # Safety
/// `callbacks` must be null or point to a readable `RoomCallbacks` value.
/// The table is copied; it does not need to outlive this call. Whatever
/// `user_data` points to must stay valid until `room_console_free`.
#[no_mangle]
pub unsafe extern "C" fn room_console_new(
    callbacks: *const RoomCallbacks,
    reply_wait_ms: u32,
) -> RoomConsoleHandle {
    crate::ffi_boundary(std::ptr::null_mut(), || {
        error::clear_error_state();

        let table = {
            if callbacks.is_null() {
                let _ = error::set_invalid_argument("callbacks cannot be null");
                return std::ptr::null_mut();
            }
            // SAFETY: Checked for null above; readability is the caller's obligation.
            unsafe { &*callbacks }
        };

        let (link, room) = match split_callbacks(table) {
            Some(parts) => parts,
            None => return std::ptr::null_mut(),
        };

        let config = ConsoleConfig {
            reply_wait: Duration::from_millis(u64::from(reply_wait_ms)),
            ..ConsoleConfig::default()
        };
        let handle = ConsoleHandle {
            console: Console::with_config(link, room, config),
        };
        Box::into_raw(Box::new(handle)) as RoomConsoleHandle
    })
}

/// Feed one received byte from `channel` into the console.
///
/// Completing a line dispatches the command and delivers the reply through
/// the `send` callback before this returns.
///
/// # Safety
/// `handle` must be a valid handle returned by `room_console_new`.
#[no_mangle]
pub unsafe extern "C" fn room_console_on_byte(
    handle: RoomConsoleHandle,
    channel: u8,
    byte: u8,
) -> RoomResult {
    crate::ffi_boundary(RoomResult::Internal, || {
        error::clear_error_state();

        let channel = match channel_arg(channel) {
            Some(v) => v,
            None => return RoomResult::InvalidArgument,
        };

        with_console_mut(handle, RoomResult::InvalidArgument, |console_handle| {
            match console_handle.console.on_byte(channel, byte) {
                Ok(()) => RoomResult::Ok,
                Err(err) => error::map_console_error(&err),
            }
        })
    })
}

/// Feed a run of received bytes from `channel` into the console.
///
/// Stops at the first reply failure; remaining bytes are not consumed.
///
/// # Safety
/// `handle` must be a valid handle returned by `room_console_new`. If
/// `len > 0`, `data` must be non-null and readable for `len` bytes.
#[no_mangle]
pub unsafe extern "C" fn room_console_on_bytes(
    handle: RoomConsoleHandle,
    channel: u8,
    data: *const u8,
    len: usize,
) -> RoomResult {
    crate::ffi_boundary(RoomResult::Internal, || {
        error::clear_error_state();

        let channel = match channel_arg(channel) {
            Some(v) => v,
            None => return RoomResult::InvalidArgument,
        };

        let bytes = {
            // SAFETY: We validate pointer/length pairing in helper.
            match unsafe { bytes_arg(data, len, "data") } {
                Some(v) => v,
                None => return RoomResult::InvalidArgument,
            }
        };

        with_console_mut(handle, RoomResult::InvalidArgument, |console_handle| {
            match console_handle.console.on_bytes(channel, bytes) {
                Ok(()) => RoomResult::Ok,
                Err(err) => error::map_console_error(&err),
            }
        })
    })
}

/// Free a console handle.
///
/// # Safety
/// `handle` must be null or a handle previously returned by
/// `room_console_new`, and must not be used afterwards.
#[no_mangle]
pub unsafe extern "C" fn room_console_free(handle: RoomConsoleHandle) {
    crate::ffi_boundary((), || {
        if handle.is_null() {
            return;
        }

        // SAFETY: Caller guarantees this handle was allocated by room_console_new.
        unsafe {
            drop(Box::from_raw(handle as *mut ConsoleHandle));
        }
    });
}
