//! roomlink-ffi: C-ABI exports for the roomlink console.

mod console;
mod error;
mod types;

use std::panic::AssertUnwindSafe;

pub use console::{
    room_console_free, room_console_new, room_console_on_byte, room_console_on_bytes,
};
pub use types::{
    RoomCallbacks, RoomConsoleHandle, RoomResult, ROOM_CHANNEL_DEBUG, ROOM_CHANNEL_WIRELESS,
    ROOM_ERR_INTERNAL, ROOM_ERR_INVALID_ARGUMENT, ROOM_ERR_LINE, ROOM_ERR_TRANSPORT,
    ROOM_FAN_HIGH, ROOM_FAN_LOW, ROOM_FAN_MEDIUM, ROOM_FAN_OFF, ROOM_OK,
    ROOM_STATE_ACCESS_DENIED, ROOM_STATE_ACCESS_GRANTED, ROOM_STATE_LOCKED, ROOM_STATE_UNLOCKED,
};

fn ffi_boundary<T>(on_panic: T, f: impl FnOnce() -> T) -> T {
    match std::panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => value,
        Err(_) => {
            error::set_panic_error();
            on_panic
        }
    }
}

#[no_mangle]
pub extern "C" fn room_link_init() -> RoomResult {
    ffi_boundary(RoomResult::Internal, || {
        error::clear_error_state();
        RoomResult::Ok
    })
}

#[no_mangle]
pub extern "C" fn room_link_cleanup() {
    ffi_boundary((), || {
        error::clear_error_state();
    });
}

#[no_mangle]
pub extern "C" fn room_link_last_error() -> *const std::os::raw::c_char {
    ffi_boundary(std::ptr::null(), error::last_error_ptr)
}
