//! Serial line console for room access controllers.
//!
//! roomlink turns raw bytes arriving on a controller's serial links into
//! commands against a room and textual replies back to the link the
//! command came from.
//!
//! # Crate Structure
//!
//! - [`transport`] — Reply channels and the link write abstraction
//! - [`line`] — Line assembly from raw bytes and reply encoding
//! - [`console`] — Command grammar, dispatch and reply text
//! - [`sim`] — In-memory room implementation for demos and tests

/// Re-export transport types.
pub mod transport {
    pub use roomlink_transport::*;
}

/// Re-export line assembly types.
pub mod line {
    pub use roomlink_line::*;
}

/// Re-export console types.
pub mod console {
    pub use roomlink_console::*;
}

pub mod sim;
