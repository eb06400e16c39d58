//! Reply link abstraction for room console channels.
//!
//! Provides a unified interface over the byte links a room controller
//! answers on:
//! - the wireless module link (channel 0)
//! - the wired maintenance link (channel 1)
//!
//! This is the lowest layer of roomlink. Everything else builds on top of
//! the [`LinkTransport`] trait provided here.

pub mod channel;
pub mod error;
pub mod loopback;
pub mod stream;
pub mod traits;

pub use channel::{Channel, CHANNEL_COUNT};
pub use error::{Result, TransportError};
pub use loopback::LoopbackLink;
pub use stream::StreamLink;
pub use traits::LinkTransport;
