//! Minimal wired console — stdin feeds the debug channel, replies land
//! on stdout.
//!
//! Run with:
//!   cargo run --example wired-console
//!
//! Then type commands, one per line:
//!   GET_TEMP
//!   GET_STATUS
//!   SET_PASS:4321
//!   FORCE_FAN:2

use std::io::Read;

use roomlink::console::Console;
use roomlink::sim::SimulatedRoom;
use roomlink::transport::{Channel, StreamLink};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut console = Console::new(StreamLink::stdout(), SimulatedRoom::new());
    eprintln!("wired console ready, Ctrl-D ends the session");

    let mut stdin = std::io::stdin();
    let mut buf = [0u8; 64];
    loop {
        let read = stdin.read(&mut buf)?;
        if read == 0 {
            break;
        }
        console.on_bytes(Channel::Debug, &buf[..read])?;
    }

    eprintln!("session ended: {:?}", console.room());
    Ok(())
}
