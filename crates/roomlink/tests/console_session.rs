//! End-to-end sessions through the public facade.

use roomlink::console::{Console, Passcode};
use roomlink::sim::SimulatedRoom;
use roomlink::transport::{Channel, LoopbackLink};

fn take_text(console: &mut Console<LoopbackLink, SimulatedRoom>, channel: Channel) -> String {
    String::from_utf8(console.link_mut().take(channel).to_vec()).expect("replies are ASCII")
}

#[test]
fn full_session_over_both_channels() {
    let mut console = Console::new(LoopbackLink::new(), SimulatedRoom::default());

    console.on_bytes(Channel::Debug, b"GET_STATUS\r\n").unwrap();
    assert_eq!(
        take_text(&mut console, Channel::Debug),
        "STATUS: LOCKED, FAN=0\r\n"
    );

    console.on_bytes(Channel::Wireless, b"FORCE_FAN:3\r").unwrap();
    assert_eq!(
        take_text(&mut console, Channel::Wireless),
        "Fan level forced\r\n"
    );

    // The wired side sees the fan level the wireless side forced.
    console.on_bytes(Channel::Debug, b"GET_STATUS\n").unwrap();
    assert_eq!(
        take_text(&mut console, Channel::Debug),
        "STATUS: LOCKED, FAN=3\r\n"
    );

    console.on_bytes(Channel::Debug, b"SET_PASS:8080\r").unwrap();
    assert_eq!(
        take_text(&mut console, Channel::Debug),
        "Password changed\r\n"
    );
    assert_eq!(console.room().passcode, Passcode::from_bytes(*b"8080"));
}

#[test]
fn interleaved_channels_keep_their_own_lines() {
    let mut console = Console::new(LoopbackLink::new(), SimulatedRoom::default());

    // Byte-level interleaving of two different commands.
    console.on_bytes(Channel::Wireless, b"GET_T").unwrap();
    console.on_bytes(Channel::Debug, b"FORCE_").unwrap();
    console.on_bytes(Channel::Wireless, b"EMP\r").unwrap();
    console.on_bytes(Channel::Debug, b"FAN:1\n").unwrap();

    assert_eq!(take_text(&mut console, Channel::Wireless), "TEMP: 22 C\r\n");
    assert_eq!(take_text(&mut console, Channel::Debug), "Fan level forced\r\n");
}

#[test]
fn oversized_line_is_reported_and_the_channel_recovers() {
    let mut console = Console::new(LoopbackLink::new(), SimulatedRoom::default());

    let mut noise = vec![b'z'; 200];
    noise.push(b'\n');
    console.on_bytes(Channel::Wireless, &noise).unwrap();
    assert_eq!(
        take_text(&mut console, Channel::Wireless),
        "Line too long\r\n"
    );

    console.on_bytes(Channel::Wireless, b"GET_STATUS\r").unwrap();
    assert_eq!(
        take_text(&mut console, Channel::Wireless),
        "STATUS: LOCKED, FAN=0\r\n"
    );
}
