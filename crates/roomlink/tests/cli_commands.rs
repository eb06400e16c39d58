#![cfg(feature = "cli")]

use std::io::Write;
use std::process::{Command, Stdio};

fn roomlink() -> Command {
    Command::new(env!("CARGO_BIN_EXE_roomlink"))
}

#[test]
fn exec_prints_raw_replies_in_order() {
    let output = roomlink()
        .args([
            "--log-level",
            "error",
            "--format",
            "raw",
            "exec",
            "GET_TEMP",
            "GET_STATUS",
        ])
        .output()
        .expect("exec should run");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "TEMP: 22 C\r\nSTATUS: LOCKED, FAN=0\r\n"
    );
}

#[test]
fn exec_honors_room_seeds() {
    let output = roomlink()
        .args([
            "--log-level",
            "error",
            "--format",
            "raw",
            "exec",
            "--temperature",
            "-3.5",
            "--state",
            "access-granted",
            "--fan",
            "3",
            "GET_TEMP",
            "GET_STATUS",
        ])
        .output()
        .expect("exec should run");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "TEMP: -4 C\r\nSTATUS: ACCESS_GRANTED, FAN=3\r\n"
    );
}

#[test]
fn exec_emits_one_json_record_per_line() {
    let output = roomlink()
        .args([
            "--log-level",
            "error",
            "--format",
            "json",
            "exec",
            "SET_PASS:12",
        ])
        .output()
        .expect("exec should run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let record: serde_json::Value =
        serde_json::from_str(stdout.trim()).expect("exec should emit json");
    assert_eq!(record["command"], "SET_PASS:12");
    assert_eq!(record["reply"], "Invalid password format");
    assert_eq!(record["channel_name"], "debug");
    assert!(record["schema_id"]
        .as_str()
        .map(|s| s.contains("reply.schema.json"))
        .unwrap_or(false));
}

#[test]
fn console_answers_on_stdout_until_eof() {
    let mut child = roomlink()
        .args(["--log-level", "error", "console"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("console should start");

    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(b"GET_TEMP\nNOPE\n")
        .expect("commands should be writable");
    // Dropping the pipe is EOF; the session ends cleanly.

    let output = child.wait_with_output().expect("console should exit");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "TEMP: 22 C\r\nUnknown command\r\n"
    );
}

#[test]
fn version_prints_package_version() {
    let output = roomlink()
        .args(["version"])
        .output()
        .expect("version should run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn commands_raw_lists_the_grammar() {
    let output = roomlink()
        .args(["--format", "raw", "commands"])
        .output()
        .expect("commands should run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("GET_TEMP"));
    assert!(stdout.contains("SET_PASS:"));
}

#[test]
fn out_of_range_fan_seed_is_a_usage_error() {
    let output = roomlink()
        .args(["exec", "--fan", "9", "GET_STATUS"])
        .output()
        .expect("exec should run");

    assert_eq!(output.status.code(), Some(2));
}
