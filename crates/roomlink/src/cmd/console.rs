use std::io::Read;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use roomlink::console::{Console, ConsoleConfig, FanLevel};
use roomlink::sim::SimulatedRoom;
use roomlink::transport::{Channel, StreamLink};

use crate::cmd::ConsoleArgs;
use crate::exit::{console_error, io_error, CliError, CliResult, INTERNAL, SUCCESS, USAGE};
use crate::output::OutputFormat;

/// Interactive session: stdin bytes feed the debug channel, replies go
/// to stdout. Ends on EOF or Ctrl-C.
pub fn run(args: ConsoleArgs, _format: OutputFormat) -> CliResult<i32> {
    let reply_wait = parse_duration(&args.reply_wait)?;
    let fan = FanLevel::from_u8(args.fan)
        .ok_or_else(|| CliError::new(USAGE, format!("fan level {} is out of range", args.fan)))?;
    let room = SimulatedRoom {
        temperature: args.temperature,
        state: args.state.to_state(),
        fan,
        ..SimulatedRoom::default()
    };

    let config = ConsoleConfig {
        reply_wait,
        ..ConsoleConfig::default()
    };
    let mut console = Console::with_config(StreamLink::stdout(), room, config);

    let running = Arc::new(AtomicBool::new(true));
    install_ctrlc_handler(running.clone())?;

    info!(channel = %Channel::Debug, "console ready, one command per line, Ctrl-C stops");

    let mut stdin = std::io::stdin();
    let mut buf = [0u8; 256];
    while running.load(Ordering::SeqCst) {
        let read = match stdin.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(err) if err.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(io_error("stdin read failed", err)),
        };

        console
            .on_bytes(Channel::Debug, &buf[..read])
            .map_err(|err| console_error("reply failed", err))?;
    }

    info!("console stopped");
    Ok(SUCCESS)
}

fn install_ctrlc_handler(running: Arc<AtomicBool>) -> CliResult<()> {
    ctrlc::set_handler(move || {
        running.store(false, Ordering::SeqCst);
    })
    .map_err(|err| {
        CliError::new(
            INTERNAL,
            format!("signal handler setup failed: {err}"),
        )
    })
}

fn parse_duration(input: &str) -> CliResult<Duration> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CliError::new(USAGE, "duration must not be empty"));
    }

    let (number, unit) = if let Some(num) = input.strip_suffix("ms") {
        (num, "ms")
    } else if let Some(num) = input.strip_suffix('s') {
        (num, "s")
    } else {
        (input, "ms")
    };

    let value: u64 = number
        .parse()
        .map_err(|_| CliError::new(USAGE, format!("invalid duration value: {input}")))?;

    if value == 0 {
        return Err(CliError::new(USAGE, "duration must be greater than zero"));
    }

    match unit {
        "ms" => Ok(Duration::from_millis(value)),
        _ => Ok(Duration::from_secs(value)),
    }
}
