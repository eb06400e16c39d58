use tracing::debug;

use roomlink::console::{Console, FanLevel};
use roomlink::sim::SimulatedRoom;
use roomlink::transport::{Channel, LoopbackLink};

use crate::cmd::ExecArgs;
use crate::exit::{console_error, CliError, CliResult, SUCCESS, USAGE};
use crate::output::{print_replies, OutputFormat, ReplyRecord};

pub fn run(args: ExecArgs, format: OutputFormat) -> CliResult<i32> {
    let fan = FanLevel::from_u8(args.fan)
        .ok_or_else(|| CliError::new(USAGE, format!("fan level {} is out of range", args.fan)))?;
    let room = SimulatedRoom {
        temperature: args.temperature,
        state: args.state.to_state(),
        fan,
        ..SimulatedRoom::default()
    };

    let mut console = Console::new(LoopbackLink::new(), room);
    let channel = args.channel.to_channel();

    debug!(lines = args.lines.len(), %channel, "executing command lines");
    let records = execute_lines(&mut console, channel, &args.lines)?;
    print_replies(&records, format);

    Ok(SUCCESS)
}

/// Feed each line (with a terminator appended) and collect its reply.
fn execute_lines(
    console: &mut Console<LoopbackLink, SimulatedRoom>,
    channel: Channel,
    lines: &[String],
) -> CliResult<Vec<ReplyRecord>> {
    let mut records = Vec::with_capacity(lines.len());
    for line in lines {
        console
            .on_bytes(channel, line.as_bytes())
            .and_then(|()| console.on_byte(channel, b'\r'))
            .map_err(|err| console_error("exec failed", err))?;

        let reply_bytes = console.link_mut().take(channel);
        let reply = String::from_utf8_lossy(reply_bytes.as_ref())
            .trim_end_matches("\r\n")
            .to_string();

        records.push(ReplyRecord {
            channel: channel.id(),
            channel_name: channel.name(),
            command: line.clone(),
            reply,
        });
    }
    Ok(records)
}
