use clap::{Args, Subcommand, ValueEnum};

use roomlink::console::RoomState;
use roomlink::transport::Channel;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod commands;
pub mod console;
pub mod exec;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run an interactive console on stdio.
    Console(ConsoleArgs),
    /// Run command lines through a console and print the replies.
    Exec(ExecArgs),
    /// Print the command grammar.
    Commands(CommandsArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Console(args) => console::run(args, format),
        Command::Exec(args) => exec::run(args, format),
        Command::Commands(args) => commands::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

/// Room state names accepted on the command line.
#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum StateArg {
    Locked,
    Unlocked,
    AccessGranted,
    AccessDenied,
}

impl StateArg {
    pub fn to_state(self) -> RoomState {
        match self {
            StateArg::Locked => RoomState::Locked,
            StateArg::Unlocked => RoomState::Unlocked,
            StateArg::AccessGranted => RoomState::AccessGranted,
            StateArg::AccessDenied => RoomState::AccessDenied,
        }
    }
}

/// Channel names accepted on the command line.
#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum ChannelArg {
    Wireless,
    Debug,
}

impl ChannelArg {
    pub fn to_channel(self) -> Channel {
        match self {
            ChannelArg::Wireless => Channel::Wireless,
            ChannelArg::Debug => Channel::Debug,
        }
    }
}

#[derive(Args, Debug)]
pub struct ConsoleArgs {
    /// Temperature reported by the simulated room, in degrees Celsius.
    #[arg(long, default_value_t = 21.5, allow_negative_numbers = true)]
    pub temperature: f32,
    /// Lock state reported by the simulated room.
    #[arg(long, value_enum, default_value_t = StateArg::Locked)]
    pub state: StateArg,
    /// Initial fan level of the simulated room (0-3).
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=3))]
    pub fan: u8,
    /// Maximum wait per reply write (e.g. 100ms, 2s).
    #[arg(long, default_value = "100ms")]
    pub reply_wait: String,
}

#[derive(Args, Debug)]
pub struct ExecArgs {
    /// Command lines to execute, in order.
    #[arg(required = true)]
    pub lines: Vec<String>,
    /// Channel the lines arrive on.
    #[arg(long, value_enum, default_value_t = ChannelArg::Debug)]
    pub channel: ChannelArg,
    /// Temperature reported by the simulated room, in degrees Celsius.
    #[arg(long, default_value_t = 21.5, allow_negative_numbers = true)]
    pub temperature: f32,
    /// Lock state reported by the simulated room.
    #[arg(long, value_enum, default_value_t = StateArg::Locked)]
    pub state: StateArg,
    /// Initial fan level of the simulated room (0-3).
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=3))]
    pub fan: u8,
}

#[derive(Args, Debug, Default)]
pub struct CommandsArgs {}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
