mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "roomlink", version, about = "Room controller console CLI")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(long, value_name = "LEVEL", default_value = "info", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let result = cmd::run(cli.command, format);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_exec_subcommand() {
        let cli = Cli::try_parse_from([
            "roomlink",
            "exec",
            "GET_TEMP",
            "--channel",
            "wireless",
            "--temperature",
            "19.5",
        ])
        .expect("exec args should parse");

        assert!(matches!(cli.command, Command::Exec(_)));
    }

    #[test]
    fn rejects_out_of_range_fan_seed() {
        let err = Cli::try_parse_from(["roomlink", "exec", "GET_STATUS", "--fan", "4"])
            .expect_err("fan 4 should fail validation");

        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn parses_console_subcommand() {
        let cli = Cli::try_parse_from([
            "roomlink",
            "console",
            "--state",
            "unlocked",
            "--reply-wait",
            "2s",
        ])
        .expect("console args should parse");

        assert!(matches!(cli.command, Command::Console(_)));
    }

    #[test]
    fn exec_requires_at_least_one_line() {
        let err = Cli::try_parse_from(["roomlink", "exec"])
            .expect_err("exec without lines should fail");

        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }
}
