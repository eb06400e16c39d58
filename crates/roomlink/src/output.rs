use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

/// One executed command line and the reply it drew.
///
/// `reply` is stored without the trailing `\r\n`; an ignored empty input
/// line leaves it empty.
#[derive(Debug)]
pub struct ReplyRecord {
    pub channel: u8,
    pub channel_name: &'static str,
    pub command: String,
    pub reply: String,
}

#[derive(Serialize)]
struct ReplyOutput<'a> {
    schema_id: &'a str,
    channel: u8,
    channel_name: &'a str,
    command: &'a str,
    reply: &'a str,
}

pub fn print_replies(records: &[ReplyRecord], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            for record in records {
                let out = ReplyOutput {
                    schema_id: "https://schemas.3leaps.dev/roomlink/cli/v1/reply.schema.json",
                    channel: record.channel,
                    channel_name: record.channel_name,
                    command: &record.command,
                    reply: &record.reply,
                };
                println!(
                    "{}",
                    serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
                );
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["CHANNEL", "COMMAND", "REPLY"]);
            for record in records {
                table.add_row(vec![
                    record.channel_name.to_string(),
                    record.command.clone(),
                    record.reply.clone(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for record in records {
                println!(
                    "channel={} ({}) command={} reply={}",
                    record.channel, record.channel_name, record.command, record.reply
                );
            }
        }
        OutputFormat::Raw => {
            // Byte-faithful: exactly what the link would carry.
            for record in records {
                if !record.reply.is_empty() {
                    print_raw(record.reply.as_bytes());
                    print_raw(b"\r\n");
                }
            }
        }
    }
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}
