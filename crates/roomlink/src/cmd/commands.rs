use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

use roomlink::console::{FORCE_FAN_PREFIX, GET_STATUS, GET_TEMP, SET_PASS_PREFIX};

use crate::cmd::CommandsArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::OutputFormat;

#[derive(Debug, Serialize)]
struct GrammarRow {
    command: String,
    reply: &'static str,
    description: &'static str,
}

#[derive(Debug, Serialize)]
struct GrammarOutput {
    schema_id: &'static str,
    commands: Vec<GrammarRow>,
}

fn grammar() -> Vec<GrammarRow> {
    vec![
        GrammarRow {
            command: GET_TEMP.to_string(),
            reply: "TEMP: <celsius> C",
            description: "Report the room temperature rounded to the nearest degree",
        },
        GrammarRow {
            command: GET_STATUS.to_string(),
            reply: "STATUS: <state>, FAN=<level>",
            description: "Report the lock state and the forced fan level",
        },
        GrammarRow {
            command: format!("{SET_PASS_PREFIX}<code>"),
            reply: "Password changed | Invalid password format",
            description: "Replace the 4-byte room passcode",
        },
        GrammarRow {
            command: format!("{FORCE_FAN_PREFIX}<level>"),
            reply: "Fan level forced | Invalid fan level",
            description: "Force the fan to level 0 through 3",
        },
    ]
}

pub fn run(_args: CommandsArgs, format: OutputFormat) -> CliResult<i32> {
    let rows = grammar();

    match format {
        OutputFormat::Json => {
            let out = GrammarOutput {
                schema_id:
                    "https://schemas.3leaps.dev/roomlink/cli/v1/command-grammar.schema.json",
                commands: rows,
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["COMMAND", "REPLY", "NOTES"]);
            for row in &rows {
                table.add_row(vec![row.command.clone(), row.reply.to_string(), row.description.to_string()]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for row in &rows {
                println!("{:<18} {}", row.command, row.description);
            }
        }
        OutputFormat::Raw => {
            for row in &rows {
                println!("{}", row.command);
            }
        }
    }

    Ok(SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grammar_covers_every_command() {
        let rows = grammar();
        let commands: Vec<&str> = rows.iter().map(|r| r.command.as_str()).collect();
        assert_eq!(
            commands,
            vec!["GET_TEMP", "GET_STATUS", "SET_PASS:<code>", "FORCE_FAN:<level>"]
        );
    }

    #[test]
    fn grammar_serializes_for_json_output() {
        let out = GrammarOutput {
            schema_id: "x",
            commands: grammar(),
        };
        let json = serde_json::to_string(&out).expect("grammar should serialize");
        assert!(json.contains("\"command\":\"SET_PASS:<code>\""));
    }
}
