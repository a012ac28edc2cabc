//! Outgoing command: shuttles leaving a terminal

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use shuttle_core::error::Result;
use shuttle_core::Airport;

use super::helpers::{resolve_terminal, terminal_name, uses_label};

#[derive(Debug, Serialize)]
struct OutgoingEntry {
    to: String,
    time: u32,
    remaining_uses: Option<u32>,
}

/// Execute the outgoing command
pub fn execute(cli: &Cli, airport: &Airport, terminal: &str) -> Result<()> {
    let id = resolve_terminal(airport, terminal)?;
    let entries: Vec<OutgoingEntry> = airport
        .outgoing_shuttles(id)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|shuttle_id| airport.shuttle(shuttle_id))
        .map(|shuttle| OutgoingEntry {
            to: terminal_name(airport, shuttle.destination()),
            time: shuttle.travel_time(),
            remaining_uses: shuttle.remaining_uses(),
        })
        .collect();

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "terminal": terminal,
                "shuttles": entries,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if entries.is_empty() {
                if !cli.quiet {
                    println!("No shuttles leave {}", terminal);
                }
            } else {
                for entry in &entries {
                    println!(
                        "{} -> {}  {} min  [{}]",
                        terminal,
                        entry.to,
                        entry.time,
                        uses_label(entry.remaining_uses)
                    );
                }
            }
        }
    }

    Ok(())
}
