//! Opposite command: the other end of a shuttle

use crate::cli::{Cli, OutputFormat};
use shuttle_core::error::{Result, ShuttleError};
use shuttle_core::Airport;

use super::helpers::{resolve_terminal, terminal_name};

/// Execute the opposite command
pub fn execute(cli: &Cli, airport: &Airport, from: &str, to: &str, terminal: &str) -> Result<()> {
    let origin = resolve_terminal(airport, from)?;
    let destination = resolve_terminal(airport, to)?;
    let at = resolve_terminal(airport, terminal)?;

    let shuttle = airport
        .network()
        .shuttle_between(origin, destination)
        .ok_or_else(|| ShuttleError::ShuttleNotFound {
            from: from.to_string(),
            to: to.to_string(),
        })?;
    let opposite = airport
        .opposite(shuttle, at)
        .map(|id| terminal_name(airport, id));

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "shuttle": { "from": from, "to": to },
                "terminal": terminal,
                "opposite": opposite,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => match opposite {
            Some(name) => println!("{}", name),
            None => {
                if !cli.quiet {
                    println!("{} is not an end of {} -> {}", terminal, from, to);
                }
            }
        },
    }

    Ok(())
}
