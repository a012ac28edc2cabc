//! Show command: terminals and shuttles of the network

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use shuttle_core::error::Result;
use shuttle_core::Airport;

use super::helpers::{terminal_name, uses_label};

#[derive(Debug, Serialize)]
struct TerminalEntry {
    id: String,
    wait_time: u32,
}

#[derive(Debug, Serialize)]
struct ShuttleEntry {
    from: String,
    to: String,
    time: u32,
    remaining_uses: Option<u32>,
    /// False when the index entry for its pair is gone or points at another shuttle
    routable: bool,
}

#[derive(Debug, Serialize)]
struct NetworkSummary {
    capacity: String,
    terminals: Vec<TerminalEntry>,
    shuttles: Vec<ShuttleEntry>,
}

fn summarize(airport: &Airport) -> NetworkSummary {
    let network = airport.network();
    let terminals = network
        .terminals()
        .map(|(_, terminal)| TerminalEntry {
            id: terminal.name().to_string(),
            wait_time: terminal.wait_time(),
        })
        .collect();
    let shuttles = network
        .shuttles()
        .map(|(id, shuttle)| ShuttleEntry {
            from: terminal_name(airport, shuttle.origin()),
            to: terminal_name(airport, shuttle.destination()),
            time: shuttle.travel_time(),
            remaining_uses: shuttle.remaining_uses(),
            routable: network.shuttle_between(shuttle.origin(), shuttle.destination())
                == Some(id),
        })
        .collect();

    NetworkSummary {
        capacity: network.default_capacity().to_string(),
        terminals,
        shuttles,
    }
}

/// Execute the show command
pub fn execute(cli: &Cli, airport: &Airport) -> Result<()> {
    let summary = summarize(airport);

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Human => {
            println!("Terminals ({}):", summary.terminals.len());
            for terminal in &summary.terminals {
                println!("  {}  wait {} min", terminal.id, terminal.wait_time);
            }
            println!("Shuttles ({}):", summary.shuttles.len());
            for shuttle in &summary.shuttles {
                let unindexed = if shuttle.routable { "" } else { " (unindexed)" };
                println!(
                    "  {} -> {}  {} min  [{}]{}",
                    shuttle.from,
                    shuttle.to,
                    shuttle.time,
                    uses_label(shuttle.remaining_uses),
                    unindexed
                );
            }
            if !cli.quiet {
                println!("Shuttle capacity: {}", summary.capacity);
            }
        }
    }

    Ok(())
}
