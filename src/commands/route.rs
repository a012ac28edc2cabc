//! Route command: fewest-legs or fastest route between two terminals
//!
//! Every found route consumes one trip of each shuttle it takes, so
//! repeated queries can see shuttles retire and routes change.

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use shuttle_core::error::Result;
use shuttle_core::{Airport, Metric};

use super::helpers::resolve_terminal;

/// Outcome of one query
#[derive(Debug, Serialize)]
struct Trip {
    trip: u32,
    found: bool,
    terminals: Vec<String>,
    legs: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_time: Option<u64>,
}

#[derive(Debug, Serialize)]
struct RouteReport<'a> {
    from: &'a str,
    to: &'a str,
    by: Metric,
    trips: Vec<Trip>,
}

/// Execute the route command
pub fn execute(
    cli: &Cli,
    airport: &mut Airport,
    from: &str,
    to: &str,
    metric: Metric,
    repeat: u32,
) -> Result<()> {
    let origin = resolve_terminal(airport, from)?;
    let destination = resolve_terminal(airport, to)?;

    let mut trips = Vec::new();
    for trip in 1..=repeat {
        let route = airport.shortest_route(origin, destination, metric);
        tracing::debug!(trip, found = route.is_some(), "route query");
        trips.push(match route {
            Some(route) => Trip {
                trip,
                found: true,
                terminals: airport.route_names(&route),
                legs: route.legs(),
                total_time: Some(route.total_time),
            },
            None => Trip {
                trip,
                found: false,
                terminals: Vec::new(),
                legs: 0,
                total_time: None,
            },
        });
    }

    let report = RouteReport {
        from,
        to,
        by: metric,
        trips,
    };

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => output_human(cli, &report, repeat > 1),
    }

    Ok(())
}

fn output_human(cli: &Cli, report: &RouteReport<'_>, numbered: bool) {
    for trip in &report.trips {
        let prefix = if numbered {
            format!("Trip {}: ", trip.trip)
        } else {
            String::new()
        };

        match trip.total_time {
            Some(total_time) if trip.found => {
                println!("{}{}", prefix, trip.terminals.join(" -> "));
                if !cli.quiet {
                    let legs = if trip.legs == 1 { "leg" } else { "legs" };
                    println!("  {} {}, total time {} min", trip.legs, legs, total_time);
                }
            }
            _ => println!("{}No route from {} to {}", prefix, report.from, report.to),
        }
    }
}
