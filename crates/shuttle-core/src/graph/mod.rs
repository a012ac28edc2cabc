//! Route queries over the shuttle network
//!
//! Provides the two routing queries:
//! - fewest shuttle legs (breadth-first search)
//! - least travel plus waiting time (Dijkstra)
//!
//! Both queries check reachability with the fewest-legs search first, then
//! rebuild the route from predecessor links. Rebuilding a route consumes
//! one trip of every shuttle it takes.

pub mod algos;
pub mod path;
pub mod traversal;
pub mod types;

use std::time::Instant;

use crate::network::{Network, TerminalId};
use crate::trace_time;

pub use algos::{fewest_legs_search, min_time_search};
pub use path::{materialize, Contribution};
pub use traversal::{Link, ShuttleGraph};
pub use types::{Distance, Metric, NodeState, Route, SearchState, Visit};

/// Route with the fewest shuttle legs from `origin` to `destination`.
///
/// Returns `None` when either terminal is unknown or the destination is
/// unreachable.
#[tracing::instrument(skip(network), fields(origin = %origin, destination = %destination))]
pub fn shortest_by_legs(
    network: &mut Network,
    origin: TerminalId,
    destination: TerminalId,
) -> Option<Route> {
    if !network.contains_terminal(origin) || !network.contains_terminal(destination) {
        return None;
    }

    let start = Instant::now();
    let state = fewest_legs_search(network, origin);
    trace_time!(start, "fewest_legs_search");

    if !state.is_reachable(destination) {
        tracing::debug!("destination unreachable");
        return None;
    }
    materialize(network, &state, origin, destination, Contribution::WaitAndTravel)
}

/// Route with the least travel plus waiting time from `origin` to `destination`.
///
/// The weighted search only runs once the fewest-legs search has shown the
/// destination to be reachable.
#[tracing::instrument(skip(network), fields(origin = %origin, destination = %destination))]
pub fn shortest_by_time(
    network: &mut Network,
    origin: TerminalId,
    destination: TerminalId,
) -> Option<Route> {
    if !network.contains_terminal(origin) || !network.contains_terminal(destination) {
        return None;
    }

    let start = Instant::now();
    let reachability = fewest_legs_search(network, origin);
    if !reachability.is_reachable(destination) {
        tracing::debug!("destination unreachable");
        return None;
    }

    let state = min_time_search(network, origin);
    trace_time!(start, "min_time_search");
    materialize(network, &state, origin, destination, Contribution::DistanceDelta)
}

/// Run the query selected by `metric`
pub fn shortest_route(
    network: &mut Network,
    origin: TerminalId,
    destination: TerminalId,
    metric: Metric,
) -> Option<Route> {
    match metric {
        Metric::Legs => shortest_by_legs(network, origin, destination),
        Metric::Time => shortest_by_time(network, origin, destination),
    }
}

#[cfg(test)]
mod tests;
