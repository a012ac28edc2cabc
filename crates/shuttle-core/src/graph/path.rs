//! Route reconstruction and shuttle consumption
//!
//! After a search, predecessor links are walked back from the destination.
//! Every shuttle taken on the way uses up one trip of its capacity, and a
//! shuttle whose last trip is used is removed from the network.

use crate::graph::types::{Route, SearchState};
use crate::network::{Network, ShuttleId, TerminalId};

/// How a terminal contributes to the route's total time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contribution {
    /// Terminal wait time, plus the travel time of the shuttle that reached it
    WaitAndTravel,
    /// Difference between the terminal's distance and its predecessor's
    DistanceDelta,
}

/// Rebuild the route to `destination` and consume the shuttles it takes.
///
/// Returns `None` when the destination was not reached by the search.
pub fn materialize(
    network: &mut Network,
    state: &SearchState,
    origin: TerminalId,
    destination: TerminalId,
    contribution: Contribution,
) -> Option<Route> {
    if !state.is_reachable(destination) {
        return None;
    }

    let mut terminals = vec![destination];
    let mut taken: Vec<ShuttleId> = Vec::new();
    let mut total_time: u64 = 0;
    let mut current = destination;

    while current != origin {
        let Some(predecessor) = state.predecessor(current) else {
            tracing::warn!(terminal = %current, "predecessor chain ends before origin");
            return None;
        };
        let Some(shuttle_id) = network.shuttle_between(predecessor, current) else {
            tracing::warn!(from = %predecessor, to = %current, "no indexed shuttle on route");
            return None;
        };

        total_time += match contribution {
            Contribution::WaitAndTravel => {
                let travel = network
                    .shuttle(shuttle_id)
                    .map_or(0, |shuttle| u64::from(shuttle.travel_time()));
                travel + wait_of(network, current)
            }
            Contribution::DistanceDelta => state
                .distance(current)
                .value()
                .saturating_sub(state.distance(predecessor).value()),
        };

        taken.push(shuttle_id);
        terminals.push(predecessor);
        current = predecessor;
    }

    total_time += match contribution {
        Contribution::WaitAndTravel => wait_of(network, origin),
        Contribution::DistanceDelta => state.distance(origin).value(),
    };

    for shuttle_id in taken {
        consume(network, shuttle_id);
    }

    terminals.reverse();
    Some(Route {
        terminals,
        total_time,
    })
}

fn wait_of(network: &Network, terminal: TerminalId) -> u64 {
    network
        .terminal(terminal)
        .map_or(0, |terminal| u64::from(terminal.wait_time()))
}

/// Use one trip of a shuttle, removing it when none are left
fn consume(network: &mut Network, shuttle_id: ShuttleId) {
    let exhausted = network
        .shuttle_mut(shuttle_id)
        .is_some_and(|shuttle| shuttle.consume());
    if exhausted {
        tracing::debug!(shuttle = %shuttle_id, "shuttle exhausted, removing");
        network.remove_shuttle(shuttle_id);
    }
}
