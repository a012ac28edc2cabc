use crate::graph::types::{Distance, SearchState, Visit};
use crate::graph::ShuttleGraph;
use crate::network::TerminalId;
use std::collections::VecDeque;

/// Breadth-first search counting shuttle legs from `origin`.
///
/// Every terminal starts unvisited at `INFINITY`. The origin enters the
/// frontier at distance 0; each popped terminal discovers its unvisited
/// destinations at one more leg, then becomes settled. Terminals the
/// search never reaches keep `INFINITY`.
#[tracing::instrument(skip(graph), fields(origin = %origin))]
pub fn fewest_legs_search(graph: &dyn ShuttleGraph, origin: TerminalId) -> SearchState {
    let mut state = SearchState::reset(graph.terminal_ids());
    let mut frontier: VecDeque<TerminalId> = VecDeque::new();

    {
        let root = state.get_mut(origin);
        root.visit = Visit::Frontier;
        root.distance = Distance::ZERO;
    }
    frontier.push_back(origin);

    let mut settled = 0usize;
    while let Some(current) = frontier.pop_front() {
        let current_distance = state.distance(current);

        for link in graph.links(current) {
            let next = state.get_mut(link.destination);
            if next.visit != Visit::Unvisited {
                continue;
            }
            next.visit = Visit::Frontier;
            next.distance = current_distance + 1;
            next.predecessor = Some(current);
            frontier.push_back(link.destination);
        }

        state.get_mut(current).visit = Visit::Settled;
        settled += 1;
    }

    tracing::trace!(settled, "fewest_legs_search finished");
    state
}

#[cfg(test)]
mod tests;
