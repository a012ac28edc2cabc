use crate::graph::types::{Distance, SearchState, Visit};
use crate::graph::ShuttleGraph;
use crate::network::TerminalId;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Min-heap entry, ordered by distance and then by push order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HeapEntry {
    pub distance: Distance,
    pub sequence: u64,
    pub terminal: TerminalId,
}

/// Minimum-time search from `origin`.
///
/// The origin's distance is its own wait time. Reaching terminal B over a
/// shuttle of travel time `w` costs `distance(popped) + w + wait(B)`, so a
/// terminal's final distance is the total time of the best route to it,
/// every wait on the way included.
///
/// Improved terminals are pushed again and stale heap entries are skipped
/// on pop, so each terminal settles exactly once at its final distance.
/// Equal distances settle in push order.
#[tracing::instrument(skip(graph), fields(origin = %origin))]
pub fn min_time_search(graph: &dyn ShuttleGraph, origin: TerminalId) -> SearchState {
    let mut state = SearchState::reset(graph.terminal_ids());
    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();
    let mut sequence = 0u64;

    let Some(origin_wait) = graph.wait_time(origin) else {
        return state;
    };

    {
        let root = state.get_mut(origin);
        root.visit = Visit::Frontier;
        root.distance = Distance::new(u64::from(origin_wait));
    }
    heap.push(Reverse(HeapEntry {
        distance: state.distance(origin),
        sequence,
        terminal: origin,
    }));

    while let Some(Reverse(entry)) = heap.pop() {
        let current = state.get(entry.terminal);
        if current.visit == Visit::Settled || entry.distance > current.distance {
            continue;
        }
        state.get_mut(entry.terminal).visit = Visit::Settled;

        for link in graph.links(entry.terminal) {
            let Some(wait) = graph.wait_time(link.destination) else {
                continue;
            };
            let candidate =
                current.distance + u64::from(link.travel_time) + u64::from(wait);

            let next = state.get_mut(link.destination);
            if next.visit == Visit::Settled || next.distance <= candidate {
                continue;
            }
            next.distance = candidate;
            next.predecessor = Some(entry.terminal);
            next.visit = Visit::Frontier;

            sequence += 1;
            heap.push(Reverse(HeapEntry {
                distance: candidate,
                sequence,
                terminal: link.destination,
            }));
        }
    }

    state
}
