use super::*;
use crate::network::{Network, Terminal};

fn line(len: usize) -> (Network, Vec<TerminalId>) {
    let mut network = Network::default();
    let ids: Vec<TerminalId> = (0..len)
        .map(|i| network.insert_terminal(Terminal::new(format!("T{}", i), 1)))
        .collect();
    for pair in ids.windows(2) {
        network.insert_shuttle(pair[0], pair[1], 5);
    }
    (network, ids)
}

#[test]
fn test_bfs_counts_legs() {
    let (network, ids) = line(4);
    let state = fewest_legs_search(&network, ids[0]);
    for (legs, id) in ids.iter().enumerate() {
        assert_eq!(state.distance(*id), Distance::new(legs as u64));
    }
    assert_eq!(state.predecessor(ids[3]), Some(ids[2]));
    assert_eq!(state.predecessor(ids[0]), None);
}

#[test]
fn test_bfs_settles_reached_terminals_only() {
    let (network, ids) = line(4);
    let state = fewest_legs_search(&network, ids[2]);
    assert_eq!(state.get(ids[2]).visit, Visit::Settled);
    assert_eq!(state.get(ids[3]).visit, Visit::Settled);
    assert_eq!(state.get(ids[0]).visit, Visit::Unvisited);
    assert!(!state.is_reachable(ids[1]));
}

#[test]
fn test_bfs_prefers_fewer_legs_over_time() {
    let mut network = Network::default();
    let a = network.insert_terminal(Terminal::new("A", 0));
    let b = network.insert_terminal(Terminal::new("B", 0));
    let c = network.insert_terminal(Terminal::new("C", 0));
    network.insert_shuttle(a, b, 1);
    network.insert_shuttle(b, c, 1);
    network.insert_shuttle(a, c, 100);

    let state = fewest_legs_search(&network, a);
    assert_eq!(state.distance(c), Distance::new(1));
    assert_eq!(state.predecessor(c), Some(a));
}

#[test]
fn test_bfs_first_discovery_wins() {
    // Both B and C reach D in two legs; B is expanded first
    let mut network = Network::default();
    let a = network.insert_terminal(Terminal::new("A", 0));
    let b = network.insert_terminal(Terminal::new("B", 0));
    let c = network.insert_terminal(Terminal::new("C", 0));
    let d = network.insert_terminal(Terminal::new("D", 0));
    network.insert_shuttle(a, c, 1);
    network.insert_shuttle(a, b, 1);
    network.insert_shuttle(c, d, 1);
    network.insert_shuttle(b, d, 1);

    let state = fewest_legs_search(&network, a);
    assert_eq!(state.distance(d), Distance::new(2));
    assert_eq!(state.predecessor(d), Some(b));
}

#[test]
fn test_bfs_handles_cycles() {
    let mut network = Network::default();
    let a = network.insert_terminal(Terminal::new("A", 0));
    let b = network.insert_terminal(Terminal::new("B", 0));
    network.insert_shuttle(a, b, 1);
    network.insert_shuttle(b, a, 1);
    network.insert_shuttle(a, a, 1);

    let state = fewest_legs_search(&network, a);
    assert_eq!(state.distance(a), Distance::ZERO);
    assert_eq!(state.distance(b), Distance::new(1));
    assert_eq!(state.predecessor(a), None);
}
