use super::*;
use crate::network::{Capacity, Terminal};

struct Scenario {
    network: Network,
    a: TerminalId,
    b: TerminalId,
    c: TerminalId,
    d: TerminalId,
}

/// A(1) B(3) C(4) D(2); A->B 2, A->C 5, A->D 18, B->D 8, C->D 15
fn scenario(capacity: Capacity) -> Scenario {
    let mut network = Network::new(capacity);
    let a = network.insert_terminal(Terminal::new("A", 1));
    let b = network.insert_terminal(Terminal::new("B", 3));
    let c = network.insert_terminal(Terminal::new("C", 4));
    let d = network.insert_terminal(Terminal::new("D", 2));
    network.insert_shuttle(a, b, 2);
    network.insert_shuttle(a, c, 5);
    network.insert_shuttle(a, d, 18);
    network.insert_shuttle(b, d, 8);
    network.insert_shuttle(c, d, 15);
    Scenario {
        network,
        a,
        b,
        c,
        d,
    }
}

#[test]
fn test_shortest_by_legs_direct_shuttle() {
    let mut s = scenario(Capacity::Unlimited);
    let route = shortest_by_legs(&mut s.network, s.a, s.d).unwrap();
    assert_eq!(route.terminals, vec![s.a, s.d]);
    assert_eq!(route.total_time, 1 + 18 + 2);
}

#[test]
fn test_shortest_by_time_prefers_faster_transfer() {
    let mut s = scenario(Capacity::Unlimited);
    let route = shortest_by_time(&mut s.network, s.a, s.d).unwrap();
    assert_eq!(route.terminals, vec![s.a, s.b, s.d]);
    assert_eq!(route.total_time, 1 + 2 + 3 + 8 + 2);
}

#[test]
fn test_same_origin_and_destination() {
    let mut s = scenario(Capacity::Unlimited);
    for origin in [s.a, s.b, s.c, s.d] {
        let wait = u64::from(s.network.terminal(origin).unwrap().wait_time());

        let legs = shortest_by_legs(&mut s.network, origin, origin).unwrap();
        assert_eq!(legs.terminals, vec![origin]);
        assert_eq!(legs.total_time, wait);

        let time = shortest_by_time(&mut s.network, origin, origin).unwrap();
        assert_eq!(time.terminals, vec![origin]);
        assert_eq!(time.total_time, wait);
    }
}

#[test]
fn test_unreachable_returns_none_for_both_queries() {
    let mut s = scenario(Capacity::Unlimited);
    // Shuttles only run away from A
    assert!(shortest_by_legs(&mut s.network, s.d, s.a).is_none());
    assert!(shortest_by_time(&mut s.network, s.d, s.a).is_none());
}

#[test]
fn test_unknown_terminals_return_none() {
    let mut s = scenario(Capacity::Unlimited);
    assert!(s.network.remove_terminal(s.c));
    assert!(shortest_by_legs(&mut s.network, s.a, s.c).is_none());
    assert!(shortest_by_time(&mut s.network, s.c, s.d).is_none());
}

#[test]
fn test_route_after_removing_terminal() {
    let mut s = scenario(Capacity::Unlimited);
    assert!(s.network.remove_terminal(s.b));
    let route = shortest_by_time(&mut s.network, s.a, s.d).unwrap();
    // A->C->D is 1+5+4+15+2 = 27, direct is 21
    assert_eq!(route.terminals, vec![s.a, s.d]);
    assert_eq!(route.total_time, 21);
}

#[test]
fn test_unlimited_capacity_never_consumes() {
    let mut s = scenario(Capacity::Unlimited);
    for _ in 0..10 {
        assert!(shortest_by_legs(&mut s.network, s.a, s.d).is_some());
    }
    assert_eq!(s.network.shuttle_count(), 5);
}

#[test]
fn test_exhausted_shuttle_disappears_from_outgoing() {
    let mut s = scenario(Capacity::limited(1).unwrap());
    let direct = s.network.shuttle_between(s.a, s.d).unwrap();

    let first = shortest_by_legs(&mut s.network, s.a, s.d).unwrap();
    assert_eq!(first.terminals, vec![s.a, s.d]);
    assert!(!s
        .network
        .outgoing_shuttles(s.a)
        .unwrap()
        .contains(&direct));

    // The direct shuttle is gone, two legs are needed now
    let second = shortest_by_legs(&mut s.network, s.a, s.d).unwrap();
    assert_eq!(second.legs(), 2);
    assert_eq!(second.terminals, vec![s.a, s.b, s.d]);
    assert_eq!(second.total_time, 16);

    // A->B and B->D went on the second trip; only A->C->D is left
    let third = shortest_by_time(&mut s.network, s.a, s.d).unwrap();
    assert_eq!(third.terminals, vec![s.a, s.c, s.d]);
    assert_eq!(third.total_time, 27);

    assert!(shortest_by_time(&mut s.network, s.a, s.d).is_none());
    assert_eq!(s.network.shuttle_count(), 0);
}

#[test]
fn test_capacity_counts_down_across_queries() {
    let mut s = scenario(Capacity::limited(2).unwrap());
    let ab = s.network.shuttle_between(s.a, s.b).unwrap();

    shortest_by_time(&mut s.network, s.a, s.b).unwrap();
    assert_eq!(s.network.shuttle(ab).unwrap().remaining_uses(), Some(1));

    shortest_by_time(&mut s.network, s.a, s.b).unwrap();
    assert!(s.network.shuttle(ab).is_none());
    assert!(shortest_by_legs(&mut s.network, s.a, s.b).is_none());
}

#[test]
fn test_failed_query_consumes_nothing() {
    let mut s = scenario(Capacity::limited(1).unwrap());
    assert!(shortest_by_time(&mut s.network, s.d, s.a).is_none());
    assert_eq!(s.network.shuttle_count(), 5);
}

#[test]
fn test_shortest_route_dispatches_on_metric() {
    let mut s = scenario(Capacity::Unlimited);
    let legs = shortest_route(&mut s.network, s.a, s.d, Metric::Legs).unwrap();
    let time = shortest_route(&mut s.network, s.a, s.d, Metric::Time).unwrap();
    assert_eq!(legs.legs(), 1);
    assert_eq!(time.legs(), 2);
}
