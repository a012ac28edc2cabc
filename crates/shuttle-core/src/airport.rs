//! The airport: terminals, shuttles and routing queries behind one owner
//!
//! `Airport` is the public entry point of the routing core. Queries and
//! structural changes take `&mut self`, so every search and every edit of
//! the network happens under one exclusive borrow. Share an airport across
//! threads by wrapping it in a single `Mutex`.

use crate::graph::{self, Metric, Route};
use crate::network::{Capacity, Network, Shuttle, ShuttleId, Terminal, TerminalId};

#[derive(Debug, Clone, Default)]
pub struct Airport {
    network: Network,
}

impl Airport {
    /// Create an airport whose shuttles all start with `capacity` trips
    pub fn new(capacity: Capacity) -> Self {
        Airport {
            network: Network::new(capacity),
        }
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn insert_terminal(&mut self, name: impl Into<String>, wait_time: u32) -> TerminalId {
        self.network.insert_terminal(Terminal::new(name, wait_time))
    }

    /// Create a shuttle from `origin` to `destination` with the airport capacity
    pub fn insert_shuttle(
        &mut self,
        origin: TerminalId,
        destination: TerminalId,
        travel_time: u32,
    ) -> ShuttleId {
        self.network.insert_shuttle(origin, destination, travel_time)
    }

    pub fn insert_shuttle_with_capacity(
        &mut self,
        origin: TerminalId,
        destination: TerminalId,
        travel_time: u32,
        capacity: Capacity,
    ) -> ShuttleId {
        self.network
            .insert_shuttle_with_capacity(origin, destination, travel_time, capacity)
    }

    /// Remove a terminal and all shuttles going to or from it
    pub fn remove_terminal(&mut self, terminal: TerminalId) -> bool {
        self.network.remove_terminal(terminal)
    }

    pub fn remove_shuttle(&mut self, shuttle: ShuttleId) -> bool {
        self.network.remove_shuttle(shuttle)
    }

    /// The other terminal `shuttle` travels between, or `None` if it is not
    /// incident to `terminal`
    pub fn opposite(&self, shuttle: ShuttleId, terminal: TerminalId) -> Option<TerminalId> {
        self.network.opposite(shuttle, terminal)
    }

    pub fn outgoing_shuttles(&self, terminal: TerminalId) -> Option<Vec<ShuttleId>> {
        self.network.outgoing_shuttles(terminal)
    }

    /// Route needing the fewest shuttles; consumes the shuttles taken
    pub fn shortest_by_legs(
        &mut self,
        origin: TerminalId,
        destination: TerminalId,
    ) -> Option<Route> {
        graph::shortest_by_legs(&mut self.network, origin, destination)
    }

    /// Route with the lowest travel plus waiting time; consumes the shuttles taken
    pub fn shortest_by_time(
        &mut self,
        origin: TerminalId,
        destination: TerminalId,
    ) -> Option<Route> {
        graph::shortest_by_time(&mut self.network, origin, destination)
    }

    pub fn shortest_route(
        &mut self,
        origin: TerminalId,
        destination: TerminalId,
        metric: Metric,
    ) -> Option<Route> {
        graph::shortest_route(&mut self.network, origin, destination, metric)
    }

    pub fn terminal(&self, id: TerminalId) -> Option<&Terminal> {
        self.network.terminal(id)
    }

    pub fn shuttle(&self, id: ShuttleId) -> Option<&Shuttle> {
        self.network.shuttle(id)
    }

    pub fn terminal_by_name(&self, name: &str) -> Option<TerminalId> {
        self.network.terminal_by_name(name)
    }

    /// Terminal names along a route, in order
    pub fn route_names(&self, route: &Route) -> Vec<String> {
        route
            .terminals
            .iter()
            .map(|id| {
                self.terminal(*id)
                    .map_or_else(|| id.to_string(), |t| t.name().to_string())
            })
            .collect()
    }
}
