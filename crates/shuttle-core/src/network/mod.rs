//! Graph store for the shuttle network
//!
//! Owns every terminal and shuttle. Terminals and shuttles are kept in
//! insertion order, and an adjacency index maps each terminal to the
//! shuttle that leaves it for each destination. The index holds at most
//! one shuttle per ordered (origin, destination) pair: inserting a second
//! shuttle for the same pair shadows the first in the index while both
//! stay in the shuttle collection.

pub mod types;

use std::collections::BTreeMap;

pub use types::{Capacity, Shuttle, ShuttleId, Terminal, TerminalId};

/// Terminals, shuttles and the adjacency index between them
#[derive(Debug, Clone, Default)]
pub struct Network {
    terminals: BTreeMap<TerminalId, Terminal>,
    shuttles: BTreeMap<ShuttleId, Shuttle>,
    adjacency: BTreeMap<TerminalId, BTreeMap<TerminalId, ShuttleId>>,
    default_capacity: Capacity,
    next_terminal: usize,
    next_shuttle: usize,
}

impl Network {
    /// Create an empty network whose shuttles get `default_capacity`
    pub fn new(default_capacity: Capacity) -> Self {
        Network {
            default_capacity,
            ..Default::default()
        }
    }

    pub fn default_capacity(&self) -> Capacity {
        self.default_capacity
    }

    /// Add a terminal with an empty adjacency entry
    pub fn insert_terminal(&mut self, terminal: Terminal) -> TerminalId {
        let id = TerminalId::new(self.next_terminal);
        self.next_terminal += 1;
        tracing::trace!(terminal = %id, name = terminal.name(), "insert_terminal");
        self.terminals.insert(id, terminal);
        self.adjacency.insert(id, BTreeMap::new());
        id
    }

    /// Add a shuttle with the network's default capacity
    pub fn insert_shuttle(
        &mut self,
        origin: TerminalId,
        destination: TerminalId,
        travel_time: u32,
    ) -> ShuttleId {
        self.insert_shuttle_with_capacity(origin, destination, travel_time, self.default_capacity)
    }

    /// Add a shuttle with an explicit capacity.
    ///
    /// Endpoints are expected to be present; the index entry is skipped
    /// when the origin is unknown.
    pub fn insert_shuttle_with_capacity(
        &mut self,
        origin: TerminalId,
        destination: TerminalId,
        travel_time: u32,
        capacity: Capacity,
    ) -> ShuttleId {
        let id = ShuttleId::new(self.next_shuttle);
        self.next_shuttle += 1;

        if !self.contains_terminal(origin) || !self.contains_terminal(destination) {
            tracing::warn!(shuttle = %id, %origin, %destination, "shuttle endpoint not in network");
        }

        self.shuttles.insert(
            id,
            Shuttle::new(origin, destination, travel_time, capacity),
        );
        if let Some(entry) = self.adjacency.get_mut(&origin) {
            if let Some(shadowed) = entry.insert(destination, id) {
                tracing::debug!(shuttle = %id, %shadowed, "shuttle shadows earlier index entry");
            }
        }
        id
    }

    /// Remove a terminal and every shuttle incident to it
    pub fn remove_terminal(&mut self, id: TerminalId) -> bool {
        if self.terminals.remove(&id).is_none() {
            return false;
        }
        self.adjacency.remove(&id);

        // Scan the whole collection so shadowed duplicates go too
        let incident: Vec<ShuttleId> = self
            .shuttles
            .iter()
            .filter(|(_, shuttle)| shuttle.is_incident(id))
            .map(|(shuttle_id, _)| *shuttle_id)
            .collect();

        tracing::debug!(terminal = %id, removed_shuttles = incident.len(), "remove_terminal");
        for shuttle_id in incident {
            self.remove_shuttle(shuttle_id);
        }
        true
    }

    /// Remove a shuttle and its adjacency entry
    pub fn remove_shuttle(&mut self, id: ShuttleId) -> bool {
        let Some(shuttle) = self.shuttles.remove(&id) else {
            return false;
        };

        if let Some(entry) = self.adjacency.get_mut(&shuttle.origin()) {
            entry.remove(&shuttle.destination());
        }
        true
    }

    /// The endpoint of `shuttle` that is not `terminal`
    pub fn opposite(&self, shuttle: ShuttleId, terminal: TerminalId) -> Option<TerminalId> {
        let shuttle = self.shuttles.get(&shuttle)?;
        if !self.contains_terminal(terminal) {
            return None;
        }
        if terminal == shuttle.origin() {
            Some(shuttle.destination())
        } else if terminal == shuttle.destination() {
            Some(shuttle.origin())
        } else {
            None
        }
    }

    /// Shuttles reachable through `terminal`'s adjacency entry
    pub fn outgoing_shuttles(&self, terminal: TerminalId) -> Option<Vec<ShuttleId>> {
        self.adjacency
            .get(&terminal)
            .map(|entry| entry.values().copied().collect())
    }

    /// The indexed shuttle from `origin` to `destination`
    pub fn shuttle_between(&self, origin: TerminalId, destination: TerminalId) -> Option<ShuttleId> {
        self.adjacency.get(&origin)?.get(&destination).copied()
    }

    /// `(destination, shuttle)` pairs of the adjacency entry, in index order
    pub fn adjacent(&self, terminal: TerminalId) -> Option<Vec<(TerminalId, ShuttleId)>> {
        self.adjacency
            .get(&terminal)
            .map(|entry| entry.iter().map(|(dest, id)| (*dest, *id)).collect())
    }

    pub fn terminal(&self, id: TerminalId) -> Option<&Terminal> {
        self.terminals.get(&id)
    }

    pub fn shuttle(&self, id: ShuttleId) -> Option<&Shuttle> {
        self.shuttles.get(&id)
    }

    pub fn shuttle_mut(&mut self, id: ShuttleId) -> Option<&mut Shuttle> {
        self.shuttles.get_mut(&id)
    }

    /// First terminal with the given name, in insertion order
    pub fn terminal_by_name(&self, name: &str) -> Option<TerminalId> {
        self.terminals
            .iter()
            .find(|(_, terminal)| terminal.name() == name)
            .map(|(id, _)| *id)
    }

    pub fn contains_terminal(&self, id: TerminalId) -> bool {
        self.terminals.contains_key(&id)
    }

    pub fn contains_shuttle(&self, id: ShuttleId) -> bool {
        self.shuttles.contains_key(&id)
    }

    /// All terminals in insertion order
    pub fn terminals(&self) -> impl Iterator<Item = (TerminalId, &Terminal)> {
        self.terminals.iter().map(|(id, terminal)| (*id, terminal))
    }

    /// All shuttles in insertion order, shadowed ones included
    pub fn shuttles(&self) -> impl Iterator<Item = (ShuttleId, &Shuttle)> {
        self.shuttles.iter().map(|(id, shuttle)| (*id, shuttle))
    }

    pub fn terminal_count(&self) -> usize {
        self.terminals.len()
    }

    pub fn shuttle_count(&self) -> usize {
        self.shuttles.len()
    }
}
