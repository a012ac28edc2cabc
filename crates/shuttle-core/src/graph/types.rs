use crate::network::TerminalId;
use serde::Serialize;
use std::collections::HashMap;

/// Accumulated distance of a terminal during a search.
///
/// Counts legs for the fewest-legs search and minutes for the
/// minimum-time search. `INFINITY` marks terminals not reached yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Distance(u64);

impl Distance {
    pub const ZERO: Distance = Distance(0);
    pub const INFINITY: Distance = Distance(u64::MAX);

    pub fn new(value: u64) -> Self {
        Distance(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        *self != Self::INFINITY
    }
}

impl Default for Distance {
    fn default() -> Self {
        Self::INFINITY
    }
}

impl std::ops::Add<u64> for Distance {
    type Output = Self;

    /// Saturates at `INFINITY`
    fn add(self, other: u64) -> Self {
        Distance(self.0.saturating_add(other))
    }
}

/// Visit marker for a terminal in the current search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visit {
    #[default]
    Unvisited,
    /// Discovered, waiting in the frontier
    Frontier,
    /// Distance and predecessor are final for this search
    Settled,
}

/// Per-terminal scratch data owned by one search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NodeState {
    pub visit: Visit,
    pub distance: Distance,
    pub predecessor: Option<TerminalId>,
}

/// Search state for every terminal, keyed by handle.
///
/// Built fresh for each query so nothing carries over between searches.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    nodes: HashMap<TerminalId, NodeState>,
}

impl SearchState {
    /// Reset state for the given terminals: unvisited, infinite, no predecessor
    pub fn reset(terminals: impl IntoIterator<Item = TerminalId>) -> Self {
        SearchState {
            nodes: terminals
                .into_iter()
                .map(|id| (id, NodeState::default()))
                .collect(),
        }
    }

    /// State of a terminal; terminals outside the search read as reset
    pub fn get(&self, id: TerminalId) -> NodeState {
        self.nodes.get(&id).copied().unwrap_or_default()
    }

    pub fn get_mut(&mut self, id: TerminalId) -> &mut NodeState {
        self.nodes.entry(id).or_default()
    }

    pub fn distance(&self, id: TerminalId) -> Distance {
        self.get(id).distance
    }

    pub fn predecessor(&self, id: TerminalId) -> Option<TerminalId> {
        self.get(id).predecessor
    }

    pub fn is_reachable(&self, id: TerminalId) -> bool {
        self.distance(id).is_finite()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Which quantity a route query minimizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Fewest shuttle legs
    #[default]
    Legs,
    /// Least travel plus waiting time
    Time,
}

impl std::str::FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "legs" => Ok(Metric::Legs),
            "time" => Ok(Metric::Time),
            other => Err(format!("unknown metric '{}' (expected: legs, time)", other)),
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Metric::Legs => write!(f, "legs"),
            Metric::Time => write!(f, "time"),
        }
    }
}

/// A route between two terminals
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Terminals from origin to destination, both included
    pub terminals: Vec<TerminalId>,
    /// Travel time of every shuttle taken plus the wait time of every terminal visited
    pub total_time: u64,
}

impl Route {
    pub fn origin(&self) -> Option<TerminalId> {
        self.terminals.first().copied()
    }

    pub fn destination(&self) -> Option<TerminalId> {
        self.terminals.last().copied()
    }

    /// Number of shuttles taken
    pub fn legs(&self) -> usize {
        self.terminals.len().saturating_sub(1)
    }
}
