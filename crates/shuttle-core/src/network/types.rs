//! Terminal and shuttle types stored in the network

use serde::Serialize;
use std::fmt;
use std::num::NonZeroU32;

/// Handle to a terminal in a [`Network`](super::Network).
///
/// Handles are allocated in insertion order and never reused, so a handle
/// to a removed terminal stays invalid forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TerminalId(usize);

impl TerminalId {
    pub(crate) fn new(index: usize) -> Self {
        TerminalId(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for TerminalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

/// Handle to a shuttle in a [`Network`](super::Network)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ShuttleId(usize);

impl ShuttleId {
    pub(crate) fn new(index: usize) -> Self {
        ShuttleId(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ShuttleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s{}", self.0)
    }
}

/// How many trips a shuttle makes before it is taken out of service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Capacity {
    /// Never exhausted
    #[default]
    Unlimited,
    /// Exhausted after this many traversals
    Trips(NonZeroU32),
}

impl Capacity {
    /// Limited capacity, or `None` for zero trips
    pub fn limited(trips: u32) -> Option<Self> {
        NonZeroU32::new(trips).map(Capacity::Trips)
    }

    fn initial_uses(self) -> Option<u32> {
        match self {
            Capacity::Unlimited => None,
            Capacity::Trips(n) => Some(n.get()),
        }
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capacity::Unlimited => write!(f, "unlimited"),
            Capacity::Trips(n) => write!(f, "{} trips", n),
        }
    }
}

/// A location in the airport with the time a passenger waits there
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Terminal {
    name: String,
    wait_time: u32,
}

impl Terminal {
    pub fn new(name: impl Into<String>, wait_time: u32) -> Self {
        Terminal {
            name: name.into(),
            wait_time,
        }
    }

    /// Stable, human-facing identity of the terminal
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Minutes spent waiting at this terminal
    pub fn wait_time(&self) -> u32 {
        self.wait_time
    }
}

/// A directed, timed connection between two terminals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shuttle {
    origin: TerminalId,
    destination: TerminalId,
    travel_time: u32,
    /// `None` means unlimited
    remaining_uses: Option<u32>,
}

impl Shuttle {
    pub fn new(
        origin: TerminalId,
        destination: TerminalId,
        travel_time: u32,
        capacity: Capacity,
    ) -> Self {
        Shuttle {
            origin,
            destination,
            travel_time,
            remaining_uses: capacity.initial_uses(),
        }
    }

    pub fn origin(&self) -> TerminalId {
        self.origin
    }

    pub fn destination(&self) -> TerminalId {
        self.destination
    }

    /// Minutes needed to travel from origin to destination
    pub fn travel_time(&self) -> u32 {
        self.travel_time
    }

    /// Trips left before exhaustion, `None` when unlimited
    pub fn remaining_uses(&self) -> Option<u32> {
        self.remaining_uses
    }

    /// Whether `terminal` is one of the two endpoints
    pub fn is_incident(&self, terminal: TerminalId) -> bool {
        self.origin == terminal || self.destination == terminal
    }

    /// Record one traversal. Returns true when the last trip was just used.
    pub fn consume(&mut self) -> bool {
        match self.remaining_uses.as_mut() {
            None => false,
            Some(0) => false,
            Some(uses) => {
                *uses -= 1;
                *uses == 0
            }
        }
    }
}
