//! Shuttle Core Library
//!
//! Routing over an airport's internal shuttle network: a mutable graph of
//! terminals and shuttles, fewest-legs and minimum-time route queries, and
//! capacity-based consumption of the shuttles a route takes.

pub mod airport;
pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod network;

pub use airport::Airport;
pub use graph::{Metric, Route};
pub use network::{Capacity, ShuttleId, TerminalId};
