//! Search algorithm implementations
//!
//! - `bfs`: breadth-first search counting shuttle legs
//! - `dijkstra`: minimum travel-plus-waiting time search

pub mod bfs;
pub mod dijkstra;

pub use bfs::fewest_legs_search;
pub use dijkstra::min_time_search;
