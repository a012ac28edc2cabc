//! CLI argument parsing for shuttle
//!
//! Supports global flags: --network, --format, --quiet, --verbose,
//! --log-level, --log-json

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use parse::{parse_format, parse_metric};
use shuttle_core::graph::Metric;
pub use shuttle_core::format::OutputFormat;

/// Default network description file, relative to the working directory
pub const DEFAULT_NETWORK_FILE: &str = "airport.toml";

/// Shuttle - route planner for an airport's internal shuttle network
#[derive(Parser, Debug)]
#[command(name = "shuttle")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Network description file (TOML, YAML or JSON)
    #[arg(long, short, global = true, env = "SHUTTLE_NETWORK")]
    pub network: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List terminals and shuttles
    Show,

    /// List shuttles leaving a terminal
    Outgoing {
        /// Terminal id
        terminal: String,
    },

    /// Show the other end of the shuttle FROM -> TO as seen from TERMINAL
    Opposite {
        /// Origin of the shuttle
        from: String,

        /// Destination of the shuttle
        to: String,

        /// Terminal to look from
        terminal: String,
    },

    /// Find a route between two terminals
    Route {
        /// Origin terminal id
        from: String,

        /// Destination terminal id
        to: String,

        /// Minimize shuttle legs or total time
        #[arg(long, short, default_value = "legs", value_parser = parse_metric)]
        by: Metric,

        /// Run the query this many times against the same network
        #[arg(long, short, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        repeat: u32,
    },
}
