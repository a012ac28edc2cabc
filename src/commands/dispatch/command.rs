//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::{Cli, DEFAULT_NETWORK_FILE};
use shuttle_core::config::NetworkConfig;
use shuttle_core::error::Result;
use shuttle_core::trace_time;
use shuttle_core::Airport;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Network file from `--network`, `SHUTTLE_NETWORK`, or the default name
    pub fn network_path(&self) -> PathBuf {
        self.cli
            .network
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_NETWORK_FILE))
    }

    /// Load and validate the network description
    pub fn load_airport(&self) -> Result<Airport> {
        let path = self.network_path();
        let airport = NetworkConfig::load(&path)?.build()?;
        trace_time!(self.start, "load_airport");
        tracing::debug!(
            path = %path.display(),
            terminals = airport.network().terminal_count(),
            shuttles = airport.network().shuttle_count(),
            "network ready"
        );
        Ok(airport)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("shuttle {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Route planner for an airport's internal shuttle network.");
        println!();
        println!("Run `shuttle --help` for usage information.");
        Ok(())
    }
}
