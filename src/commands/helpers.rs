//! Helper functions shared across commands

use shuttle_core::error::{Result, ShuttleError};
use shuttle_core::{Airport, TerminalId};

/// Resolve a terminal id given on the command line
pub fn resolve_terminal(airport: &Airport, name: &str) -> Result<TerminalId> {
    airport
        .terminal_by_name(name)
        .ok_or_else(|| ShuttleError::terminal_not_found(name))
}

/// Name of a terminal, falling back to its handle
pub fn terminal_name(airport: &Airport, id: TerminalId) -> String {
    airport
        .terminal(id)
        .map_or_else(|| id.to_string(), |terminal| terminal.name().to_string())
}

/// Human form of a shuttle's remaining trips
pub fn uses_label(remaining_uses: Option<u32>) -> String {
    match remaining_uses {
        None => "unlimited".to_string(),
        Some(1) => "1 trip left".to_string(),
        Some(n) => format!("{} trips left", n),
    }
}
