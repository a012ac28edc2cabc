//! Network description file schema

use serde::Deserialize;

/// Root of a network description file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NetworkConfig {
    /// Airport-wide settings
    #[serde(default)]
    pub airport: AirportConfig,

    /// Terminals, in insertion order
    #[serde(default)]
    pub terminals: Vec<TerminalConfig>,

    /// Shuttles, in insertion order
    #[serde(default)]
    pub shuttles: Vec<ShuttleConfig>,
}

/// Airport-wide settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AirportConfig {
    /// Trips every shuttle makes before it is retired (omitted = unlimited)
    #[serde(default)]
    pub capacity: Option<u32>,
}

/// A single terminal
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TerminalConfig {
    pub id: String,

    /// Minutes spent waiting at the terminal
    #[serde(default)]
    pub wait_time: u32,
}

/// A single shuttle
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShuttleConfig {
    pub from: String,
    pub to: String,

    /// Travel time in minutes
    pub time: u32,

    /// Overrides the airport capacity for this shuttle
    #[serde(default)]
    pub capacity: Option<u32>,

    /// Also insert the reverse shuttle
    #[serde(default)]
    pub both_ways: bool,
}

/// File formats a network can be described in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkFormat {
    Toml,
    Yaml,
    Json,
}

impl NetworkFormat {
    pub const SUPPORTED: &'static str = "toml, yaml, yml, json";

    /// Pick a format from a file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(NetworkFormat::Toml),
            "yaml" | "yml" => Some(NetworkFormat::Yaml),
            "json" => Some(NetworkFormat::Json),
            _ => None,
        }
    }
}
