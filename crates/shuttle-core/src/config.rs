//! Network description files
//!
//! A network is described in TOML, YAML or JSON; the format follows the
//! file extension. Loading only parses; [`NetworkConfig::build`] validates
//! the description and turns it into an [`Airport`].

pub mod types;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::airport::Airport;
use crate::error::{Result, ShuttleError};
use crate::network::Capacity;
use crate::{bail_invalid, bail_network, bail_unsupported};

pub use types::{AirportConfig, NetworkConfig, NetworkFormat, ShuttleConfig, TerminalConfig};

impl NetworkConfig {
    /// Load a network description from disk
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ShuttleError::NetworkNotFound {
                path: path.to_path_buf(),
            });
        }

        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        let Some(format) = NetworkFormat::from_extension(ext) else {
            bail_unsupported!("network format", ext, NetworkFormat::SUPPORTED);
        };

        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content, format)?;
        tracing::debug!(
            terminals = config.terminals.len(),
            shuttles = config.shuttles.len(),
            "network loaded"
        );
        Ok(config)
    }

    /// Parse a network description in the given format
    pub fn parse(content: &str, format: NetworkFormat) -> Result<Self> {
        let config = match format {
            NetworkFormat::Toml => toml::from_str(content)?,
            NetworkFormat::Yaml => serde_yaml::from_str(content)?,
            NetworkFormat::Json => serde_json::from_str(content)?,
        };
        Ok(config)
    }

    /// Validate the description and build the airport it describes
    pub fn build(&self) -> Result<Airport> {
        let default_capacity = to_capacity("airport capacity", self.airport.capacity)?;
        let mut airport = Airport::new(default_capacity);

        let mut seen = HashSet::new();
        for terminal in &self.terminals {
            if terminal.id.trim().is_empty() {
                bail_network!("terminal id must not be empty");
            }
            if !seen.insert(terminal.id.as_str()) {
                return Err(ShuttleError::already_exists("terminal", &terminal.id));
            }
            airport.insert_terminal(terminal.id.clone(), terminal.wait_time);
        }

        for shuttle in &self.shuttles {
            let Some(origin) = airport.terminal_by_name(&shuttle.from) else {
                bail_network!("shuttle from unknown terminal '{}'", shuttle.from);
            };
            let Some(destination) = airport.terminal_by_name(&shuttle.to) else {
                bail_network!("shuttle to unknown terminal '{}'", shuttle.to);
            };
            let capacity = match shuttle.capacity {
                Some(_) => to_capacity("shuttle capacity", shuttle.capacity)?,
                None => default_capacity,
            };

            airport.insert_shuttle_with_capacity(origin, destination, shuttle.time, capacity);
            if shuttle.both_ways {
                airport.insert_shuttle_with_capacity(destination, origin, shuttle.time, capacity);
            }
        }

        Ok(airport)
    }
}

fn to_capacity(context: &str, trips: Option<u32>) -> Result<Capacity> {
    match trips {
        None => Ok(Capacity::Unlimited),
        Some(n) => match Capacity::limited(n) {
            Some(capacity) => Ok(capacity),
            None => bail_invalid!(context, n),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE_TOML: &str = r#"
[airport]
capacity = 3

[[terminals]]
id = "A"
wait_time = 1

[[terminals]]
id = "B"
wait_time = 3

[[shuttles]]
from = "A"
to = "B"
time = 2

[[shuttles]]
from = "B"
to = "A"
time = 4
capacity = 1
"#;

    #[test]
    fn test_parse_toml() {
        let config = NetworkConfig::parse(SAMPLE_TOML, NetworkFormat::Toml).unwrap();
        assert_eq!(config.airport.capacity, Some(3));
        assert_eq!(config.terminals.len(), 2);
        assert_eq!(config.shuttles[1].capacity, Some(1));
        assert!(!config.shuttles[0].both_ways);
    }

    #[test]
    fn test_build_applies_capacities() {
        let config = NetworkConfig::parse(SAMPLE_TOML, NetworkFormat::Toml).unwrap();
        let airport = config.build().unwrap();
        let a = airport.terminal_by_name("A").unwrap();
        let b = airport.terminal_by_name("B").unwrap();

        let ab = airport.network().shuttle_between(a, b).unwrap();
        let ba = airport.network().shuttle_between(b, a).unwrap();
        assert_eq!(airport.shuttle(ab).unwrap().remaining_uses(), Some(3));
        assert_eq!(airport.shuttle(ba).unwrap().remaining_uses(), Some(1));
    }

    #[test]
    fn test_parse_yaml_and_json() {
        let yaml = "terminals:\n  - id: A\n    wait_time: 2\n  - id: B\nshuttles:\n  - from: A\n    to: B\n    time: 7\n    both_ways: true\n";
        let config = NetworkConfig::parse(yaml, NetworkFormat::Yaml).unwrap();
        assert_eq!(config.airport.capacity, None);
        assert_eq!(config.terminals[1].wait_time, 0);
        assert!(config.shuttles[0].both_ways);

        let json = r#"{"terminals":[{"id":"A","wait_time":2}],"shuttles":[]}"#;
        let config = NetworkConfig::parse(json, NetworkFormat::Json).unwrap();
        assert_eq!(config.terminals[0].id, "A");
    }

    #[test]
    fn test_both_ways_inserts_reverse_shuttle() {
        let yaml = "terminals:\n  - id: A\n  - id: B\nshuttles:\n  - from: A\n    to: B\n    time: 7\n    both_ways: true\n";
        let airport = NetworkConfig::parse(yaml, NetworkFormat::Yaml)
            .unwrap()
            .build()
            .unwrap();
        let a = airport.terminal_by_name("A").unwrap();
        let b = airport.terminal_by_name("B").unwrap();
        assert!(airport.network().shuttle_between(a, b).is_some());
        assert!(airport.network().shuttle_between(b, a).is_some());
        assert_eq!(airport.network().shuttle_count(), 2);
    }

    #[test]
    fn test_build_rejects_duplicate_terminal() {
        let json = r#"{"terminals":[{"id":"A"},{"id":"A"}]}"#;
        let err = NetworkConfig::parse(json, NetworkFormat::Json)
            .unwrap()
            .build()
            .unwrap_err();
        assert!(matches!(err, ShuttleError::AlreadyExists { .. }));
    }

    #[test]
    fn test_build_rejects_dangling_shuttle() {
        let json = r#"{"terminals":[{"id":"A"}],"shuttles":[{"from":"A","to":"Z","time":1}]}"#;
        let err = NetworkConfig::parse(json, NetworkFormat::Json)
            .unwrap()
            .build()
            .unwrap_err();
        assert!(matches!(err, ShuttleError::InvalidNetwork { .. }));
        assert!(err.to_string().contains("'Z'"));
    }

    #[test]
    fn test_build_rejects_zero_capacity() {
        let json = r#"{"airport":{"capacity":0}}"#;
        let err = NetworkConfig::parse(json, NetworkFormat::Json)
            .unwrap()
            .build()
            .unwrap_err();
        assert!(matches!(err, ShuttleError::InvalidValue { .. }));
    }

    #[test]
    fn test_build_rejects_empty_terminal_id() {
        let json = r#"{"terminals":[{"id":"  "}]}"#;
        let err = NetworkConfig::parse(json, NetworkFormat::Json)
            .unwrap()
            .build()
            .unwrap_err();
        assert!(matches!(err, ShuttleError::InvalidNetwork { .. }));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("airport.toml");
        fs::write(&path, SAMPLE_TOML).unwrap();
        let config = NetworkConfig::load(&path).unwrap();
        assert_eq!(config.shuttles.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = NetworkConfig::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ShuttleError::NetworkNotFound { .. }));
    }

    #[test]
    fn test_load_unsupported_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("airport.xml");
        fs::write(&path, "<airport/>").unwrap();
        let err = NetworkConfig::load(&path).unwrap_err();
        assert!(matches!(err, ShuttleError::Unsupported { .. }));
    }
}
