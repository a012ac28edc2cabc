//! Error types and exit codes for shuttle
//!
//! Routing operations never fail: unknown handles and unreachable
//! destinations are reported as `false`/`None`. The errors here cover the
//! fallible surfaces around the core, namely network file loading and the CLI.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing or invalid network file, unknown terminal)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the shuttle CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing network, unknown terminal (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur outside the routing core
#[derive(Error, Debug)]
pub enum ShuttleError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("network file not found: {path:?}")]
    NetworkNotFound { path: PathBuf },

    #[error("invalid network: {reason}")]
    InvalidNetwork { reason: String },

    #[error("terminal not found: {id}")]
    TerminalNotFound { id: String },

    #[error("no shuttle from {from} to {to}")]
    ShuttleNotFound { from: String, to: String },

    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl ShuttleError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        ShuttleError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that already exists
    pub fn already_exists(context: &str, value: impl std::fmt::Display) -> Self {
        ShuttleError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        ShuttleError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Create an error for a network description that does not hold together
    pub fn invalid_network(reason: impl std::fmt::Display) -> Self {
        ShuttleError::InvalidNetwork {
            reason: reason.to_string(),
        }
    }

    /// Create an error for a terminal name that is not in the network
    pub fn terminal_not_found(id: impl Into<String>) -> Self {
        ShuttleError::TerminalNotFound { id: id.into() }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ShuttleError::UnknownFormat(_)
            | ShuttleError::UsageError(_)
            | ShuttleError::InvalidValue { .. }
            | ShuttleError::Unsupported { .. } => ExitCode::Usage,

            ShuttleError::NetworkNotFound { .. }
            | ShuttleError::InvalidNetwork { .. }
            | ShuttleError::TerminalNotFound { .. }
            | ShuttleError::ShuttleNotFound { .. }
            | ShuttleError::AlreadyExists { .. } => ExitCode::Data,

            ShuttleError::Io(_)
            | ShuttleError::Yaml(_)
            | ShuttleError::Json(_)
            | ShuttleError::Toml(_)
            | ShuttleError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            ShuttleError::UnknownFormat(_) => "unknown_format",
            ShuttleError::UsageError(_) => "usage_error",
            ShuttleError::InvalidValue { .. } => "invalid_value",
            ShuttleError::Unsupported { .. } => "unsupported",
            ShuttleError::NetworkNotFound { .. } => "network_not_found",
            ShuttleError::InvalidNetwork { .. } => "invalid_network",
            ShuttleError::TerminalNotFound { .. } => "terminal_not_found",
            ShuttleError::ShuttleNotFound { .. } => "shuttle_not_found",
            ShuttleError::AlreadyExists { .. } => "already_exists",
            ShuttleError::Io(_) => "io_error",
            ShuttleError::Yaml(_) => "yaml_error",
            ShuttleError::Json(_) => "json_error",
            ShuttleError::Toml(_) => "toml_error",
            ShuttleError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for shuttle operations
pub type Result<T> = std::result::Result<T, ShuttleError>;
