//! linkbench - Neo4j vs Doublets benchmark reports
//!
//! Turns raw `cargo bench` output into a markdown comparison table
//! and a pair of bar charts (linear and log scaled).

use std::fmt;
use std::path::PathBuf;

// Public re-exports
pub mod config;
pub mod extract;
pub mod logging;
pub mod models;
pub mod render;
pub mod report;
pub mod util;

// Common error types
#[derive(Debug)]
pub enum LinkBenchError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// Benchmark log could not be found
    InputNotFound(PathBuf),
    /// Benchmark log exists but could not be read
    InputUnreadable(PathBuf, std::io::Error),
    /// A matched numeric field could not be parsed
    ParseError {
        /// Operation the measurement belongs to
        operation: String,
        /// Raw captured text
        value: String,
    },
    /// Configuration validation or parsing error
    ConfigError(String),
    /// Chart rendering error
    ChartError(String),
    /// Report artifact persistence error
    PersistenceError(String),
    /// Permission denied for output files
    PermissionDenied(String),
}

impl fmt::Display for LinkBenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkBenchError::IoError(err) => write!(f, "I/O error: {}", err),
            LinkBenchError::InputNotFound(path) => {
                write!(f, "Benchmark log not found: {}", path.display())
            }
            LinkBenchError::InputUnreadable(path, err) => {
                write!(f, "Cannot read benchmark log {}: {}", path.display(), err)
            }
            LinkBenchError::ParseError { operation, value } => write!(
                f,
                "Parse error: invalid ns/iter value '{}' for operation '{}'",
                value, operation
            ),
            LinkBenchError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            LinkBenchError::ChartError(msg) => write!(f, "Chart error: {}", msg),
            LinkBenchError::PersistenceError(msg) => write!(f, "Report persistence error: {}", msg),
            LinkBenchError::PermissionDenied(msg) => write!(f, "Permission denied: {}", msg),
        }
    }
}

impl std::error::Error for LinkBenchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LinkBenchError::IoError(err) => Some(err),
            LinkBenchError::InputUnreadable(_, err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LinkBenchError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => {
                LinkBenchError::PermissionDenied(format!("Access denied: {}", err))
            }
            _ => LinkBenchError::IoError(err),
        }
    }
}

impl From<serde_json::Error> for LinkBenchError {
    fn from(err: serde_json::Error) -> Self {
        LinkBenchError::PersistenceError(format!("JSON serialization error: {}", err))
    }
}

impl From<toml::de::Error> for LinkBenchError {
    fn from(err: toml::de::Error) -> Self {
        LinkBenchError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

impl From<regex::Error> for LinkBenchError {
    fn from(err: regex::Error) -> Self {
        LinkBenchError::ConfigError(format!("Invalid extraction pattern: {}", err))
    }
}

/// Result type alias for linkbench operations
pub type Result<T> = std::result::Result<T, LinkBenchError>;

/// Error handling utilities
pub mod error {
    use super::LinkBenchError;

    /// Convert error to user-friendly message with suggestions
    pub fn user_friendly_message(error: &LinkBenchError) -> String {
        match error {
            LinkBenchError::InputNotFound(path) => format!(
                "Benchmark log '{}' not found. Run `cargo bench > {}` first or pass --input.",
                path.display(),
                path.display()
            ),
            LinkBenchError::InputUnreadable(path, err) => format!(
                "Cannot read benchmark log '{}': {}. Check that it is a readable file.",
                path.display(),
                err
            ),
            LinkBenchError::PermissionDenied(msg) => format!(
                "Permission denied ({}). Check write permissions for the output directory.",
                msg
            ),
            LinkBenchError::ConfigError(msg) => {
                format!("Configuration error: {}. Check your settings.", msg)
            }
            LinkBenchError::PersistenceError(msg) => format!(
                "Failed to save report artifacts: {}. Check disk space and permissions.",
                msg
            ),
            _ => error.to_string(),
        }
    }

    /// Process exit code for an error
    pub fn exit_code(error: &LinkBenchError) -> u8 {
        match error {
            LinkBenchError::ConfigError(_) => 2,
            _ => 1,
        }
    }
}

// Common types and constants
pub const APP_NAME: &str = "linkbench";
pub const CONFIG_FILE: &str = "linkbench.toml";
pub const DEFAULT_INPUT_FILE: &str = "out.txt";
pub const TABLE_FILE: &str = "results.md";
pub const JSON_FILE: &str = "results.json";
pub const LINEAR_CHART_FILE: &str = "bench_rust.png";
pub const LOG_CHART_FILE: &str = "bench_rust_log_scale.png";
