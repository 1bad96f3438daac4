//! Error types and handling for folio core

use thiserror::Error;

/// Result type alias for folio operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for folio core
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Route table construction errors
    #[error("Route table error: {0}")]
    RouteTable(#[from] RouteTableError),

    /// Persisted location errors
    #[error("Location error: {0}")]
    Location(#[from] LocationError),

    /// View loading errors
    #[error("View error: {0}")]
    View(#[from] ViewError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid value for field '{field}': {value}")]
    InvalidValue { field: String, value: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

/// Route table construction errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("No routes configured")]
    NoRoutes,

    #[error("Route '{0}' registered more than once")]
    DuplicateKey(String),

    #[error("Default route '{0}' not found in configuration")]
    DefaultRouteMissing(String),
}

/// Persisted location errors
#[derive(Error, Debug)]
pub enum LocationError {
    #[error("Failed to read location from {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write location to {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("No tokio runtime available to drive transitions")]
    NoRuntime,
}

/// View loading errors
#[derive(Error, Debug)]
pub enum ViewError {
    #[error("Failed to load view for route '{route}': {message}")]
    LoadFailed { route: String, message: String },
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Generic(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Generic(msg.to_string())
    }
}
