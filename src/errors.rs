//! Error types for configuration loading and persistence.

use thiserror::Error;

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config path could not be made absolute.
    #[error("failed to resolve config path '{path}': {source}")]
    PathResolve {
        path: String,
        source: std::io::Error,
    },

    /// The file extension is not a recognized config format.
    #[error("unrecognized config extension: '{extension}'")]
    UnsupportedFormat { extension: String },

    /// File I/O error when reading the config.
    #[error("failed to read config file '{path}': {source}")]
    FileRead {
        path: String,
        source: std::io::Error,
    },

    /// JSON parsing error.
    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    /// Serialization of an in-memory config failed.
    #[error("failed to encode config: {source}")]
    Encode { source: serde_json::Error },

    /// The target file could not be created on save.
    #[error("failed to create config file '{path}': {source}")]
    FileCreate {
        path: String,
        source: std::io::Error,
    },

    /// The encoded payload could not be written on save.
    #[error("failed to write config file '{path}': {source}")]
    FileWrite {
        path: String,
        source: std::io::Error,
    },

    /// A required chain field is empty.
    #[error("required field chain.{field} empty for chain '{chain_id}'")]
    MissingField {
        field: &'static str,
        chain_id: String,
    },
}
