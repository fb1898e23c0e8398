//! Core error types for vault-core.
//!
//! This module defines the error hierarchy using thiserror. Catalog and
//! configuration problems are fatal authoring/setup errors; store errors are
//! runtime conditions the caller recovers from (retry, user messaging).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for vault-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Catalog or configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Profile store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Catalog and configuration errors.
///
/// A malformed catalog is an authoring bug caught by startup validation,
/// never a runtime condition to recover from.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A prompt template references a variable with no registered value list
    #[error("Template '{template}' references unregistered variable '{variable}'")]
    UnregisteredVariable { template: String, variable: String },

    /// A catalog (or a required subset of one) has no entries
    #[error("Catalog '{0}' is empty")]
    EmptyCatalog(String),

    /// Two catalog entries share an id
    #[error("Duplicate id '{id}' in {catalog} catalog")]
    DuplicateId { catalog: String, id: String },

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Profile store errors.
///
/// A missing record is NOT an error: `ProfileStore::load_state` returns
/// `Ok(None)` for a user with no row yet.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Transport failure talking to the backend
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend rejected the request
    #[error("Backend error ({status}): {message}")]
    Backend { status: u16, message: String },

    /// A stored record could not be interpreted
    #[error("Invalid stored record: {0}")]
    InvalidRecord(String),

    /// The store has no usable configuration
    #[error("Store not configured: {0}")]
    NotConfigured(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
