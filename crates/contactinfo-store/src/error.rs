//! Error types for the store crate.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading a store or evaluating a filter.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A `LIKE` pattern could not be compiled.
    #[error("invalid match pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Reading a data file failed.
    #[error("failed to read store file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Data file is not valid JSON for a store.
    #[error("invalid JSON store data: {0}")]
    Json(#[from] serde_json::Error),

    /// Data file is not valid YAML for a store.
    #[error("invalid YAML store data: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Data file extension is neither JSON nor YAML.
    #[error("unsupported store file format: {0}")]
    UnsupportedFormat(String),

    /// Two field definitions share the same alias name.
    #[error("field name '{0}' is defined more than once")]
    DuplicateField(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
