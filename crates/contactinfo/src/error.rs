//! Error types for region rendering.
//!
//! Two levels exist. [`ResolveError`] covers selectors that resolve to no
//! record or to several; these never abort rendering and become diagnostic
//! text in place of the region. [`Error`] covers failures that do abort it:
//! an unavailable store, a bad tag pattern or an unreadable config file.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Non-fatal outcome of a query selector that did not pin down one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The query matched no record.
    #[error("query matched no record")]
    NotFound,

    /// The query matched more than one record.
    #[error("query matched {0} records")]
    NotUnique(usize),
}

/// Fatal rendering errors.
#[derive(Debug, Error)]
pub enum Error {
    /// The field store failed or rejected a query.
    #[error("store error: {0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The region tag produced an invalid pattern.
    #[error("invalid tag pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Reading a config file failed.
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Config file is not valid JSON.
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// Config file is not valid YAML.
    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Config file extension is neither JSON nor YAML.
    #[error("unsupported config file format: {0}")]
    UnsupportedFormat(String),
}

impl Error {
    /// Wraps a store failure.
    pub fn store(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Error::Store(Box::new(err))
    }
}

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, Error>;
