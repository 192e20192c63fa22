//! Checker errors

use std::path::PathBuf;
use thiserror::Error;
use wordtab_core::TableError;

/// Errors raised while configuring, loading or checking
#[derive(Debug, Error)]
pub enum CheckError {
    /// Word list could not be opened or read
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be built or deserialized
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Configuration was well-formed but unusable
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A table rejected an operation
    #[error(transparent)]
    Table(#[from] TableError),

    /// An instance ended up with different keys than the others after load
    #[error("table instance '{label}' holds different keys than the rest of the set")]
    DigestMismatch { label: String },
}
