//! Theme error types

use std::path::PathBuf;

use thiserror::Error;

use crate::registry::ViewKey;

/// Errors raised by the appearance layer
#[derive(Error, Debug)]
pub enum ThemeError {
    /// An updater bound to a registered view failed during execution
    #[error("updater #{index} of view {view:?} failed: {source}")]
    Updater {
        view: ViewKey,
        index: usize,
        #[source]
        source: anyhow::Error,
    },

    /// The initial run of an updater failed while binding it
    #[error("initial run of updater failed: {0}")]
    InitialUpdate(#[source] anyhow::Error),

    /// Failed to parse a theme configuration
    #[error("invalid theme config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Failed to read a theme configuration file
    #[error("failed to read theme config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
