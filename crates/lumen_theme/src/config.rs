//! Theme configuration
//!
//! Loaded from TOML at application startup:
//!
//! ```toml
//! initial_style = "dark"
//! failure_policy = "fail-fast"
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ThemeError;
use crate::style::Style;

/// How updater failures affect a style switch
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Abort only the failing view's chain; keep repainting other views
    #[default]
    Isolate,
    /// Stop the whole style switch at the first failure
    FailFast,
}

/// Startup configuration for a [`ThemeRegistry`](crate::ThemeRegistry)
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Style active before the first switch
    pub initial_style: Style,
    pub failure_policy: FailurePolicy,
}

impl ThemeConfig {
    /// Parse a TOML document
    pub fn from_toml_str(src: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(src)?)
    }

    /// Read and parse a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let src = fs::read_to_string(path).map_err(|source| ThemeError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&src)
    }

    pub fn with_initial_style(mut self, style: Style) -> Self {
        self.initial_style = style;
        self
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }
}
