//! Overview configuration structures

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::OverviewError;

/// Default location of the config file, relative to the project root.
pub const DEFAULT_CONFIG_PATH: &str = ".vp/overview.toml";

/// Top-level configuration from .vp/overview.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OverviewConfig {
    /// Display / output configuration
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Display / output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Entity lists with fewer entries than this are written inline ("A, B and C").
    #[serde(default = "default_inline_limit")]
    pub inline_limit: usize,

    /// Entries shown in a collapsed block list before "show N more".
    #[serde(default = "default_collapsed_length")]
    pub collapsed_length: usize,

    /// Enable ANSI color output in the terminal adapter. Default: false.
    #[serde(default)]
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            inline_limit: default_inline_limit(),
            collapsed_length: default_collapsed_length(),
            color: false,
        }
    }
}

// Serde default functions
fn default_inline_limit() -> usize {
    5
}

fn default_collapsed_length() -> usize {
    3
}

impl OverviewConfig {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, OverviewError> {
        let content = std::fs::read_to_string(path)?;
        let config: OverviewConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Try to load config, returning default if the file doesn't exist or is invalid.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(OverviewError::Io(_)) => Self::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring invalid overview config");
                Self::default()
            }
        }
    }

    /// Standard config path under a project root.
    pub fn path_for_project(project_root: &Path) -> PathBuf {
        project_root.join(DEFAULT_CONFIG_PATH)
    }

    fn validate(&self) -> Result<(), OverviewError> {
        if self.display.collapsed_length == 0 {
            return Err(OverviewError::InvalidData(
                "display.collapsed_length must be at least 1".to_string(),
            ));
        }
        if self.display.collapsed_length >= self.display.inline_limit {
            return Err(OverviewError::InvalidData(format!(
                "display.collapsed_length ({}) must be smaller than display.inline_limit ({})",
                self.display.collapsed_length, self.display.inline_limit
            )));
        }
        Ok(())
    }
}
