//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PickerResult;
use crate::picker::PickerOptions;
use crate::taxonomy::{TaxonomyFormat, DEFAULT_SEPARATOR};

use super::loader::{self, ConfigWarning};

/// Where the taxonomy comes from
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TaxonomyConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,

    #[serde(default)]
    pub format: TaxonomyFormat,
}

/// Menu labels and the path-string separator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuConfig {
    #[serde(default = "default_separator")]
    pub separator: String,

    #[serde(default = "default_branch_marker")]
    pub branch_marker: String,

    #[serde(default = "default_back_label")]
    pub back_label: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            branch_marker: default_branch_marker(),
            back_label: default_back_label(),
        }
    }
}

impl MenuConfig {
    pub fn picker_options(&self) -> PickerOptions {
        PickerOptions {
            separator: self.separator.clone(),
            branch_marker: self.branch_marker.clone(),
            back_label: self.back_label.clone(),
        }
    }
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

fn default_branch_marker() -> String {
    ">".to_string()
}

fn default_back_label() -> String {
    "< Back".to_string()
}

/// Color output mode
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Terminal output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default = "default_true")]
    pub unicode: bool,

    #[serde(default)]
    pub color: ColorMode,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            unicode: true,
            color: ColorMode::Auto,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub taxonomy: TaxonomyConfig,

    #[serde(default)]
    pub menu: MenuConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: &Path) -> PickerResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> PickerResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from working-directory config, user config, or defaults
    pub fn load_or_default(cwd: Option<&Path>) -> Self {
        loader::load_or_default(cwd)
    }

    /// Apply environment variable overrides (CATPICK_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
