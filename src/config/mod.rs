//! Configuration module for catpick
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (CATPICK_*)
//! 3. Working-directory config (./catpick.toml)
//! 4. User config (<config dir>/catpick/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{config_search_paths, ConfigWarning, CONFIG_FILE_NAME};
pub use types::{ColorMode, Config, MenuConfig, OutputConfig, TaxonomyConfig};
