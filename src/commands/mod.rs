//! Subcommand implementations for the `catpick` binary.
//!
//! Every command receives a [`Session`]: the resolved config, the detected
//! terminal capabilities and the output mode.

mod import;
mod lookup;
mod pick;
mod search;
mod select;
mod show;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use serde_json::json;

use catpick::cli::Cli;
use catpick::config::{ColorMode, Config, CONFIG_FILE_NAME};
use catpick::picker::{render_selection, PickerOptions, RenderStyle, Selection};
use catpick::taxonomy::{load_taxonomy, Taxonomy, TaxonomyFormat};
use catpick::ui::json::{emit, event};
use catpick::ui::{detect_capabilities, TerminalCapabilities};

pub use import::cmd_import;
pub use lookup::cmd_lookup;
pub use pick::cmd_pick;
pub use search::cmd_search;
pub use select::cmd_select;
pub use show::cmd_show;

/// Settings shared by all subcommands
pub struct Session {
    pub config: Config,
    pub caps: TerminalCapabilities,
    pub json: bool,
    color: bool,
    taxonomy_path: Option<PathBuf>,
    format: TaxonomyFormat,
}

impl Session {
    /// Resolve config (file, environment, CLI flags) and detect the terminal
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => {
                let (config, warnings) = Config::load_with_warnings(path)
                    .with_context(|| format!("failed to load config {}", path.display()))?;
                for warning in &warnings {
                    eprintln!("Warning: {}", warning);
                }
                config.with_env_overrides()
            }
            None => Config::load_or_default(std::env::current_dir().ok().as_deref()),
        };

        let caps = detect_capabilities();
        let color = match cli.color.unwrap_or(config.output.color) {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => caps.supports_color && !cli.json,
        };

        Ok(Self {
            taxonomy_path: cli.taxonomy.clone().or_else(|| config.taxonomy.path.clone()),
            format: cli.format.unwrap_or(config.taxonomy.format),
            caps,
            color,
            json: cli.json,
            config,
        })
    }

    pub fn load_taxonomy(&self) -> Result<Taxonomy> {
        let Some(path) = &self.taxonomy_path else {
            bail!(
                "no taxonomy file given (use --taxonomy, CATPICK_TAXONOMY or [taxonomy] path in {})",
                CONFIG_FILE_NAME
            );
        };
        load_taxonomy(path, self.format)
            .with_context(|| format!("failed to load taxonomy {}", path.display()))
    }

    pub fn picker_options(&self) -> PickerOptions {
        self.config.menu.picker_options()
    }

    pub fn separator(&self) -> &str {
        &self.config.menu.separator
    }

    pub fn color(&self) -> bool {
        self.color
    }

    /// Piped output is never truncated or windowed
    pub fn style(&self) -> RenderStyle {
        let unicode = self.config.output.unicode && self.caps.supports_unicode;
        if self.caps.is_tty {
            RenderStyle::new(unicode, self.color, self.caps.width).with_height(self.caps.height)
        } else {
            RenderStyle::new(unicode, self.color, u16::MAX)
        }
    }

    /// Refuse to start a prompt without a terminal on both ends
    pub fn require_terminal(&self, command: &str) -> Result<()> {
        if !self.caps.is_interactive() {
            bail!(
                "'{}' needs an interactive terminal; use 'show' or 'select' in scripts",
                command
            );
        }
        Ok(())
    }
}

/// Print a completed selection as text or as a `selected` event
pub(crate) fn print_selection(session: &Session, command: &str, selection: &Selection) -> Result<()> {
    if session.json {
        emit(event(
            "selected",
            command,
            json!({
                "id": selection.id,
                "label": selection.label,
                "path": selection.path_string(session.separator()),
            }),
        ))?;
    } else {
        println!(
            "{}",
            render_selection(selection, session.separator(), &session.style())
        );
    }
    Ok(())
}

/// Report a prompt closed without a choice
pub(crate) fn print_cancelled(session: &Session, command: &str) -> Result<()> {
    if session.json {
        emit(event("cancelled", command, serde_json::Value::Null))?;
    } else {
        eprintln!("No category selected.");
    }
    Ok(())
}
