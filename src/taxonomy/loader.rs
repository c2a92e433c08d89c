//! Taxonomy file loading

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{PickerError, PickerResult};

use super::{from_script_str, parse_google_taxonomy, Taxonomy};

/// On-disk taxonomy format
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum TaxonomyFormat {
    /// `.txt` files are Google text, everything else JSON
    #[default]
    Auto,
    /// Nested-object JSON, bare or as a `name = {...};` script
    Json,
    /// Google `taxonomy-with-ids` text
    Google,
}

impl TaxonomyFormat {
    /// Concrete format for this file
    pub fn resolve(self, path: &Path) -> TaxonomyFormat {
        match self {
            TaxonomyFormat::Auto => {
                let is_txt = path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
                if is_txt {
                    TaxonomyFormat::Google
                } else {
                    TaxonomyFormat::Json
                }
            }
            explicit => explicit,
        }
    }

    pub fn parse_lenient(s: &str) -> Option<TaxonomyFormat> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Some(TaxonomyFormat::Auto),
            "json" | "legacy" => Some(TaxonomyFormat::Json),
            "google" | "txt" | "text" => Some(TaxonomyFormat::Google),
            _ => None,
        }
    }
}

/// Read a taxonomy file in the given format
pub fn load_taxonomy(path: &Path, format: TaxonomyFormat) -> PickerResult<Taxonomy> {
    if !path.is_file() {
        return Err(PickerError::TaxonomyNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    let format = format.resolve(path);
    let taxonomy = match format {
        TaxonomyFormat::Google => parse_google_taxonomy(&content)?,
        TaxonomyFormat::Json | TaxonomyFormat::Auto => from_script_str(&content)?,
    };

    info!(
        path = %path.display(),
        ?format,
        categories = taxonomy.category_count(),
        "loaded taxonomy"
    );
    Ok(taxonomy)
}
