//! Google product taxonomy (`taxonomy-with-ids.<locale>.txt`).
//!
//! ```text
//! # Google_Product_Taxonomy_Version: 2021-09-21
//! 1 - Animals & Pet Supplies
//! 3237 - Animals & Pet Supplies > Live Animals
//! ```
//!
//! Parents are listed before their children. A child whose parent was never
//! listed creates the parent with the child's id.

use tracing::info;

use crate::error::{PickerError, PickerResult};

use super::{CategoryId, Taxonomy};

pub fn parse_google_taxonomy(text: &str) -> PickerResult<Taxonomy> {
    let mut taxonomy = Taxonomy::default();
    let mut lines = 0usize;

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let malformed = || PickerError::GoogleLine {
            line: index + 1,
            content: line.to_string(),
        };

        let (id, path) = line.split_once('-').ok_or_else(malformed)?;
        let id = id.trim();
        if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }

        let pieces: Vec<&str> = path
            .split('>')
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .collect();
        if pieces.is_empty() {
            return Err(malformed());
        }

        taxonomy.insert(&pieces, &CategoryId::new(id));
        lines += 1;
    }

    info!(lines, categories = taxonomy.category_count(), "parsed google taxonomy");
    Ok(taxonomy)
}
