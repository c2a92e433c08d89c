//! Error types for catpick
//!
//! Library code returns [`PickerError`]; the binary wraps it with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for catpick operations
pub type PickerResult<T> = Result<T, PickerError>;

/// Main error type for catpick operations
#[derive(Error, Debug)]
pub enum PickerError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Taxonomy JSON could not be parsed
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Taxonomy JSON parsed but its root is not an object
    #[error("taxonomy root must be a JSON object, found {found}")]
    InvalidRoot { found: &'static str },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Line of a Google taxonomy file that is not `<id> - <path>`
    #[error("malformed taxonomy line {line}: '{content}'")]
    GoogleLine { line: usize, content: String },

    /// Taxonomy file does not exist
    #[error("taxonomy file not found: {path}")]
    TaxonomyNotFound { path: PathBuf },

    /// No item with this label at the displayed level
    #[error("no category '{label}' at this level")]
    UnknownChoice { label: String },

    /// The menu was closed by a previous selection
    #[error("menu is closed")]
    MenuClosed,

    /// A scripted selection ended on a branch
    #[error("'{path}' is not a leaf category")]
    NotALeaf { path: String },

    /// No category carries this id
    #[error("no category with id '{id}'")]
    UnknownId { id: String },
}
