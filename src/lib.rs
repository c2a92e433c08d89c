//! catpick - hierarchical category picker for product taxonomies
//!
//! A taxonomy (legacy nested-object JSON or Google's `taxonomy-with-ids`
//! text) is loaded into a typed tree. A `CategoryPicker` walks it one level
//! at a time, rendering a `MenuView` per level and writing the chosen leaf
//! to a `SelectionSink`.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod picker;
pub mod taxonomy;
pub mod ui;

// Re-exports for convenience
pub use config::Config;
pub use error::{PickerError, PickerResult};
pub use picker::{
    CategoryPicker, Choice, FormFields, MenuView, PickerOptions, PickerState, Selection,
    SelectionSink,
};
pub use taxonomy::{
    load_taxonomy, parse_google_taxonomy, Category, CategoryId, CategoryNode, NavigationPath,
    Taxonomy, TaxonomyFormat,
};
