//! CLI Argument Parsing
//!
//! Global flags (--taxonomy, --format, --config, --json, --color, --verbose)
//! are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::ColorMode;
use crate::taxonomy::TaxonomyFormat;

/// What `import` writes
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmitFormat {
    /// Nested-object JSON
    #[default]
    Json,
    /// `google_product_categories = {...}` for web pages
    Js,
}

/// catpick - pick a category from a product taxonomy
#[derive(Parser, Debug)]
#[command(name = "catpick")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Taxonomy file (legacy JSON or Google taxonomy-with-ids text)
    #[arg(short, long, global = true)]
    pub taxonomy: Option<PathBuf>,

    /// Taxonomy file format
    #[arg(long, global = true, value_enum)]
    pub format: Option<TaxonomyFormat>,

    /// Config file (skips the default search)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format for scripts
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorMode>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse the taxonomy interactively and pick a category
    Pick {
        /// Open the menu at this path (`A > B`)
        #[arg(long)]
        path: Option<String>,
    },

    /// Print one menu level without interaction
    Show {
        /// Level to show (`A > B`); the root when omitted
        #[arg(long)]
        path: Option<String>,
    },

    /// Select the leaf at a full path (`A > B > Leaf`)
    Select {
        /// Full path of the leaf category
        path: String,
    },

    /// Fuzzy-search all leaf categories
    Search {
        /// Initial search text
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Print the path of the category with this id
    Lookup {
        /// Category id
        id: String,
    },

    /// Convert a Google taxonomy-with-ids file
    Import {
        /// Google taxonomy text file
        source: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output encoding
        #[arg(long, value_enum, default_value = "json")]
        emit: EmitFormat,
    },
}
