//! catpick CLI - pick a category from a product taxonomy
//!
//! Usage: catpick <COMMAND>
//!
//! Commands:
//!   pick    Browse the taxonomy interactively
//!   show    Print one menu level
//!   select  Select a leaf by its full path
//!   search  Fuzzy-search leaf categories
//!   lookup  Print the path of a category id
//!   import  Convert a Google taxonomy-with-ids file

mod commands;

use anyhow::Result;
use clap::Parser;

use catpick::cli::{Cli, Commands};
use commands::Session;

fn main() -> Result<()> {
    let cli = Cli::parse();
    catpick::logging::init_tracing(cli.verbose, cli.json);

    let session = Session::from_cli(&cli)?;

    match &cli.command {
        Commands::Pick { path } => commands::cmd_pick(&session, path.as_deref()),
        Commands::Show { path } => commands::cmd_show(&session, path.as_deref()),
        Commands::Select { path } => commands::cmd_select(&session, path),
        Commands::Search { query } => commands::cmd_search(&session, query.as_deref()),
        Commands::Lookup { id } => commands::cmd_lookup(&session, id),
        Commands::Import {
            source,
            output,
            emit,
        } => commands::cmd_import(&session, source, output.as_deref(), *emit),
    }
}
