use anyhow::{Context, Result};

use catpick::picker::CategoryPicker;
use catpick::taxonomy::NavigationPath;

use super::{print_selection, Session};

/// Replay one click per label, as a user would in the menu
pub fn cmd_select(session: &Session, path: &str) -> Result<()> {
    let taxonomy = session.load_taxonomy()?;
    let mut picker = CategoryPicker::new(&taxonomy).with_options(session.picker_options());

    let selection = picker
        .select_path(&NavigationPath::parse(path))
        .with_context(|| format!("cannot select '{}'", path))?;

    print_selection(session, "select", &selection)
}
