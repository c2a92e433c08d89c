use anyhow::{bail, Result};
use dialoguer::FuzzySelect;

use catpick::picker::CategoryPicker;
use catpick::ui::theme::prompt_theme;

use super::{print_cancelled, print_selection, Session};

pub fn cmd_search(session: &Session, query: Option<&str>) -> Result<()> {
    session.require_terminal("search")?;
    let taxonomy = session.load_taxonomy()?;

    let leaves = taxonomy.leaves();
    if leaves.is_empty() {
        bail!("taxonomy has no leaf categories");
    }
    let items: Vec<String> = leaves
        .iter()
        .map(|(path, _)| path.joined(session.separator()))
        .collect();

    let theme = prompt_theme(session.color());
    let chosen = FuzzySelect::with_theme(theme.as_ref())
        .with_prompt("Category")
        .items(&items)
        .with_initial_text(query.unwrap_or_default())
        .default(0)
        .interact_opt()?;

    let Some(index) = chosen else {
        return print_cancelled(session, "search");
    };

    // Same output slots as a menu click
    let (path, _) = &leaves[index];
    let mut picker = CategoryPicker::new(&taxonomy).with_options(session.picker_options());
    let selection = picker.select_path(path)?;
    print_selection(session, "search", &selection)
}
