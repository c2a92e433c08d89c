use anyhow::Result;

use catpick::picker::{run_interactive, CategoryPicker};
use catpick::taxonomy::NavigationPath;

use super::{print_cancelled, print_selection, Session};

pub fn cmd_pick(session: &Session, path: Option<&str>) -> Result<()> {
    session.require_terminal("pick")?;
    let taxonomy = session.load_taxonomy()?;

    let mut picker = CategoryPicker::new(&taxonomy).with_options(session.picker_options());
    if let Some(path) = path {
        picker = picker.with_path(NavigationPath::parse(path));
    }

    match run_interactive(&mut picker, &session.style())? {
        Some(selection) => print_selection(session, "pick", &selection),
        None => print_cancelled(session, "pick"),
    }
}
