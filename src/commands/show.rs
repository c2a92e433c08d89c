use anyhow::Result;

use catpick::picker::{render_breadcrumb, render_menu, CategoryPicker};
use catpick::taxonomy::NavigationPath;
use catpick::ui::json::{emit, event};

use super::Session;

pub fn cmd_show(session: &Session, path: Option<&str>) -> Result<()> {
    let taxonomy = session.load_taxonomy()?;
    let path = path.map(NavigationPath::parse).unwrap_or_default();
    let picker = CategoryPicker::new(&taxonomy)
        .with_options(session.picker_options())
        .with_path(path);
    let view = picker.render();

    if session.json {
        let mut data = serde_json::to_value(&view)?;
        if let Some(fields) = data.as_object_mut() {
            fields.insert("path".to_string(), serde_json::to_value(picker.path())?);
        }
        emit(event("level", "show", data))?;
        return Ok(());
    }

    let style = session.style();
    println!(
        "{}",
        render_breadcrumb(picker.path(), session.separator(), &style)
    );
    print!("{}", render_menu(&view, None, &style));
    Ok(())
}
