use anyhow::Result;
use serde_json::json;

use catpick::error::PickerError;
use catpick::taxonomy::CategoryId;
use catpick::ui::json::{emit, event};

use super::Session;

pub fn cmd_lookup(session: &Session, id: &str) -> Result<()> {
    let taxonomy = session.load_taxonomy()?;
    let id = CategoryId::new(id);

    let path = taxonomy
        .find_by_id(&id)
        .ok_or_else(|| PickerError::UnknownId { id: id.to_string() })?;
    let is_leaf = taxonomy.get(&path).is_some_and(|c| c.is_leaf());
    let path_string = path.joined(session.separator());

    if session.json {
        emit(event(
            "found",
            "lookup",
            json!({ "id": id, "path": path_string, "leaf": is_leaf }),
        ))?;
    } else {
        println!("{}", path_string);
    }
    Ok(())
}
