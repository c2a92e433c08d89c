//! Nested-object JSON encoding.
//!
//! Each category is an object keyed by child label. Leaves carry only an
//! `"id"` field; branches carry their children next to an optional `"id"`:
//!
//! ```json
//! {"Animals": {"id": "3", "Dogs": {"id": "1"}, "Cats": {"id": "2"}}}
//! ```
//!
//! Ids may be strings or numbers. Entries that cannot be decoded are skipped
//! with a warning so one bad entry does not hide the rest of the menu.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{PickerError, PickerResult};

use super::{Category, CategoryId, CategoryNode, NavigationPath, Taxonomy};

/// Key holding a category's own id; never a child label
pub const RESERVED_ID_KEY: &str = "id";

pub fn from_json_str(s: &str) -> PickerResult<Taxonomy> {
    let value: Value = serde_json::from_str(s)?;
    from_json_value(&value)
}

/// Decode JSON that may be wrapped in a script assignment
/// (`google_product_categories = {...};`), as written by `import --emit js`.
pub fn from_script_str(s: &str) -> PickerResult<Taxonomy> {
    from_json_str(strip_assignment(s))
}

fn strip_assignment(s: &str) -> &str {
    let trimmed = s.trim();
    match trimmed.split_once('=') {
        Some((target, body)) if is_assignment_target(target.trim()) => {
            let body = body.trim();
            body.strip_suffix(';').unwrap_or(body).trim_end()
        }
        _ => trimmed,
    }
}

/// `name`, `var name` or `window.name`
fn is_assignment_target(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '.' | ' '))
}

pub fn from_json_value(value: &Value) -> PickerResult<Taxonomy> {
    let Value::Object(root) = value else {
        return Err(PickerError::InvalidRoot {
            found: kind_of(value),
        });
    };

    if let Some(id) = root.get(RESERVED_ID_KEY) {
        debug!(%id, "ignoring root id");
    }

    let mut trail = NavigationPath::new();
    Ok(Taxonomy::new(decode_children(root, &mut trail)))
}

fn decode_children(map: &Map<String, Value>, trail: &mut NavigationPath) -> Vec<Category> {
    map.iter()
        .filter(|(label, _)| label.as_str() != RESERVED_ID_KEY)
        .filter_map(|(label, value)| {
            trail.push(label.clone());
            let node = decode_node(value, trail);
            trail.pop();
            node.map(|node| Category {
                label: label.clone(),
                node,
            })
        })
        .collect()
}

fn decode_node(value: &Value, trail: &mut NavigationPath) -> Option<CategoryNode> {
    let Value::Object(entry) = value else {
        warn!(path = %trail, found = kind_of(value), "skipping non-object category entry");
        return None;
    };

    let id = entry
        .get(RESERVED_ID_KEY)
        .and_then(|raw| decode_id(raw, trail));
    let has_children = entry.keys().any(|key| key != RESERVED_ID_KEY);

    match (has_children, id) {
        (false, Some(id)) => Some(CategoryNode::Leaf { id }),
        (false, None) => {
            warn!(path = %trail, "skipping category with neither id nor children");
            None
        }
        (true, id) => Some(CategoryNode::Branch {
            id,
            children: decode_children(entry, trail),
        }),
    }
}

fn decode_id(raw: &Value, trail: &NavigationPath) -> Option<CategoryId> {
    match raw {
        Value::String(s) => Some(CategoryId::new(s.clone())),
        Value::Number(n) => Some(CategoryId::new(n.to_string())),
        other => {
            warn!(path = %trail, found = kind_of(other), "ignoring category id that is not a string or number");
            None
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Encode a taxonomy back into nested objects, `"id"` first in each entry
pub fn to_json_value(taxonomy: &Taxonomy) -> Value {
    Value::Object(encode_children(taxonomy.roots()))
}

pub fn to_json_string(taxonomy: &Taxonomy) -> PickerResult<String> {
    Ok(serde_json::to_string(&to_json_value(taxonomy))?)
}

fn encode_children(categories: &[Category]) -> Map<String, Value> {
    categories
        .iter()
        .map(|category| (category.label.clone(), encode_node(&category.node)))
        .collect()
}

fn encode_node(node: &CategoryNode) -> Value {
    let mut entry = Map::new();
    if let Some(id) = node.id() {
        entry.insert(RESERVED_ID_KEY.to_string(), Value::String(id.to_string()));
    }
    entry.extend(encode_children(node.children()));
    Value::Object(entry)
}
