//! Host-agnostic description of one menu level.

use serde::Serialize;

/// Whether an item selects a category or opens a sub-menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Leaf,
    Branch,
}

/// One selectable entry of the menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    /// Category label, as stored in the taxonomy
    pub label: String,
    /// Label as shown (branches carry the branch marker)
    pub display: String,
    pub kind: ItemKind,
}

impl MenuItem {
    pub fn is_leaf(&self) -> bool {
        self.kind == ItemKind::Leaf
    }
}

/// A row the cursor can rest on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row<'v> {
    Back,
    Item(&'v MenuItem),
}

/// Everything needed to draw the menu at the current level
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuView {
    /// Last label of the navigation path (absent at the root)
    pub header: Option<String>,
    /// Label of the back control (absent at the root)
    pub back: Option<String>,
    pub items: Vec<MenuItem>,
    /// Number of path labels that resolved in the taxonomy
    pub resolved_depth: usize,
    /// Length of the navigation path
    pub depth: usize,
}

impl MenuView {
    pub fn has_back(&self) -> bool {
        self.back.is_some()
    }

    /// True when part of the navigation path no longer resolves
    pub fn is_degraded(&self) -> bool {
        self.resolved_depth < self.depth
    }

    /// Rows in display order: back control first, then items
    pub fn rows(&self) -> Vec<Row<'_>> {
        let back = self.has_back().then_some(Row::Back);
        back.into_iter()
            .chain(self.items.iter().map(Row::Item))
            .collect()
    }

    pub fn row_count(&self) -> usize {
        self.items.len() + usize::from(self.has_back())
    }

    /// Row the cursor starts on: the first item, or the back control when
    /// the level has no items
    pub fn first_item_row(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            usize::from(self.has_back())
        }
    }

    pub fn item(&self, label: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.label == label)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.label.as_str()).collect()
    }

    pub fn display_labels(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.display.as_str()).collect()
    }
}
