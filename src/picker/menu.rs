//! CategoryPicker state management and action handling.
//!
//! The picker owns the navigation path and the open/closed flag. Every
//! transition is followed by a fresh `render()`; nothing is cached between
//! levels.

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{PickerError, PickerResult};
use crate::taxonomy::{CategoryId, CategoryNode, NavigationPath, Taxonomy, DEFAULT_SEPARATOR};

use super::sink::{FormFields, SelectionSink};
use super::view::{ItemKind, MenuItem, MenuView, Row};

/// Labels and separators used when building views and path strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOptions {
    /// Joins labels in the path-string output field
    pub separator: String,
    /// Appended (after a space) to branch labels
    pub branch_marker: String,
    pub back_label: String,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            branch_marker: ">".to_string(),
            back_label: "< Back".to_string(),
        }
    }
}

/// Observable picker state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerState {
    /// Menu open at this navigation depth
    Browsing { depth: usize },
    /// A leaf was chosen; reopened only from outside
    Closed,
}

/// A completed leaf selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub id: CategoryId,
    pub label: String,
    /// Navigation path plus the chosen label
    pub path: NavigationPath,
}

impl Selection {
    pub fn path_string(&self, separator: &str) -> String {
        self.path.joined(separator)
    }
}

/// Result of choosing an item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// A branch was opened
    Entered { depth: usize },
    /// A leaf was selected and written to the sink
    Selected(Selection),
}

/// Picker action driven by the host's input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerAction {
    /// Move cursor up
    Up,
    /// Move cursor down
    Down,
    /// Choose the row under the cursor
    Activate,
    /// Leave the current level
    Back,
    /// Quit without selecting
    Quit,
}

/// What the host should do after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Redraw and keep reading input
    Continue,
    Selected(Selection),
    Quit,
}

/// Drill-down menu over a taxonomy
pub struct CategoryPicker<'t, S = FormFields> {
    taxonomy: &'t Taxonomy,
    path: NavigationPath,
    open: bool,
    cursor: usize,
    options: PickerOptions,
    sink: S,
}

impl<'t> CategoryPicker<'t, FormFields> {
    /// Picker writing into fresh in-memory form fields
    pub fn new(taxonomy: &'t Taxonomy) -> Self {
        Self::with_sink(taxonomy, FormFields::new())
    }
}

impl<'t, S: SelectionSink> CategoryPicker<'t, S> {
    pub fn with_sink(taxonomy: &'t Taxonomy, sink: S) -> Self {
        Self {
            taxonomy,
            path: NavigationPath::new(),
            open: true,
            cursor: 0,
            options: PickerOptions::default(),
            sink,
        }
    }

    pub fn with_options(mut self, options: PickerOptions) -> Self {
        self.options = options;
        self
    }

    /// Start at a given navigation path (labels that do not resolve are kept;
    /// rendering falls back to the deepest valid level)
    pub fn with_path(mut self, path: NavigationPath) -> Self {
        self.path = path;
        self.reset_cursor();
        self
    }

    pub fn options(&self) -> &PickerOptions {
        &self.options
    }

    pub fn path(&self) -> &NavigationPath {
        &self.path
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn state(&self) -> PickerState {
        if self.open {
            PickerState::Browsing {
                depth: self.path.len(),
            }
        } else {
            PickerState::Closed
        }
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    /// Build the menu for the current navigation path
    pub fn render(&self) -> MenuView {
        let level = self.taxonomy.resolve(&self.path);
        if level.depth < self.path.len() {
            warn!(
                path = %self.path,
                resolved = level.depth,
                "navigation path does not resolve; showing last valid level"
            );
        }

        let items = level
            .categories
            .iter()
            .map(|category| {
                let kind = match category.node {
                    CategoryNode::Leaf { .. } => ItemKind::Leaf,
                    CategoryNode::Branch { .. } => ItemKind::Branch,
                };
                let display = match kind {
                    ItemKind::Leaf => category.label.clone(),
                    ItemKind::Branch => {
                        format!("{} {}", category.label, self.options.branch_marker)
                    }
                };
                MenuItem {
                    label: category.label.clone(),
                    display,
                    kind,
                }
            })
            .collect();

        let at_root = self.path.is_empty();
        MenuView {
            header: self.path.last().map(str::to_string),
            back: (!at_root).then(|| self.options.back_label.clone()),
            items,
            resolved_depth: level.depth,
            depth: self.path.len(),
        }
    }

    /// Choose an item of the displayed level by label.
    ///
    /// Branches are entered; leaves are written to the sink and close the
    /// menu.
    pub fn choose(&mut self, label: &str) -> PickerResult<Choice> {
        if !self.open {
            return Err(PickerError::MenuClosed);
        }

        let taxonomy = self.taxonomy;
        let level = taxonomy.resolve(&self.path);
        let category = level
            .categories
            .iter()
            .find(|c| c.label == label)
            .ok_or_else(|| PickerError::UnknownChoice {
                label: label.to_string(),
            })?;

        match &category.node {
            CategoryNode::Branch { .. } => {
                self.path.push(label);
                self.reset_cursor();
                debug!(path = %self.path, "entered category");
                Ok(Choice::Entered {
                    depth: self.path.len(),
                })
            }
            CategoryNode::Leaf { id } => {
                let selection = Selection {
                    id: id.clone(),
                    label: label.to_string(),
                    path: self.path.with_label(label),
                };
                self.sink.set_display(label);
                self.sink.set_category_id(&selection.id);
                self.sink
                    .set_category_path(&selection.path_string(&self.options.separator));
                self.sink.close_menu();
                self.open = false;
                debug!(id = %selection.id, path = %selection.path, "selected category");
                Ok(Choice::Selected(selection))
            }
        }
    }

    /// Leave the current level. Returns false at the root.
    pub fn back(&mut self) -> bool {
        match self.path.pop() {
            Some(label) => {
                self.reset_cursor();
                debug!(left = %label, path = %self.path, "went back");
                true
            }
            None => false,
        }
    }

    /// Reopen a closed menu at its current level
    pub fn open(&mut self) {
        self.open = true;
        self.reset_cursor();
    }

    /// Back to the root with the menu open
    pub fn reset(&mut self) {
        self.path.clear();
        self.open();
    }

    /// Handle a host action against the rows of the current view
    pub fn handle_action(&mut self, action: PickerAction) -> PickerResult<ActionOutcome> {
        match action {
            PickerAction::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                Ok(ActionOutcome::Continue)
            }
            PickerAction::Down => {
                if self.cursor + 1 < self.render().row_count() {
                    self.cursor += 1;
                }
                Ok(ActionOutcome::Continue)
            }
            PickerAction::Back => {
                self.back();
                Ok(ActionOutcome::Continue)
            }
            PickerAction::Quit => Ok(ActionOutcome::Quit),
            PickerAction::Activate => {
                let view = self.render();
                let label = match view.rows().get(self.cursor) {
                    Some(Row::Back) => None,
                    Some(Row::Item(item)) => Some(item.label.clone()),
                    None => return Ok(ActionOutcome::Continue),
                };
                match label {
                    None => {
                        self.back();
                        Ok(ActionOutcome::Continue)
                    }
                    Some(label) => match self.choose(&label)? {
                        Choice::Entered { .. } => Ok(ActionOutcome::Continue),
                        Choice::Selected(selection) => Ok(ActionOutcome::Selected(selection)),
                    },
                }
            }
        }
    }

    /// Replay clicks along `path`; the last label must be a leaf.
    ///
    /// A leaf followed by more labels is rejected before anything is
    /// selected.
    pub fn select_path(&mut self, path: &NavigationPath) -> PickerResult<Selection> {
        let labels = path.labels();
        for (i, label) in labels.iter().enumerate() {
            if let Some(next) = labels.get(i + 1) {
                let view = self.render();
                if view.item(label).is_some_and(MenuItem::is_leaf) {
                    return Err(PickerError::UnknownChoice {
                        label: next.clone(),
                    });
                }
            }
            if let Choice::Selected(selection) = self.choose(label)? {
                return Ok(selection);
            }
        }
        Err(PickerError::NotALeaf {
            path: path.joined(&self.options.separator),
        })
    }

    fn reset_cursor(&mut self) {
        self.cursor = self.render().first_item_row();
    }
}
