//! Output slots written when a leaf is chosen.

use serde::Serialize;

use crate::taxonomy::CategoryId;

/// Receiver of a completed selection.
///
/// The picker calls every method once per leaf selection, in declaration
/// order.
pub trait SelectionSink {
    /// Text of the control that opens the menu
    fn set_display(&mut self, label: &str);
    /// Hidden id field
    fn set_category_id(&mut self, id: &CategoryId);
    /// Hidden path-string field (`Animals > Dogs`)
    fn set_category_path(&mut self, path: &str);
    fn close_menu(&mut self);
}

/// In-memory form fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormFields {
    pub display: Option<String>,
    pub category_id: Option<CategoryId>,
    pub category_path: Option<String>,
    pub menu_open: bool,
}

impl Default for FormFields {
    fn default() -> Self {
        Self {
            display: None,
            category_id: None,
            category_path: None,
            menu_open: true,
        }
    }
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once a leaf has been written
    pub fn is_filled(&self) -> bool {
        self.category_id.is_some() && self.category_path.is_some()
    }
}

impl SelectionSink for FormFields {
    fn set_display(&mut self, label: &str) {
        self.display = Some(label.to_string());
    }

    fn set_category_id(&mut self, id: &CategoryId) {
        self.category_id = Some(id.clone());
    }

    fn set_category_path(&mut self, path: &str) {
        self.category_path = Some(path.to_string());
    }

    fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

impl<S: SelectionSink + ?Sized> SelectionSink for &mut S {
    fn set_display(&mut self, label: &str) {
        (**self).set_display(label);
    }

    fn set_category_id(&mut self, id: &CategoryId) {
        (**self).set_category_id(id);
    }

    fn set_category_path(&mut self, path: &str) {
        (**self).set_category_path(path);
    }

    fn close_menu(&mut self) {
        (**self).close_menu();
    }
}
