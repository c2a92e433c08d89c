//! Category Picker
//!
//! A drill-down menu over a [`Taxonomy`](crate::taxonomy::Taxonomy): one
//! level at a time, a back control below the root, and a leaf choice that
//! fills the output fields and closes the menu.
//!
//! # Module Structure
//!
//! - `menu` - CategoryPicker state machine and action handling
//! - `view` - MenuView produced by `render()`
//! - `sink` - SelectionSink output slots and FormFields
//! - `render` - Terminal rendering functions
//! - `input` - Keyboard input handling and interactive loop

mod input;
mod menu;
mod render;
mod sink;
mod view;

pub use input::{key_to_action, run_interactive};
pub use menu::{
    ActionOutcome, CategoryPicker, Choice, PickerAction, PickerOptions, PickerState, Selection,
};
pub use render::{
    render_breadcrumb, render_help_bar, render_menu, render_menu_window, render_selection, RenderStyle,
};
pub use sink::{FormFields, SelectionSink};
pub use view::{ItemKind, MenuItem, MenuView, Row};
