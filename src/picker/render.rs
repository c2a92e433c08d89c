//! Terminal rendering functions for the picker.
//!
//! Everything renders to plain strings; the interactive loop and the
//! non-interactive commands print them.

use std::ops::Range;

use crossterm::style::Stylize;

use crate::taxonomy::NavigationPath;
use crate::ui::theme::colors;
use crate::ui::width::{display_width, truncate_end};
use crate::ui::Icons;

use super::menu::Selection;
use super::view::{MenuView, Row};

/// How menus are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStyle {
    pub icons: Icons,
    pub color: bool,
    /// Terminal columns available per line
    pub width: u16,
    /// Terminal rows; `None` when output is not a screen
    pub height: Option<u16>,
}

impl RenderStyle {
    pub fn new(unicode: bool, color: bool, width: u16) -> Self {
        Self {
            icons: Icons::new(unicode),
            color,
            width,
            height: None,
        }
    }

    pub fn with_height(mut self, height: u16) -> Self {
        self.height = Some(height);
        self
    }

    /// No colour, 80 columns
    pub fn plain(unicode: bool) -> Self {
        Self::new(unicode, false, 80)
    }

    fn fit(&self, line: &str) -> String {
        truncate_end(line, usize::from(self.width), self.icons.ellipsis)
    }
}

/// Render one menu level. `cursor` marks the active row, if any.
pub fn render_menu(view: &MenuView, cursor: Option<usize>, style: &RenderStyle) -> String {
    render_menu_window(view, cursor, style, usize::MAX)
}

/// Render one menu level in at most `max_rows` lines below the header.
///
/// Rows outside the window around the cursor are replaced by scroll
/// markers.
pub fn render_menu_window(
    view: &MenuView,
    cursor: Option<usize>,
    style: &RenderStyle,
    max_rows: usize,
) -> String {
    let mut out = String::new();

    if let Some(header) = &view.header {
        let line = style.fit(&format!("{} {}", style.icons.header, header));
        out.push_str(&paint(&line, colors::HEADER, style.color));
        out.push('\n');
    }

    let pad = " ".repeat(display_width(style.icons.pointer) + 1);
    let rows = view.rows();
    let window = scroll_window(rows.len(), cursor.unwrap_or(0), max_rows);

    if window.start > 0 {
        let line = format!("{}{} {} more", pad, style.icons.more_above, window.start);
        out.push_str(&paint(&style.fit(&line), colors::DIM, style.color));
        out.push('\n');
    }

    for (i, row) in rows.into_iter().enumerate() {
        if !window.contains(&i) {
            continue;
        }
        let is_active = cursor == Some(i);
        let pointer = if is_active {
            format!("{} ", style.icons.pointer)
        } else {
            pad.clone()
        };

        let (icon, text) = match row {
            Row::Back => (style.icons.back, view.back.as_deref().unwrap_or_default()),
            Row::Item(item) if item.is_leaf() => (style.icons.leaf, item.display.as_str()),
            Row::Item(item) => (style.icons.branch, item.display.as_str()),
        };

        let line = style.fit(&format!("{}{} {}", pointer, icon, text));
        if is_active {
            out.push_str(&paint(&line, colors::ACTIVE, style.color));
        } else {
            out.push_str(&line);
        }
        out.push('\n');
    }

    if window.end < view.row_count() {
        let hidden = view.row_count() - window.end;
        let line = format!("{}{} {} more", pad, style.icons.more_below, hidden);
        out.push_str(&paint(&style.fit(&line), colors::DIM, style.color));
        out.push('\n');
    }

    if view.items.is_empty() {
        let line = format!("{}(no categories)", pad);
        out.push_str(&paint(&line, colors::DIM, style.color));
        out.push('\n');
    }

    out
}

/// Rows to draw so that the cursor stays on screen. Two of `max_rows` go to
/// the scroll markers once the level overflows.
fn scroll_window(total: usize, cursor: usize, max_rows: usize) -> Range<usize> {
    if total <= max_rows {
        return 0..total;
    }
    let markers = if max_rows >= 3 { 2 } else { 0 };
    let visible = (max_rows - markers).max(1);
    let start = cursor.saturating_sub(visible / 2).min(total - visible);
    start..start + visible
}

/// Render the path from the root to the displayed level
pub fn render_breadcrumb(path: &NavigationPath, separator: &str, style: &RenderStyle) -> String {
    let mut line = String::from("All categories");
    for label in path.labels() {
        line.push_str(separator);
        line.push_str(label);
    }
    paint(&style.fit(&line), colors::DIM, style.color)
}

/// Render a completed selection
pub fn render_selection(selection: &Selection, separator: &str, style: &RenderStyle) -> String {
    format!(
        "{} {} (id {})",
        style.icons.selected,
        selection.path_string(separator),
        selection.id
    )
}

/// Render the help bar showing keyboard shortcuts
pub fn render_help_bar() -> String {
    String::from(
        "[Enter] Open / select    [Backspace] Back    [q] Quit\n\
         (Use ↑↓ to move, → to open, ← to go back)",
    )
}

fn paint(s: &str, color: crossterm::style::Color, enabled: bool) -> String {
    if enabled {
        format!("{}", s.with(color))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::CategoryPicker;
    use crate::taxonomy::{from_json_str, Category, CategoryId, Taxonomy};

    fn animals() -> Taxonomy {
        from_json_str(r#"{"Animals": {"Dogs": {"id": "1"}, "Cats": {"id": "2"}}, "id": "0"}"#)
            .unwrap()
    }

    #[test]
    fn render_root_ascii() {
        let taxonomy = animals();
        let picker = CategoryPicker::new(&taxonomy);
        let rendered = render_menu(&picker.render(), Some(0), &RenderStyle::plain(false));
        assert_eq!(rendered, "> + Animals >\n");
    }

    #[test]
    fn render_level_with_header_and_back() {
        let taxonomy = animals();
        let mut picker = CategoryPicker::new(&taxonomy);
        picker.choose("Animals").unwrap();

        let rendered = render_menu(
            &picker.render(),
            Some(picker.cursor_position()),
            &RenderStyle::plain(false),
        );
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines, ["# Animals", "  < < Back", "> - Dogs", "  - Cats"]);
    }

    #[test]
    fn render_without_cursor_has_no_pointer() {
        let taxonomy = animals();
        let picker = CategoryPicker::new(&taxonomy);
        let rendered = render_menu(&picker.render(), None, &RenderStyle::plain(true));
        assert_eq!(rendered, "  ▶ Animals >\n");
    }

    #[test]
    fn render_empty_level() {
        let taxonomy = Taxonomy::default();
        let picker = CategoryPicker::new(&taxonomy);
        let rendered = render_menu(&picker.render(), Some(0), &RenderStyle::plain(false));
        assert!(rendered.contains("(no categories)"));
    }

    #[test]
    fn render_truncates_to_width() {
        let taxonomy = from_json_str(
            r#"{"Animals & Pet Supplies & Everything Else": {"id": "1"}}"#,
        )
        .unwrap();
        let picker = CategoryPicker::new(&taxonomy);
        let style = RenderStyle::new(false, false, 20);
        let rendered = render_menu(&picker.render(), None, &style);
        let line = rendered.lines().next().unwrap();
        assert_eq!(display_width(line), 20);
        assert!(line.ends_with("..."));
    }

    #[test]
    fn render_active_row_colored() {
        // crossterm drops ANSI colors itself when NO_COLOR is set
        if std::env::var_os("NO_COLOR").is_some() {
            return;
        }
        let taxonomy = animals();
        let picker = CategoryPicker::new(&taxonomy);
        let style = RenderStyle::new(true, true, 80);
        let rendered = render_menu(&picker.render(), Some(0), &style);
        assert!(rendered.contains('\u{1b}'), "active row should carry ANSI color");
    }

    fn long_level() -> Taxonomy {
        Taxonomy::new(
            (0..30)
                .map(|i| Category::leaf(format!("Item {i:02}"), CategoryId::new(i.to_string())))
                .collect(),
        )
    }

    #[test]
    fn short_level_is_not_windowed() {
        let taxonomy = animals();
        let picker = CategoryPicker::new(&taxonomy);
        let view = picker.render();
        let style = RenderStyle::plain(false);
        assert_eq!(
            render_menu_window(&view, Some(0), &style, 10),
            render_menu(&view, Some(0), &style)
        );
    }

    #[test]
    fn window_keeps_cursor_visible() {
        let taxonomy = long_level();
        let picker = CategoryPicker::new(&taxonomy);
        let rendered = render_menu_window(&picker.render(), Some(25), &RenderStyle::plain(false), 10);
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines.len(), 10);
        assert!(lines.contains(&"> - Item 25"), "cursor row missing:\n{rendered}");
        assert!(!rendered.contains("Item 00"));
        assert_eq!(lines[0], "  ^ 21 more");
        assert_eq!(lines[9], "  v 1 more");
    }

    #[test]
    fn window_at_top_has_no_upper_marker() {
        let taxonomy = long_level();
        let picker = CategoryPicker::new(&taxonomy);
        let rendered = render_menu_window(&picker.render(), Some(0), &RenderStyle::plain(false), 10);
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "> - Item 00");
        assert_eq!(lines[8], "  v 22 more");
    }

    #[test]
    fn breadcrumb_lists_path() {
        let path = NavigationPath::from_labels(["Animals", "Dogs"]);
        let crumb = render_breadcrumb(&path, " > ", &RenderStyle::plain(true));
        assert_eq!(crumb, "All categories > Animals > Dogs");
    }

    #[test]
    fn selection_line() {
        let selection = Selection {
            id: CategoryId::new("1"),
            label: "Dogs".to_string(),
            path: NavigationPath::from_labels(["Animals", "Dogs"]),
        };
        assert_eq!(
            render_selection(&selection, " > ", &RenderStyle::plain(false)),
            "[OK] Animals > Dogs (id 1)"
        );
    }

    #[test]
    fn help_bar_shows_shortcuts() {
        let help = render_help_bar();
        assert!(help.contains("[Enter]"));
        assert!(help.contains("[Backspace] Back"));
        assert!(help.contains("[q] Quit"));
    }
}
