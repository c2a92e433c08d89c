use crossterm::style::Color;

/// Design tokens for the picker UI.
///
/// All icons used by the terminal host come from this module.
pub mod colors {
    use super::Color;

    /// Active row
    pub const ACTIVE: Color = Color::Cyan;
    /// Header and breadcrumb
    pub const HEADER: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const POINTER: &str = "❯";
    pub const BRANCH: &str = "▶";
    pub const LEAF: &str = "•";
    pub const BACK: &str = "↩";
    pub const HEADER: &str = "▼";
    pub const SELECTED: &str = "✓";
    pub const ELLIPSIS: &str = "…";
    pub const MORE_ABOVE: &str = "↑";
    pub const MORE_BELOW: &str = "↓";
}

pub mod icons_ascii {
    pub const POINTER: &str = ">";
    pub const BRANCH: &str = "+";
    pub const LEAF: &str = "-";
    pub const BACK: &str = "<";
    pub const HEADER: &str = "#";
    pub const SELECTED: &str = "[OK]";
    pub const ELLIPSIS: &str = "...";
    pub const MORE_ABOVE: &str = "^";
    pub const MORE_BELOW: &str = "v";
}

/// Icon set picked once per session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icons {
    pub pointer: &'static str,
    pub branch: &'static str,
    pub leaf: &'static str,
    pub back: &'static str,
    pub header: &'static str,
    pub selected: &'static str,
    pub ellipsis: &'static str,
    /// Scroll markers when a level is taller than the screen
    pub more_above: &'static str,
    pub more_below: &'static str,
}

impl Icons {
    pub fn new(unicode: bool) -> Self {
        if unicode {
            Self {
                pointer: icons::POINTER,
                branch: icons::BRANCH,
                leaf: icons::LEAF,
                back: icons::BACK,
                header: icons::HEADER,
                selected: icons::SELECTED,
                ellipsis: icons::ELLIPSIS,
                more_above: icons::MORE_ABOVE,
                more_below: icons::MORE_BELOW,
            }
        } else {
            Self {
                pointer: icons_ascii::POINTER,
                branch: icons_ascii::BRANCH,
                leaf: icons_ascii::LEAF,
                back: icons_ascii::BACK,
                header: icons_ascii::HEADER,
                selected: icons_ascii::SELECTED,
                ellipsis: icons_ascii::ELLIPSIS,
                more_above: icons_ascii::MORE_ABOVE,
                more_below: icons_ascii::MORE_BELOW,
            }
        }
    }
}

/// Prompt theme for dialoguer-driven commands (`search`)
pub fn prompt_theme(color: bool) -> Box<dyn dialoguer::theme::Theme> {
    if color {
        Box::new(dialoguer::theme::ColorfulTheme::default())
    } else {
        Box::new(dialoguer::theme::SimpleTheme)
    }
}
