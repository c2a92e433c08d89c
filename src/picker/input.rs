//! Keyboard input handling and interactive loop.

use std::io::{self, Write};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{cursor, execute, queue, terminal};

use crate::error::PickerResult;

use super::menu::{ActionOutcome, CategoryPicker, PickerAction, Selection};
use super::render::{render_breadcrumb, render_help_bar, render_menu_window, RenderStyle};
use super::sink::SelectionSink;

/// Convert a keyboard event to a PickerAction
pub fn key_to_action(key: KeyEvent) -> Option<PickerAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(PickerAction::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(PickerAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(PickerAction::Down),
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => Some(PickerAction::Activate),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace => Some(PickerAction::Back),
        KeyCode::Char('q') | KeyCode::Esc => Some(PickerAction::Quit),
        _ => None,
    }
}

/// Raw mode and hidden cursor for the lifetime of the value
struct RawTerminal {
    stdout: io::Stdout,
}

impl RawTerminal {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(err);
        }
        Ok(Self { stdout })
    }
}

impl Drop for RawTerminal {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Run the picker interactively.
/// Returns the selection, or None if the user quit.
pub fn run_interactive<S: SelectionSink>(
    picker: &mut CategoryPicker<'_, S>,
    style: &RenderStyle,
) -> PickerResult<Option<Selection>> {
    let mut style = *style;
    let mut term = RawTerminal::enter()?;
    draw(&mut term.stdout, picker, &style)?;

    loop {
        let key = match event::read()? {
            Event::Key(key) => key,
            Event::Resize(width, height) => {
                style.width = width;
                style.height = Some(height);
                draw(&mut term.stdout, picker, &style)?;
                continue;
            }
            _ => continue,
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let Some(action) = key_to_action(key) else {
            continue;
        };

        match picker.handle_action(action)? {
            ActionOutcome::Continue => draw(&mut term.stdout, picker, &style)?,
            ActionOutcome::Selected(selection) => return Ok(Some(selection)),
            ActionOutcome::Quit => return Ok(None),
        }
    }
}

/// Breadcrumb, blank line, header and the two help lines
const FRAME_LINES: usize = 5;

fn draw<S: SelectionSink>(
    out: &mut impl Write,
    picker: &CategoryPicker<'_, S>,
    style: &RenderStyle,
) -> io::Result<()> {
    queue!(out, terminal::Clear(terminal::ClearType::All), cursor::MoveTo(0, 0))?;

    let max_rows = style
        .height
        .map_or(usize::MAX, |height| usize::from(height).saturating_sub(FRAME_LINES));
    let sections = [
        render_breadcrumb(picker.path(), &picker.options().separator, style),
        String::new(),
        render_menu_window(&picker.render(), Some(picker.cursor_position()), style, max_rows),
        render_help_bar(),
    ];
    for section in &sections {
        for line in section.lines() {
            write!(out, "{}\r\n", line)?;
        }
        if section.is_empty() {
            write!(out, "\r\n")?;
        }
    }

    out.flush()
}
