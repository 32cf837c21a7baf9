//! Key bindings.
//!
//! Translates crossterm key events into [`App`] transitions. The only thing
//! handed back to the caller is a [`SearchRequest`] to execute; everything
//! else is applied to the app directly.

use crate::ui::app::{App, FocusPane, SearchRequest};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) -> Option<SearchRequest> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => app.should_quit = true,
            KeyCode::Char('t') => app.toggle_theme(),
            _ => {}
        }
        return None;
    }

    match app.focus {
        FocusPane::Search => match key.code {
            KeyCode::Enter => return app.submit_search(),
            KeyCode::Esc | KeyCode::Tab => app.focus = FocusPane::Results,
            KeyCode::Backspace => {
                app.input.pop();
            }
            KeyCode::Char(c) => app.input.push(c),
            _ => {}
        },
        FocusPane::Results => match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
            KeyCode::Char('/') | KeyCode::Tab => app.focus = FocusPane::Search,
            KeyCode::Enter => return app.submit_search(),
            KeyCode::Char('t') => app.toggle_theme(),
            KeyCode::Char('l') => app.cycle_language(true),
            KeyCode::Char('L') => app.cycle_language(false),
            KeyCode::Char('s') => app.cycle_sort(true),
            KeyCode::Char('S') => app.cycle_sort(false),
            KeyCode::Char('j') | KeyCode::Down => app.scroll_repos_down(),
            KeyCode::Char('k') | KeyCode::Up => app.scroll_repos_up(),
            _ => {}
        },
    }
    None
}

/// Key hints for the footer.
pub fn help_text(focus: FocusPane) -> &'static str {
    match focus {
        FocusPane::Search => "[Enter] Search  [Esc/Tab] Results  [Ctrl+T] Theme  [Ctrl+C] Quit",
        FocusPane::Results => {
            "[l/L] Language  [s/S] Sort  [j/k] Scroll  [t] Theme  [/] Search  [q] Quit"
        }
    }
}
