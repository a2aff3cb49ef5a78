//! Event handling for the viewer

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Mode};

/// Poll for events with timeout
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Result of handling a key event
pub enum HandleResult {
    /// Continue running
    Continue,
    /// Quit the application
    Quit,
    /// Hand the highlighted user to the selection callback
    Select,
}

/// Handle a key event
pub fn handle_key(app: &mut App, key: KeyEvent) -> HandleResult {
    // Global quit shortcuts (Ctrl+C, Ctrl+Q)
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => return HandleResult::Quit,
            _ => {}
        }
    }

    // While loading, the viewer ignores its inputs; only quitting works
    if app.loading {
        return match key.code {
            KeyCode::Char('q') => HandleResult::Quit,
            _ => HandleResult::Continue,
        };
    }

    match app.mode {
        Mode::Normal => handle_normal_mode(app, key),
        Mode::Search => handle_search_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut App, key: KeyEvent) -> HandleResult {
    match key.code {
        // Quit
        KeyCode::Char('q') => HandleResult::Quit,

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => {
            app.select_next();
            HandleResult::Continue
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.select_prev();
            HandleResult::Continue
        }
        KeyCode::Home | KeyCode::Char('g') => {
            app.select_first();
            HandleResult::Continue
        }
        KeyCode::End | KeyCode::Char('G') => {
            app.select_last();
            HandleResult::Continue
        }

        // Select the highlighted row
        KeyCode::Enter => {
            if app.selected_user().is_some() {
                HandleResult::Select
            } else {
                HandleResult::Continue
            }
        }

        // Search
        KeyCode::Char('/') => {
            app.enter_search();
            HandleResult::Continue
        }

        // Esc drops an active filter
        KeyCode::Esc => {
            if app.search.is_active() {
                app.clear_search();
                app.set_status("Filter cleared");
            }
            HandleResult::Continue
        }

        _ => HandleResult::Continue,
    }
}

/// Handle keys in search mode
fn handle_search_mode(app: &mut App, key: KeyEvent) -> HandleResult {
    match key.code {
        // Cancel: back to normal with the term cleared
        KeyCode::Esc => {
            app.exit_mode();
            app.clear_search();
            HandleResult::Continue
        }
        // Commit: keep the term, back to normal
        KeyCode::Enter => {
            app.exit_mode();
            HandleResult::Continue
        }
        KeyCode::Backspace => {
            app.search_pop();
            HandleResult::Continue
        }
        KeyCode::Char(c) => {
            app.search_push(c);
            HandleResult::Continue
        }
        _ => HandleResult::Continue,
    }
}
