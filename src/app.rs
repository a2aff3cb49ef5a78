//! Core application state and mode management

use ratatui::style::Color;

use crate::filter::{filter_users, SearchState};
use crate::user::User;

/// Input mode for the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigate rows, select, quit
    #[default]
    Normal,
    /// Focused text input editing the search term
    Search,
}

impl Mode {
    /// Display name for the status bar
    pub fn display_name(&self) -> &'static str {
        match self {
            Mode::Normal => "NORMAL",
            Mode::Search => "SEARCH",
        }
    }

    /// Status bar color for the mode
    pub fn color(&self) -> Color {
        match self {
            Mode::Normal => Color::Cyan,
            Mode::Search => Color::Yellow,
        }
    }
}

/// Main application state
///
/// Holds the caller-supplied list and the viewer's own transient state.
/// The filtered view is a projection computed on demand from the list and
/// the search term; it is never stored.
#[derive(Debug)]
pub struct App {
    /// Current input mode
    pub mode: Mode,
    /// Caller-supplied user records
    users: Vec<User>,
    /// Loading flag supplied by the caller
    pub loading: bool,
    /// Search term state
    pub search: SearchState,
    /// Highlighted row in the filtered view
    pub selected_index: usize,
    /// Status message (shown in the status bar)
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App over a caller-supplied list
    pub fn new(users: Vec<User>, loading: bool) -> Self {
        Self {
            mode: Mode::Normal,
            users,
            loading,
            search: SearchState::new(),
            selected_index: 0,
            status_message: None,
        }
    }

    /// Replace the supplied list
    ///
    /// The search term is reset along with the selection, so the new list
    /// is shown unfiltered.
    pub fn set_users(&mut self, users: Vec<User>) {
        self.users = users;
        self.search.clear();
        self.selected_index = 0;
    }

    /// The full supplied list
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// The filtered view: subset of the supplied list matching the term
    pub fn visible(&self) -> Vec<&User> {
        filter_users(&self.users, &self.search.query)
    }

    /// Currently highlighted user in the filtered view
    pub fn selected_user(&self) -> Option<&User> {
        self.visible().into_iter().nth(self.selected_index)
    }

    /// Move the highlight down, wrapping at the end
    pub fn select_next(&mut self) {
        let len = self.visible().len();
        if len > 0 {
            self.selected_index = (self.selected_index + 1) % len;
        }
    }

    /// Move the highlight up, wrapping at the start
    pub fn select_prev(&mut self) {
        let len = self.visible().len();
        if len > 0 {
            self.selected_index = self
                .selected_index
                .checked_sub(1)
                .unwrap_or(len.saturating_sub(1));
        }
    }

    /// Jump to the first row
    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    /// Jump to the last row
    pub fn select_last(&mut self) {
        self.selected_index = self.visible().len().saturating_sub(1);
    }

    /// Enter search mode
    pub fn enter_search(&mut self) {
        self.mode = Mode::Search;
        self.clear_status();
    }

    /// Exit current mode back to normal
    pub fn exit_mode(&mut self) {
        self.mode = Mode::Normal;
    }

    /// Append a character to the search term
    pub fn search_push(&mut self, c: char) {
        self.search.push(c);
        self.clamp_selection();
    }

    /// Delete the last character of the search term
    pub fn search_pop(&mut self) {
        self.search.pop();
        self.clamp_selection();
    }

    /// Clear the search term entirely
    pub fn clear_search(&mut self) {
        self.search.clear();
        self.clamp_selection();
    }

    /// Set status message
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Keep the highlight inside the filtered view as it shrinks or grows
    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::Role;

    fn sample_app() -> App {
        App::new(
            vec![
                User::new(1, "Ann", "a@x.com", Role::Admin),
                User::new(2, "Bob", "b@x.com", Role::User),
                User::new(3, "Cleo", "c@x.com", Role::Moderator),
            ],
            false,
        )
    }

    #[test]
    fn test_visible_is_full_list_without_term() {
        let app = sample_app();
        assert_eq!(app.visible().len(), 3);
    }

    #[test]
    fn test_selection_wraps() {
        let mut app = sample_app();
        app.select_prev();
        assert_eq!(app.selected_index, 2);
        app.select_next();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_search_narrows_and_clamps_selection() {
        let mut app = sample_app();
        app.select_last();
        assert_eq!(app.selected_index, 2);

        app.search_push('a');
        app.search_push('n');
        // Only Ann matches; the highlight must land on a real row
        assert_eq!(app.visible().len(), 1);
        assert_eq!(app.selected_index, 0);
        assert_eq!(app.selected_user().unwrap().name, "Ann");
    }

    #[test]
    fn test_selection_survives_empty_view() {
        let mut app = sample_app();
        app.search_push('z');
        app.search_push('z');
        assert!(app.visible().is_empty());
        assert!(app.selected_user().is_none());

        // Navigation on an empty view is a no-op
        app.select_next();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_set_users_resets_term() {
        let mut app = sample_app();
        app.search_push('a');
        assert!(app.search.is_active());

        app.set_users(vec![User::new(9, "Zed", "z@x.com", Role::User)]);
        assert!(!app.search.is_active());
        assert_eq!(app.visible().len(), 1);
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_mode_switching() {
        let mut app = sample_app();
        assert_eq!(app.mode, Mode::Normal);
        app.enter_search();
        assert_eq!(app.mode, Mode::Search);
        app.exit_mode();
        assert_eq!(app.mode, Mode::Normal);
    }
}
