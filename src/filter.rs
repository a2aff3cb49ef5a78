//! Search term state and substring filtering for the roster view
//!
//! Filtering is recomputed from the full list on every change to either
//! the list or the term. No scoring, no reordering, no caching.

use crate::user::User;

/// Search term state
///
/// The term is kept exactly as typed; trimming only decides whether the
/// filter applies at all, never what it matches.
#[derive(Debug, Default)]
pub struct SearchState {
    /// Current search term
    pub query: String,
}

impl SearchState {
    /// Create an empty search state
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a search term is currently active
    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
    }

    /// Append a character to the term
    pub fn push(&mut self, c: char) {
        self.query.push(c);
    }

    /// Delete the last character of the term
    pub fn pop(&mut self) {
        self.query.pop();
    }

    /// Clear the term
    pub fn clear(&mut self) {
        self.query.clear();
    }
}

/// Filter users by case-insensitive substring match on name or email
///
/// A term that trims to empty leaves the list unchanged. Otherwise the
/// untrimmed term is lowercased and matched as a substring against the
/// lowercased name and email of each record. Output order follows input
/// order; the result is always a subset of `users`.
pub fn filter_users<'a>(users: &'a [User], query: &str) -> Vec<&'a User> {
    if query.trim().is_empty() {
        return users.iter().collect();
    }

    let needle = query.to_lowercase();
    users
        .iter()
        .filter(|user| {
            user.name.to_lowercase().contains(&needle)
                || user.email.to_lowercase().contains(&needle)
        })
        .collect()
}
