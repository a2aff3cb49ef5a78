use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Unique identifier for user records
pub type UserId = i64;

/// Role attached to a user record
///
/// Roles outside the known set are kept verbatim and rendered with the
/// default badge treatment instead of failing.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Moderator,
    User,
    Other(String),
}

impl Role {
    /// Role name as stored in user records
    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "admin",
            Role::Moderator => "moderator",
            Role::User => "user",
            Role::Other(name) => name,
        }
    }

    /// Badge color for the role (admin red, moderator yellow, rest green)
    pub fn badge_color(&self) -> Color {
        match self {
            Role::Admin => Color::Red,
            Role::Moderator => Color::Yellow,
            Role::User | Role::Other(_) => Color::Green,
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_str() {
            "admin" => Role::Admin,
            "moderator" => Role::Moderator,
            "user" => Role::User,
            _ => Role::Other(value),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A user record supplied by the caller
///
/// Immutable from the viewer's perspective; the viewer never creates or
/// edits records, it only filters and displays them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl User {
    /// Create a new user record
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            role,
        }
    }
}
