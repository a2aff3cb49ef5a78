//! Demo roster loading
//!
//! The viewer itself never reads files; the demo binary uses this module
//! to play the caller's part and supply the list.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::user::{Role, User};

/// Errors while loading a roster file
#[derive(Error, Debug)]
pub enum SourceError {
    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Roster file is not a JSON array of user records
    #[error("Invalid roster in file {path:?}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl SourceError {
    /// Create a JSON error carrying the offending path
    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}

/// Load user records from a JSON array file
pub fn load_users<P: AsRef<Path>>(path: P) -> Result<Vec<User>, SourceError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|err| SourceError::json(path, err))
}

/// Built-in sample roster for the no-args demo
pub fn sample_users() -> Vec<User> {
    vec![
        User::new(1, "Ann Chen", "ann@example.com", Role::Admin),
        User::new(2, "Bob Park", "bob@example.com", Role::User),
        User::new(3, "Cleo Diaz", "cleo@example.com", Role::Moderator),
        User::new(4, "Dmitri Volkov", "dmitri@example.com", Role::User),
        User::new(5, "Ed Moreno", "ed@example.com", Role::User),
        User::new(6, "Fay Okafor", "fay@example.com", Role::Moderator),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_roster() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 1, "name": "Ann", "email": "a@x.com", "role": "admin"}},
                {{"id": 2, "name": "Bob", "email": "b@x.com", "role": "user"}}]"#
        )
        .unwrap();
        file.flush().unwrap();

        let users = load_users(file.path()).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].role, Role::Admin);
        assert_eq!(users[1].name, "Bob");
    }

    #[test]
    fn test_load_malformed_roster() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{\"not\": \"an array\"}}").unwrap();
        file.flush().unwrap();

        let err = load_users(file.path()).unwrap_err();
        assert!(matches!(err, SourceError::Json { .. }));
        assert!(err.to_string().contains("Invalid roster"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_users("/nonexistent/roster.json").unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
    }

    #[test]
    fn test_sample_roster_covers_roles() {
        let users = sample_users();
        assert!(!users.is_empty());
        assert!(users.iter().any(|u| u.role == Role::Admin));
        assert!(users.iter().any(|u| u.role == Role::Moderator));
        assert!(users.iter().any(|u| u.role == Role::User));
    }
}
