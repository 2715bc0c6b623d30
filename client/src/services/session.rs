//! # Session Store
//!
//! Persists the login token across launches so users are not asked to sign
//! in every time.
//!
//! The store is deliberately forgiving: a missing, unreadable, or malformed
//! token file all mean "no session" and get logged, never surfaced as a
//! crash. An expired token on disk is treated the same as no token and the
//! file is cleared eagerly so the stale credential does not linger.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use shared::LoginToken;

/// Default on-disk location of the session file.
fn default_session_path() -> PathBuf {
    PathBuf::from("./3moji-session.json")
}

/// JSON-file-backed persistence for the login token.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store at the default path.
    pub fn new() -> Self {
        Self {
            path: default_session_path(),
        }
    }

    /// Store at an explicit path (tests point this at a temp dir).
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Persist `token`, or clear the stored session when `None`.
    ///
    /// Failures are logged and swallowed. A save that does not stick means
    /// the user signs in again next launch, which beats failing the login
    /// they just completed.
    pub fn save(&self, token: Option<&LoginToken>) {
        let result = match token {
            Some(token) => serde_json::to_string(token)
                .map_err(|e| e.to_string())
                .and_then(|json| fs::write(&self.path, json).map_err(|e| e.to_string())),
            None => match fs::remove_file(&self.path) {
                Err(e) if e.kind() != ErrorKind::NotFound => Err(e.to_string()),
                _ => Ok(()),
            },
        };

        match result {
            Ok(()) => tracing::debug!(path = ?self.path, stored = token.is_some(), "Session file updated"),
            Err(e) => tracing::error!(path = ?self.path, error = %e, "Failed to update session file"),
        }
    }

    /// Load the stored token, if a valid unexpired one exists.
    ///
    /// Returns `None` for a missing file, unreadable file, unparseable
    /// contents, or an expired token. The expired case also clears the file.
    pub fn load(&self) -> Option<LoginToken> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(path = ?self.path, error = %e, "Failed to read session file");
                return None;
            }
        };

        let token: LoginToken = match serde_json::from_str(&contents) {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(path = ?self.path, error = %e, "Session file is malformed, ignoring");
                return None;
            }
        };

        if token.expired() {
            tracing::info!(path = ?self.path, "Stored session has expired, clearing");
            self.save(None);
            return None;
        }

        Some(token)
    }

    /// Drop any stored session.
    pub fn clear(&self) {
        self.save(None);
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Uuid;

    fn token(valid_until: i64) -> LoginToken {
        LoginToken {
            valid_until,
            uuid: Uuid(42),
            user_email: "a@x.edu".to_string(),
        }
    }

    fn store_in(dir: &tempfile::TempDir) -> SessionStore {
        SessionStore::with_path(dir.path().join("session.json"))
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let t = token(chrono::Utc::now().timestamp() + 3600);

        store.save(Some(&t));
        assert_eq!(store.load(), Some(t));
    }

    #[test]
    fn test_load_without_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(store_in(&dir).load(), None);
    }

    #[test]
    fn test_expired_token_is_absent_and_cleared() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let path = dir.path().join("session.json");

        store.save(Some(&token(chrono::Utc::now().timestamp() - 1)));
        assert!(path.exists());

        assert_eq!(store.load(), None);
        // Expired file is removed eagerly.
        assert!(!path.exists());
    }

    #[test]
    fn test_malformed_file_is_none_not_panic() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(dir.path().join("session.json"), "{not json").unwrap();

        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_save_none_clears() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save(Some(&token(chrono::Utc::now().timestamp() + 3600)));
        store.save(None);
        assert_eq!(store.load(), None);

        // Clearing an already-clear store is fine.
        store.clear();
    }
}
