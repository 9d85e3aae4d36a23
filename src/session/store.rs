use crate::models::session::Session;
use crate::models::user::PublicUser;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::warn;

/// On-disk shape: exactly two entries, an opaque auth token and the
/// sanitized user as JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SessionFile {
    #[serde(rename = "authToken", skip_serializing_if = "Option::is_none")]
    auth_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<PublicUser>,
}

/// File-backed session store. Single reader/writer, synchronous; the file
/// is rewritten whole on every mutation. A missing or malformed file is
/// treated as "no session", never an error.
pub struct SessionStore {
    path: PathBuf,
    state: Mutex<SessionFile>,
}

impl SessionStore {
    /// Open the store, loading any persisted session. Corrupt JSON is
    /// logged and discarded rather than bubbled up.
    pub fn open(path: PathBuf) -> Self {
        let state = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<SessionFile>(&content) {
                Ok(file) => file,
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        error = %e,
                        "Malformed session file, treating as no session"
                    );
                    SessionFile::default()
                }
            },
            Err(_) => SessionFile::default(),
        };

        Self {
            path,
            state: Mutex::new(state),
        }
    }

    fn persist(&self, state: &SessionFile) -> Result<()> {
        let json = serde_json::to_string_pretty(state)
            .context("Failed to serialize session state")?;
        fs::write(&self.path, json)
            .context(format!("Failed to write session file: {}", self.path.display()))
    }

    pub fn token(&self) -> Option<String> {
        self.state.lock().unwrap().auth_token.clone()
    }

    pub fn set_token(&self, token: &str) {
        let mut state = self.state.lock().unwrap();
        state.auth_token = Some(token.to_string());
        if let Err(e) = self.persist(&state) {
            warn!(error = %e, "Failed to persist session token");
        }
    }

    pub fn user(&self) -> Option<PublicUser> {
        self.state.lock().unwrap().user.clone()
    }

    pub fn set_user(&self, user: &PublicUser) {
        let mut state = self.state.lock().unwrap();
        state.user = Some(user.clone());
        if let Err(e) = self.persist(&state) {
            warn!(error = %e, "Failed to persist session user");
        }
    }

    /// Remove both the token and the cached user.
    pub fn clear(&self) {
        let mut state = self.state.lock().unwrap();
        *state = SessionFile::default();
        if let Err(e) = self.persist(&state) {
            warn!(error = %e, "Failed to persist cleared session");
        }
    }

    /// Token presence is the whole authentication check.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// The full session, when both the token and the cached user exist.
    pub fn session(&self) -> Option<Session> {
        let state = self.state.lock().unwrap();
        match (&state.auth_token, &state.user) {
            (Some(token), Some(user)) => Some(Session {
                token: token.clone(),
                user: user.clone(),
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn test_user() -> PublicUser {
        PublicUser {
            reg_no: "B25ICT0123456".to_string(),
            name: "Test User".to_string(),
            contact: "03001234567".to_string(),
            department: "ICT".to_string(),
        }
    }

    #[test]
    fn test_empty_store_has_no_session() {
        let dir = tempdir().unwrap();
        let store = SessionStore::open(dir.path().join("session.json"));

        assert!(store.token().is_none());
        assert!(store.user().is_none());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_set_and_clear() {
        let dir = tempdir().unwrap();
        let store = SessionStore::open(dir.path().join("session.json"));

        store.set_token("abc123");
        store.set_user(&test_user());
        assert!(store.is_authenticated());
        assert_eq!(store.user().unwrap().reg_no, "B25ICT0123456");

        store.clear();
        assert!(store.token().is_none());
        assert!(store.user().is_none());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_session_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");

        {
            let store = SessionStore::open(path.clone());
            store.set_token("abc123");
            store.set_user(&test_user());
        }

        let reopened = SessionStore::open(path);
        assert_eq!(reopened.token().unwrap(), "abc123");
        assert_eq!(reopened.user().unwrap(), test_user());
    }

    #[test]
    fn test_malformed_file_is_treated_as_no_session() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{not json at all").unwrap();

        let store = SessionStore::open(path);
        assert!(store.token().is_none());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_full_session_needs_both_entries() {
        let dir = tempdir().unwrap();
        let store = SessionStore::open(dir.path().join("session.json"));

        assert!(store.session().is_none());

        store.set_token("abc123");
        assert!(store.session().is_none());

        store.set_user(&test_user());
        let session = store.session().unwrap();
        assert_eq!(session.token, "abc123");
        assert_eq!(session.user.reg_no, "B25ICT0123456");
    }

    #[test]
    fn test_clear_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = SessionStore::open(dir.path().join("session.json"));

        store.clear();
        store.clear();
        assert!(!store.is_authenticated());
    }
}
