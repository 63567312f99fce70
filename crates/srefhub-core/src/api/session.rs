//! Session token storage.
//!
//! Holds the bearer token attached to every request and, optionally, the
//! file it is persisted in. A 401 from the server evicts both.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::HubResult;

/// File name of the persisted session inside the data directory
pub const SESSION_FILE: &str = "session.json";

/// What gets persisted between runs
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionData {
    pub token: Option<String>,
    /// Account the token belongs to, used for dashboard requests
    pub user_id: Option<String>,
}

#[derive(Debug, Default)]
struct SessionInner {
    data: SessionData,
    path: Option<PathBuf>,
}

/// Shared, cheaply clonable session handle
#[derive(Debug, Clone, Default)]
pub struct Session {
    inner: Arc<RwLock<SessionInner>>,
}

impl Session {
    /// Session that lives only in memory
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// In-memory session pre-populated with a token
    pub fn with_token(token: impl Into<String>) -> Self {
        let session = Self::default();
        session.inner.write().data.token = Some(token.into());
        session
    }

    /// Load the session persisted in `data_dir`, or start empty.
    pub fn open(data_dir: &Path) -> HubResult<Self> {
        let path = data_dir.join(SESSION_FILE);
        let data = match std::fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == ErrorKind::NotFound => SessionData::default(),
            Err(e) => return Err(e.into()),
        };
        debug!(path = %path.display(), authenticated = data.token.is_some(), "Session opened");

        Ok(Self {
            inner: Arc::new(RwLock::new(SessionInner {
                data,
                path: Some(path),
            })),
        })
    }

    pub fn token(&self) -> Option<String> {
        self.inner.read().data.token.clone()
    }

    pub fn user_id(&self) -> Option<String> {
        self.inner.read().data.user_id.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.read().data.token.is_some()
    }

    pub fn data(&self) -> SessionData {
        self.inner.read().data.clone()
    }

    /// Store a new token (and owning user) and persist it.
    ///
    /// The file is written first; if that fails the current session stays.
    pub fn sign_in(&self, token: impl Into<String>, user_id: Option<String>) -> HubResult<()> {
        let data = SessionData {
            token: Some(token.into()),
            user_id,
        };
        let mut inner = self.inner.write();
        if let Some(path) = &inner.path {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, serde_json::to_vec_pretty(&data)?)?;
        }
        inner.data = data;
        info!("Session token stored");
        Ok(())
    }

    /// Forget the token and remove the persisted copy.
    pub fn evict(&self) -> HubResult<()> {
        let mut inner = self.inner.write();
        inner.data = SessionData::default();
        if let Some(path) = &inner.path {
            match std::fs::remove_file(path) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        info!("Session evicted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty_session() {
        let dir = TempDir::new().unwrap();
        let session = Session::open(dir.path()).unwrap();
        assert!(!session.is_authenticated());
        assert!(session.user_id().is_none());
    }

    #[test]
    fn test_sign_in_persists_and_evict_removes() {
        let dir = TempDir::new().unwrap();
        let session = Session::open(dir.path()).unwrap();
        session.sign_in("tok-123", Some("u1".to_string())).unwrap();

        let reopened = Session::open(dir.path()).unwrap();
        assert_eq!(reopened.token().as_deref(), Some("tok-123"));
        assert_eq!(reopened.user_id().as_deref(), Some("u1"));

        reopened.evict().unwrap();
        assert!(!dir.path().join(SESSION_FILE).exists());
        // Evicting twice is fine
        reopened.evict().unwrap();
    }

    #[test]
    fn test_failed_write_keeps_previous_token() {
        let dir = TempDir::new().unwrap();
        let session = Session::open(dir.path()).unwrap();
        session.sign_in("old", Some("u1".to_string())).unwrap();

        // A directory where the file should be makes the write fail
        let file = dir.path().join(SESSION_FILE);
        std::fs::remove_file(&file).unwrap();
        std::fs::create_dir(&file).unwrap();

        assert!(session.sign_in("new", Some("u2".to_string())).is_err());
        assert_eq!(session.token().as_deref(), Some("old"));
        assert_eq!(session.user_id().as_deref(), Some("u1"));
    }

    #[test]
    fn test_clones_share_state() {
        let session = Session::with_token("abc");
        let clone = session.clone();
        clone.evict().unwrap();
        assert!(!session.is_authenticated());
    }
}
