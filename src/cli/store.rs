//! File-backed session storage for the terminal driver

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::login::{session_expiry, LoginError, SessionStore, SessionToken};

#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
  token: SessionToken,
  expires_at: DateTime<Utc>,
}

/// Keeps the session token in a JSON file, honouring cookie-style expiry
#[derive(Debug, Clone)]
pub struct FileSessionStore {
  path: PathBuf,
}

impl FileSessionStore {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  fn load(&self) -> Option<StoredSession> {
    let content = std::fs::read_to_string(&self.path).ok()?;
    match serde_json::from_str(&content) {
      Ok(stored) => Some(stored),
      Err(e) => {
        tracing::warn!(path = %self.path.display(), error = %e, "Ignoring unreadable session file");
        None
      }
    }
  }

  /// Persist `token` as if it had been issued at `now`
  pub fn store_at(&self, token: &SessionToken, now: DateTime<Utc>) -> Result<(), LoginError> {
    if let Some(parent) = self.path.parent() {
      if !parent.as_os_str().is_empty() {
        std::fs::create_dir_all(parent)?;
      }
    }
    let stored = StoredSession {
      token: token.clone(),
      expires_at: session_expiry(now),
    };
    std::fs::write(&self.path, serde_json::to_vec_pretty(&stored)?)?;
    Ok(())
  }

  /// Token still valid at `now`
  pub fn token_at(&self, now: DateTime<Utc>) -> Option<SessionToken> {
    self
      .load()
      .filter(|stored| stored.expires_at > now)
      .map(|stored| stored.token)
  }
}

impl SessionStore for FileSessionStore {
  fn token(&self) -> Option<SessionToken> {
    self.token_at(Utc::now())
  }

  fn store(&self, token: &SessionToken) -> Result<(), LoginError> {
    self
      .store_at(token, Utc::now())
      .map_err(|e| LoginError::Storage(format!("{}: {}", self.path.display(), e)))
  }

  fn clear(&self) -> Result<(), LoginError> {
    match std::fs::remove_file(&self.path) {
      Ok(()) => Ok(()),
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
      Err(e) => Err(LoginError::Storage(format!("{}: {}", self.path.display(), e))),
    }
  }
}
