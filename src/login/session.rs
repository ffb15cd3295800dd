//! Session token persistence
//!
//! The form only needs three things from its session storage: read the
//! current token, write a freshly issued one, and clear it. Browser cookies,
//! a file on disk and an in-memory cell all sit behind [`SessionStore`].

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use super::constants::TOKEN_TTL_DAYS;
use super::error::LoginError;

/// Opaque credential issued by the authentication service
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
  pub fn new(token: impl Into<String>) -> Self {
    Self(token.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl std::fmt::Debug for SessionToken {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str("SessionToken(<redacted>)")
  }
}

/// Storage for the session token
pub trait SessionStore {
  /// The stored token, if one exists and has not expired
  fn token(&self) -> Option<SessionToken>;

  /// Persist `token` with the standard session lifetime
  fn store(&self, token: &SessionToken) -> Result<(), LoginError>;

  fn clear(&self) -> Result<(), LoginError>;

  /// Session presence query used by the redirect guard
  fn is_authenticated(&self) -> bool {
    self.token().is_some()
  }
}

impl<S: SessionStore + ?Sized> SessionStore for std::rc::Rc<S> {
  fn token(&self) -> Option<SessionToken> {
    (**self).token()
  }

  fn store(&self, token: &SessionToken) -> Result<(), LoginError> {
    (**self).store(token)
  }

  fn clear(&self) -> Result<(), LoginError> {
    (**self).clear()
  }
}

impl<S: SessionStore + ?Sized> SessionStore for std::sync::Arc<S> {
  fn token(&self) -> Option<SessionToken> {
    (**self).token()
  }

  fn store(&self, token: &SessionToken) -> Result<(), LoginError> {
    (**self).store(token)
  }

  fn clear(&self) -> Result<(), LoginError> {
    (**self).clear()
  }
}

/// Process-local session storage
#[derive(Debug, Default)]
pub struct MemorySessionStore {
  token: Mutex<Option<SessionToken>>,
}

impl MemorySessionStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_token(token: SessionToken) -> Self {
    Self {
      token: Mutex::new(Some(token)),
    }
  }
}

impl SessionStore for MemorySessionStore {
  fn token(&self) -> Option<SessionToken> {
    self.token.lock().clone()
  }

  fn store(&self, token: &SessionToken) -> Result<(), LoginError> {
    *self.token.lock() = Some(token.clone());
    Ok(())
  }

  fn clear(&self) -> Result<(), LoginError> {
    *self.token.lock() = None;
    Ok(())
  }
}

// =============================================================================
// Cookie text
// =============================================================================

const COOKIE_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Expiry instant for a session created at `now`
pub fn session_expiry(now: DateTime<Utc>) -> DateTime<Utc> {
  now + Duration::days(TOKEN_TTL_DAYS)
}

/// `document.cookie` assignment that stores `token` under `name`
pub fn set_cookie_string(name: &str, token: &SessionToken, now: DateTime<Utc>) -> String {
  format!(
    "{}={}; expires={}; path=/",
    name,
    urlencoding::encode(token.as_str()),
    session_expiry(now).format(COOKIE_DATE_FORMAT)
  )
}

/// `document.cookie` assignment that expires the cookie `name`
pub fn clear_cookie_string(name: &str) -> String {
  format!("{}=; expires=Thu, 01 Jan 1970 00:00:00 GMT; path=/", name)
}

/// Look up `name` in a `document.cookie` style header
///
/// A cookie that is present with an empty value still counts as defined.
pub fn find_cookie(header: &str, name: &str) -> Option<String> {
  header
    .split(';')
    .filter_map(|pair| pair.trim().split_once('='))
    .find(|(key, _)| *key == name)
    .map(|(_, value)| match urlencoding::decode(value) {
      Ok(decoded) => decoded.into_owned(),
      Err(_) => value.to_string(),
    })
}
