//! `document.cookie` session storage

use chrono::Utc;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use crate::login::constants::TOKEN_COOKIE;
use crate::login::{
  clear_cookie_string, find_cookie, set_cookie_string, LoginError, SessionStore, SessionToken,
};

fn html_document() -> Result<HtmlDocument, LoginError> {
  web_sys::window()
    .and_then(|w| w.document())
    .and_then(|d| d.dyn_into::<HtmlDocument>().ok())
    .ok_or_else(|| LoginError::Storage("no HTML document available".to_string()))
}

fn write_cookie(assignment: &str) -> Result<(), LoginError> {
  html_document()?
    .set_cookie(assignment)
    .map_err(|e| LoginError::Storage(format!("{:?}", e)))
}

/// Session token kept in the `jwt_token` browser cookie
#[derive(Debug, Clone, Copy)]
pub struct DocumentCookieStore {
  name: &'static str,
}

impl DocumentCookieStore {
  pub fn new() -> Self {
    Self { name: TOKEN_COOKIE }
  }
}

impl Default for DocumentCookieStore {
  fn default() -> Self {
    Self::new()
  }
}

impl SessionStore for DocumentCookieStore {
  fn token(&self) -> Option<SessionToken> {
    let header = html_document().ok()?.cookie().ok()?;
    find_cookie(&header, self.name).map(SessionToken::new)
  }

  fn store(&self, token: &SessionToken) -> Result<(), LoginError> {
    write_cookie(&set_cookie_string(self.name, token, Utc::now()))
  }

  fn clear(&self) -> Result<(), LoginError> {
    write_cookie(&clear_cookie_string(self.name))
  }
}
