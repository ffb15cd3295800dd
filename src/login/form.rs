//! Login form state and the render decision

use serde::{Deserialize, Serialize};

use super::constants::HOME_ROUTE;

/// State owned by the login form
///
/// Mutated only by the two field controllers and the failure path. Never
/// persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
  pub username: String,
  pub password: String,
  pub show_error_msg: bool,
  pub error_msg: String,
}

impl FormState {
  pub fn new() -> Self {
    Self::default()
  }

  /// Username input controller
  pub fn set_username(&mut self, value: impl Into<String>) {
    self.username = value.into();
  }

  /// Password input controller
  pub fn set_password(&mut self, value: impl Into<String>) {
    self.password = value.into();
  }

  /// Record a rejected login. The entered credentials stay untouched.
  pub fn reject(&mut self, message: impl Into<String>) {
    self.show_error_msg = true;
    self.error_msg = message.into();
  }

  /// Snapshot of the fields as they would be submitted right now
  pub fn credentials(&self) -> Credentials {
    Credentials {
      username: self.username.clone(),
      password: self.password.clone(),
    }
  }

  /// Inline banner text, if one should be shown
  pub fn error_banner(&self) -> Option<String> {
    self
      .show_error_msg
      .then(|| format!("*{}", self.error_msg))
  }
}

/// Request body posted to the authentication endpoint
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
  pub username: String,
  pub password: String,
}

impl std::fmt::Debug for Credentials {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Credentials")
      .field("username", &self.username)
      .field("password", &"<redacted>")
      .finish()
  }
}

/// Everything the form displays
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormView {
  pub username: String,
  pub password: String,
  pub error_banner: Option<String>,
}

/// What the login route shows
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginView {
  /// A session already exists; send the user home instead
  Redirect { to: &'static str },
  Form(FormView),
}

/// Decide what the login route shows
///
/// `authenticated` is the result of the session query. The form and the
/// redirect are mutually exclusive; there is no loading state.
pub fn render(authenticated: bool, state: &FormState) -> LoginView {
  if authenticated {
    return LoginView::Redirect { to: HOME_ROUTE };
  }
  LoginView::Form(FormView {
    username: state.username.clone(),
    password: state.password.clone(),
    error_banner: state.error_banner(),
  })
}
