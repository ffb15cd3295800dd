//! Credential submission and its outcome

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;
use tracing::{debug, error, info, warn};

use super::constants::{ERROR_FIELD, FALLBACK_REJECTION, HOME_ROUTE, TOKEN_FIELD};
use super::error::LoginError;
use super::form::{render, Credentials, FormState, LoginView};
use super::navigate::Navigator;
use super::session::{SessionStore, SessionToken};

/// Raw reply from the authentication endpoint
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
  pub status: u16,
  pub body: String,
}

impl HttpReply {
  pub fn new(status: u16, body: impl Into<String>) -> Self {
    Self {
      status,
      body: body.into(),
    }
  }

  pub fn is_success(&self) -> bool {
    (200..300).contains(&self.status)
  }
}

/// Transport that delivers credentials to the authentication endpoint
///
/// Futures are not `Send` so browser fetch implementations fit.
#[async_trait(?Send)]
pub trait AuthClient {
  async fn post_credentials(&self, credentials: &Credentials) -> Result<HttpReply, LoginError>;
}

/// Result of one submission as the form sees it
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthOutcome {
  Authenticated(SessionToken),
  Rejected(String),
}

/// Classify an endpoint reply
///
/// Only a 2xx reply carrying a token string authenticates. Anything else is a
/// rejection with the server's message, or a generic one when it sent none.
pub fn interpret(reply: &HttpReply) -> Result<AuthOutcome, LoginError> {
  let body: Value = serde_json::from_str(&reply.body)?;

  if reply.is_success() {
    if let Some(token) = body.get(TOKEN_FIELD).and_then(Value::as_str) {
      return Ok(AuthOutcome::Authenticated(SessionToken::new(token)));
    }
  }

  let message = body
    .get(ERROR_FIELD)
    .and_then(Value::as_str)
    .unwrap_or(FALLBACK_REJECTION);
  Ok(AuthOutcome::Rejected(message.to_string()))
}

/// Send `credentials` and reduce every possible result to an [`AuthOutcome`]
pub async fn submit_credentials<C: AuthClient + ?Sized>(
  client: &C,
  credentials: &Credentials,
) -> AuthOutcome {
  debug!(username = %credentials.username, "Submitting credentials");

  let reply = match client.post_credentials(credentials).await {
    Ok(reply) => reply,
    Err(e) => {
      error!(error = %e, "Login request failed");
      return AuthOutcome::Rejected(e.user_message().to_string());
    }
  };

  match interpret(&reply) {
    Ok(AuthOutcome::Authenticated(token)) => {
      info!(username = %credentials.username, "Login accepted");
      AuthOutcome::Authenticated(token)
    }
    Ok(AuthOutcome::Rejected(message)) => {
      warn!(status = reply.status, %message, "Login rejected");
      AuthOutcome::Rejected(message)
    }
    Err(e) => {
      warn!(status = reply.status, error = %e, "Unreadable login response");
      AuthOutcome::Rejected(e.user_message().to_string())
    }
  }
}

/// Persist a successful outcome and send the user home
///
/// The session write and the navigation never depend on the form still being
/// mounted. Returns the message to show when the login did not go through.
pub fn settle<S, N>(outcome: AuthOutcome, session: &S, navigator: &N) -> Option<String>
where
  S: SessionStore + ?Sized,
  N: Navigator + ?Sized,
{
  match outcome {
    AuthOutcome::Authenticated(token) => match session.store(&token) {
      Ok(()) => {
        navigator.replace(HOME_ROUTE);
        None
      }
      Err(e) => {
        error!(error = %e, "Failed to persist session");
        Some(e.user_message().to_string())
      }
    },
    AuthOutcome::Rejected(message) => Some(message),
  }
}

/// One full submission: guard, request, persist, navigate
///
/// With a session already present no request is made and the user is sent
/// home. The returned message, if any, belongs in the form's error banner.
pub async fn submit_login<C, S, N>(
  client: &C,
  session: &S,
  navigator: &N,
  credentials: &Credentials,
) -> Option<String>
where
  C: AuthClient + ?Sized,
  S: SessionStore + ?Sized,
  N: Navigator + ?Sized,
{
  if session.is_authenticated() {
    debug!("Session present, skipping login request");
    navigator.replace(HOME_ROUTE);
    return None;
  }

  let outcome = submit_credentials(client, credentials).await;
  settle(outcome, session, navigator)
}

/// Host-agnostic driver of the login form
///
/// Every operation takes `&self`; submissions may overlap and the one that
/// resolves last decides the final form state.
pub struct LoginController<C, S, N> {
  client: C,
  session: S,
  navigator: N,
  state: Mutex<FormState>,
}

impl<C, S, N> LoginController<C, S, N>
where
  C: AuthClient,
  S: SessionStore,
  N: Navigator,
{
  pub fn new(client: C, session: S, navigator: N) -> Self {
    Self {
      client,
      session,
      navigator,
      state: Mutex::new(FormState::new()),
    }
  }

  pub fn change_username(&self, value: impl Into<String>) {
    self.state.lock().set_username(value);
  }

  pub fn change_password(&self, value: impl Into<String>) {
    self.state.lock().set_password(value);
  }

  pub fn state(&self) -> FormState {
    self.state.lock().clone()
  }

  pub fn session(&self) -> &S {
    &self.session
  }

  /// Current render decision
  pub fn view(&self) -> LoginView {
    let authenticated = self.session.is_authenticated();
    render(authenticated, &self.state.lock())
  }

  /// Submit the current fields
  pub async fn submit(&self) -> LoginView {
    let credentials = self.state.lock().credentials();
    let rejection =
      submit_login(&self.client, &self.session, &self.navigator, &credentials).await;
    if let Some(message) = rejection {
      self.state.lock().reject(message);
    }
    self.view()
  }
}
