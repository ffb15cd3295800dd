//! Login flow tests - submission outcomes, redirect guard, overlapping submits

use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use tokio::sync::oneshot;

use trendz_login::login::{
  submit_login, AuthClient, Credentials, FormState, FormView, HttpReply, LoginController,
  LoginError, LoginView, MemorySessionStore, Navigator, SessionStore, SessionToken,
};

// =============================================================================
// Test doubles
// =============================================================================

/// Replies from a fixed script and remembers what it was sent
#[derive(Default)]
struct ScriptedClient {
  replies: RefCell<VecDeque<Result<HttpReply, LoginError>>>,
  sent: RefCell<Vec<Credentials>>,
}

impl ScriptedClient {
  fn replying(reply: Result<HttpReply, LoginError>) -> Self {
    let client = Self::default();
    client.replies.borrow_mut().push_back(reply);
    client
  }

  fn calls(&self) -> usize {
    self.sent.borrow().len()
  }
}

#[async_trait(?Send)]
impl AuthClient for ScriptedClient {
  async fn post_credentials(&self, credentials: &Credentials) -> Result<HttpReply, LoginError> {
    self.sent.borrow_mut().push(credentials.clone());
    self
      .replies
      .borrow_mut()
      .pop_front()
      .expect("unexpected login request")
  }
}

/// Each request waits until the test releases its reply
#[derive(Default)]
struct GatedClient {
  gates: RefCell<VecDeque<oneshot::Receiver<HttpReply>>>,
}

impl GatedClient {
  fn gate(&self) -> oneshot::Sender<HttpReply> {
    let (tx, rx) = oneshot::channel();
    self.gates.borrow_mut().push_back(rx);
    tx
  }
}

#[async_trait(?Send)]
impl AuthClient for GatedClient {
  async fn post_credentials(&self, _credentials: &Credentials) -> Result<HttpReply, LoginError> {
    let gate = self.gates.borrow_mut().pop_front().expect("no gate prepared");
    gate
      .await
      .map_err(|_| LoginError::Transport("gate dropped".into()))
  }
}

#[derive(Default, Clone)]
struct RecordingNavigator {
  replaced: Rc<RefCell<Vec<String>>>,
}

impl RecordingNavigator {
  fn paths(&self) -> Vec<String> {
    self.replaced.borrow().clone()
  }
}

impl Navigator for RecordingNavigator {
  fn replace(&self, path: &str) {
    self.replaced.borrow_mut().push(path.to_string());
  }
}

fn success(token: &str) -> HttpReply {
  HttpReply::new(200, format!(r#"{{"jwt_token":"{}"}}"#, token))
}

fn rejection(message: &str) -> HttpReply {
  HttpReply::new(
    400,
    format!(r#"{{"status_code":400,"error_msg":"{}"}}"#, message),
  )
}

// =============================================================================
// Submission outcomes
// =============================================================================

#[tokio::test]
async fn test_successful_login_stores_token_and_replaces_home() {
  let navigator = RecordingNavigator::default();
  let controller = LoginController::new(
    ScriptedClient::replying(Ok(success("abc123"))),
    MemorySessionStore::new(),
    navigator.clone(),
  );
  controller.change_username("rahul");
  controller.change_password("rahul@2021");

  let view = controller.submit().await;

  assert_eq!(view, LoginView::Redirect { to: "/" });
  assert_eq!(
    controller.session().token(),
    Some(SessionToken::new("abc123"))
  );
  assert_eq!(navigator.paths(), vec!["/".to_string()]);
  assert!(controller.state().error_banner().is_none());
}

#[tokio::test]
async fn test_rejected_login_shows_banner_and_keeps_fields() {
  let navigator = RecordingNavigator::default();
  let controller = LoginController::new(
    ScriptedClient::replying(Ok(rejection("Invalid credentials"))),
    MemorySessionStore::new(),
    navigator.clone(),
  );
  controller.change_username("rahul");
  controller.change_password("wrong");

  let view = controller.submit().await;

  assert_eq!(
    view,
    LoginView::Form(FormView {
      username: "rahul".into(),
      password: "wrong".into(),
      error_banner: Some("*Invalid credentials".into()),
    })
  );
  assert!(controller.session().token().is_none());
  assert!(navigator.paths().is_empty());
}

#[tokio::test]
async fn test_request_body_carries_current_fields() {
  let client = Rc::new(ScriptedClient::replying(Ok(rejection("Invalid credentials"))));
  let controller = LoginController::new(
    SharedClient(client.clone()),
    MemorySessionStore::new(),
    RecordingNavigator::default(),
  );
  controller.change_username("r");
  controller.change_username("rahul");
  controller.change_password("pw");

  controller.submit().await;

  let sent = client.sent.borrow();
  assert_eq!(sent.len(), 1);
  assert_eq!(
    serde_json::to_string(&sent[0]).unwrap(),
    r#"{"username":"rahul","password":"pw"}"#
  );
}

#[tokio::test]
async fn test_network_failure_surfaces_generic_message() {
  let navigator = RecordingNavigator::default();
  let controller = LoginController::new(
    ScriptedClient::replying(Err(LoginError::Transport("offline".into()))),
    MemorySessionStore::new(),
    navigator.clone(),
  );
  controller.change_username("rahul");

  controller.submit().await;

  assert_eq!(
    controller.state().error_banner().as_deref(),
    Some("*Unable to reach the login service")
  );
  assert!(navigator.paths().is_empty());
}

#[tokio::test]
async fn test_malformed_response_surfaces_generic_message() {
  let controller = LoginController::new(
    ScriptedClient::replying(Ok(HttpReply::new(502, "<html>Bad Gateway</html>"))),
    MemorySessionStore::new(),
    RecordingNavigator::default(),
  );

  controller.submit().await;

  assert_eq!(
    controller.state().error_banner().as_deref(),
    Some("*Unexpected response from the login service")
  );
}

#[test]
fn test_submit_with_tokio_test_block_on() {
  let controller = LoginController::new(
    ScriptedClient::replying(Ok(rejection("Username is not found"))),
    MemorySessionStore::new(),
    RecordingNavigator::default(),
  );
  controller.change_username("ghost");

  tokio_test::block_on(controller.submit());

  let state = controller.state();
  assert!(state.show_error_msg);
  assert_eq!(state.error_msg, "Username is not found");
}

// =============================================================================
// Redirect guard
// =============================================================================

#[tokio::test]
async fn test_existing_session_redirects_without_request() {
  let client = Rc::new(ScriptedClient::default());
  let navigator = RecordingNavigator::default();
  let controller = LoginController::new(
    SharedClient(client.clone()),
    MemorySessionStore::with_token(SessionToken::new("existing")),
    navigator.clone(),
  );

  assert_eq!(controller.view(), LoginView::Redirect { to: "/" });

  controller.change_username("rahul");
  let view = controller.submit().await;

  assert_eq!(view, LoginView::Redirect { to: "/" });
  assert_eq!(client.calls(), 0);
  assert_eq!(navigator.paths(), vec!["/".to_string()]);
}

#[tokio::test]
async fn test_empty_token_still_counts_as_session() {
  let controller = LoginController::new(
    ScriptedClient::default(),
    MemorySessionStore::with_token(SessionToken::new("")),
    RecordingNavigator::default(),
  );
  assert_eq!(controller.view(), LoginView::Redirect { to: "/" });
}

#[test]
fn test_view_is_stable_across_renders() {
  let controller = LoginController::new(
    ScriptedClient::default(),
    MemorySessionStore::new(),
    RecordingNavigator::default(),
  );
  controller.change_username("rahul");
  controller.change_password("secret");

  let first = controller.view();
  let second = controller.view();
  assert_eq!(first, second);
  assert_eq!(controller.state().username, "rahul");
}

#[test]
fn test_view_rereads_session_stored_elsewhere() {
  let controller = LoginController::new(
    ScriptedClient::default(),
    MemorySessionStore::new(),
    RecordingNavigator::default(),
  );
  controller.change_username("rahul");
  assert!(matches!(controller.view(), LoginView::Form(_)));

  // Another tab logs in; the next render redirects without a submit
  controller
    .session()
    .store(&SessionToken::new("other-tab"))
    .unwrap();
  controller.change_password("secret");

  assert_eq!(controller.view(), LoginView::Redirect { to: "/" });
}

/// Lets a test keep a handle on the client the controller owns
struct SharedClient(Rc<ScriptedClient>);

#[async_trait(?Send)]
impl AuthClient for SharedClient {
  async fn post_credentials(&self, credentials: &Credentials) -> Result<HttpReply, LoginError> {
    self.0.post_credentials(credentials).await
  }
}

// =============================================================================
// Overlapping submissions
// =============================================================================

#[tokio::test]
async fn test_overlapping_rejections_last_resolved_wins() {
  let client = GatedClient::default();
  let first = client.gate();
  let second = client.gate();
  let controller = LoginController::new(
    client,
    MemorySessionStore::new(),
    RecordingNavigator::default(),
  );
  let resolved = Cell::new(0);

  let release = async {
    // Second request resolves first, then the first one
    second.send(rejection("second")).unwrap();
    while controller.state().error_msg != "second" {
      tokio::task::yield_now().await;
    }
    resolved.set(1);
    first.send(rejection("first")).unwrap();
  };

  tokio::join!(controller.submit(), controller.submit(), release);

  assert_eq!(resolved.get(), 1);
  assert_eq!(
    controller.state().error_banner().as_deref(),
    Some("*first")
  );
}

#[tokio::test]
async fn test_overlapping_submits_success_resolving_last() {
  let client = GatedClient::default();
  let first = client.gate();
  let second = client.gate();
  let navigator = RecordingNavigator::default();
  let controller = LoginController::new(client, MemorySessionStore::new(), navigator.clone());

  let release = async {
    second.send(rejection("Invalid credentials")).unwrap();
    while !controller.state().show_error_msg {
      tokio::task::yield_now().await;
    }
    first.send(success("abc123")).unwrap();
  };

  tokio::join!(controller.submit(), controller.submit(), release);

  assert_eq!(controller.view(), LoginView::Redirect { to: "/" });
  assert_eq!(
    controller.session().token(),
    Some(SessionToken::new("abc123"))
  );
  assert_eq!(navigator.paths(), vec!["/".to_string()]);
}

// =============================================================================
// Submission without a mounted form
// =============================================================================

#[tokio::test]
async fn test_submit_login_persists_without_form_state() {
  let client = ScriptedClient::replying(Ok(success("abc123")));
  let session = MemorySessionStore::new();
  let navigator = RecordingNavigator::default();

  let mut form = FormState::new();
  form.set_username("rahul");
  form.set_password("rahul@2021");
  let credentials = form.credentials();
  // The form goes away while the request is in flight
  drop(form);

  let rejection = submit_login(&client, &session, &navigator, &credentials).await;

  assert!(rejection.is_none());
  assert_eq!(session.token(), Some(SessionToken::new("abc123")));
  assert_eq!(navigator.paths(), vec!["/".to_string()]);
}

#[tokio::test]
async fn test_submit_login_rejection_returns_message_only() {
  let client = ScriptedClient::replying(Ok(rejection("Invalid credentials")));
  let session = MemorySessionStore::new();
  let navigator = RecordingNavigator::default();
  let credentials = FormState::new().credentials();

  let rejection = submit_login(&client, &session, &navigator, &credentials).await;

  assert_eq!(rejection.as_deref(), Some("Invalid credentials"));
  assert!(session.token().is_none());
  assert!(navigator.paths().is_empty());
}

#[tokio::test]
async fn test_submit_login_through_trait_objects() {
  let client: Rc<dyn AuthClient> = Rc::new(ScriptedClient::default());
  let session: Rc<dyn SessionStore> =
    Rc::new(MemorySessionStore::with_token(SessionToken::new("existing")));
  let navigator = RecordingNavigator::default();
  let dyn_navigator: Rc<dyn Navigator> = Rc::new(navigator.clone());
  let credentials = FormState::new().credentials();

  let rejection = submit_login(&*client, &*session, &*dyn_navigator, &credentials).await;

  assert!(rejection.is_none());
  assert_eq!(navigator.paths(), vec!["/".to_string()]);
}
