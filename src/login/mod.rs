//! Login form core: state, submission, session guard
//!
//! Everything here is host-agnostic. The browser component in `web` and the
//! terminal driver in `cli` both render and submit through these types.

pub mod constants;
mod error;
mod flow;
mod form;
mod navigate;
mod session;

pub use error::LoginError;
pub use flow::{
  interpret, settle, submit_credentials, submit_login, AuthClient, AuthOutcome, HttpReply,
  LoginController,
};
pub use form::{render, Credentials, FormState, FormView, LoginView};
pub use navigate::Navigator;
pub use session::{
  clear_cookie_string, find_cookie, session_expiry, set_cookie_string, MemorySessionStore,
  SessionStore, SessionToken,
};
