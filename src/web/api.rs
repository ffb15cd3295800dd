//! Browser transport for the login endpoint

use async_trait::async_trait;
use gloo_net::http::Request;

use crate::login::constants::LOGIN_URL;
use crate::login::{AuthClient, Credentials, HttpReply, LoginError};

fn transport(e: gloo_net::Error) -> LoginError {
  LoginError::Transport(e.to_string())
}

#[derive(Debug, Clone, Copy)]
pub struct GlooAuthClient {
  endpoint: &'static str,
}

impl GlooAuthClient {
  pub fn new() -> Self {
    Self {
      endpoint: LOGIN_URL,
    }
  }
}

impl Default for GlooAuthClient {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait(?Send)]
impl AuthClient for GlooAuthClient {
  async fn post_credentials(&self, credentials: &Credentials) -> Result<HttpReply, LoginError> {
    // A string body keeps this a simple CORS request (text/plain)
    let body = serde_json::to_string(credentials)?;
    let resp = Request::post(self.endpoint)
      .body(body)
      .map_err(transport)?
      .send()
      .await
      .map_err(transport)?;

    let status = resp.status();
    let body = resp.text().await.map_err(transport)?;
    Ok(HttpReply { status, body })
  }
}
