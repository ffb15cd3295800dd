use async_trait::async_trait;

use crate::login::constants::LOGIN_URL;
use crate::login::{AuthClient, Credentials, HttpReply, LoginError};

/// Native HTTP transport for the login endpoint
#[derive(Debug, Clone)]
pub struct HttpAuthClient {
  http: reqwest::Client,
  endpoint: String,
}

impl HttpAuthClient {
  pub fn new() -> Self {
    Self::with_endpoint(LOGIN_URL)
  }

  /// Point the client somewhere other than the storefront endpoint
  pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
    Self {
      http: reqwest::Client::new(),
      endpoint: endpoint.into(),
    }
  }
}

impl Default for HttpAuthClient {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait(?Send)]
impl AuthClient for HttpAuthClient {
  async fn post_credentials(&self, credentials: &Credentials) -> Result<HttpReply, LoginError> {
    // Plain body, no JSON content type, same as the browser form sends
    let body = serde_json::to_string(credentials)?;
    let resp = self
      .http
      .post(&self.endpoint)
      .body(body)
      .send()
      .await
      .map_err(|e| LoginError::Transport(e.to_string()))?;

    let status = resp.status().as_u16();
    let body = resp
      .text()
      .await
      .map_err(|e| LoginError::Transport(e.to_string()))?;
    Ok(HttpReply { status, body })
  }
}
