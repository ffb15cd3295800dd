use thiserror::Error;

use super::constants::{DECODE_FAILURE, STORAGE_FAILURE, TRANSPORT_FAILURE};

/// Errors raised while submitting credentials or persisting a session
#[derive(Debug, Error)]
pub enum LoginError {
  /// The request could not be sent or its body could not be read
  #[error("transport error: {0}")]
  Transport(String),

  /// The response body was not the JSON the endpoint documents
  #[error("malformed response: {0}")]
  Decode(#[from] serde_json::Error),

  /// The session token could not be written to or cleared from its store
  #[error("session storage error: {0}")]
  Storage(String),

  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
}

impl LoginError {
  /// Text shown in the form's error banner for this failure
  pub fn user_message(&self) -> &'static str {
    match self {
      LoginError::Transport(_) => TRANSPORT_FAILURE,
      LoginError::Decode(_) => DECODE_FAILURE,
      LoginError::Storage(_) | LoginError::Io(_) => STORAGE_FAILURE,
    }
  }
}
