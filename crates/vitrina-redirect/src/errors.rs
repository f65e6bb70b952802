use std::fmt;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RedirectError {
  #[error("no redirect url provided")]
  Missing,

  #[error("invalid url `{url}`: {reason}")]
  InvalidFormat { url: String, reason: String },

  #[error("blocked redirect to `{0}`")]
  Blocked(String),
}

/// Mensaje visible para el usuario mientras dura la redirección.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RedirectStatus {
  Redirecting,
  InvalidTarget,
  InvalidFormat,
  Missing,
}

impl fmt::Display for RedirectStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let text = match self {
      RedirectStatus::Redirecting => "Redirecting...",
      RedirectStatus::InvalidTarget => "Invalid redirect target.",
      RedirectStatus::InvalidFormat => "Invalid URL format.",
      RedirectStatus::Missing => "No redirect URL provided.",
    };
    f.write_str(text)
  }
}

impl From<&RedirectError> for RedirectStatus {
  fn from(err: &RedirectError) -> Self {
    match err {
      RedirectError::Missing => RedirectStatus::Missing,
      RedirectError::InvalidFormat { .. } => RedirectStatus::InvalidFormat,
      RedirectError::Blocked(_) => RedirectStatus::InvalidTarget,
    }
  }
}
