use serde::{Deserialize, Serialize};
use std::fmt;

/// Identificador de un lanzamiento (`Release`).
///
/// Viene tal cual del documento de contenido (`"rel-2024"`, `"night-drive"`...).
/// No se genera nunca en este subsistema: el contenido es de solo lectura.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReleaseId(String);

impl ReleaseId {
  pub fn new(id: impl Into<String>) -> Self {
    ReleaseId(id.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<String> for ReleaseId {
  fn from(s: String) -> Self {
    ReleaseId(s)
  }
}

impl From<&str> for ReleaseId {
  fn from(s: &str) -> Self {
    ReleaseId(s.to_string())
  }
}

impl From<ReleaseId> for String {
  fn from(id: ReleaseId) -> Self {
    id.0
  }
}

impl fmt::Display for ReleaseId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}
