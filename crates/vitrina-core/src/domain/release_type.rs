use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Categoría de un lanzamiento tal como se muestra en la web.
///
/// Sigue la clasificación clásica de la industria musical (Album, EP,
/// Single...) pero acepta cualquier otro valor mediante
/// [`ReleaseType::Custom`], que se muestra literalmente.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReleaseType {
  Album,
  EP,
  Single,
  Compilation,
  Mix,
  /// Valor no estándar (por ejemplo `"Remix"` o `"Live Session"`).
  Custom(String),
}

impl FromStr for ReleaseType {
  type Err = std::convert::Infallible;

  /// Parsear nunca falla: lo desconocido acaba en `Custom`.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let normalized = s.trim().to_lowercase();

    let rt = match normalized.as_str() {
      "album" | "lp" => ReleaseType::Album,
      "ep" => ReleaseType::EP,
      "single" => ReleaseType::Single,
      "compilation" => ReleaseType::Compilation,
      "mix" | "dj-mix" | "mixtape" => ReleaseType::Mix,
      _ => ReleaseType::Custom(s.trim().to_string()),
    };

    Ok(rt)
  }
}

impl From<String> for ReleaseType {
  fn from(s: String) -> Self {
    match s.parse() {
      Ok(rt) => rt,
      Err(never) => match never {},
    }
  }
}

impl From<ReleaseType> for String {
  fn from(rt: ReleaseType) -> Self {
    rt.to_string()
  }
}

impl fmt::Display for ReleaseType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ReleaseType::Album => write!(f, "Album"),
      ReleaseType::EP => write!(f, "EP"),
      ReleaseType::Single => write!(f, "Single"),
      ReleaseType::Compilation => write!(f, "Compilation"),
      ReleaseType::Mix => write!(f, "Mix"),
      ReleaseType::Custom(s) => write!(f, "{s}"),
    }
  }
}
