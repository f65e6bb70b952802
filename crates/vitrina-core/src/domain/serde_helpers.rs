use serde::{Deserialize, Deserializer};

use crate::domain::release_type::ReleaseType;

/// Acepta `2024` o `"2024"`: los documentos de contenido mezclan ambos.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  #[derive(Deserialize)]
  #[serde(untagged)]
  enum Raw {
    Text(String),
    Int(i64),
    Float(f64),
  }

  Ok(match Raw::deserialize(deserializer)? {
    Raw::Text(s) => s,
    Raw::Int(n) => n.to_string(),
    Raw::Float(n) => n.to_string(),
  })
}

/// `type` ausente, `null` o en blanco se queda sin categoría.
pub(crate) fn optional_category<'de, D>(deserializer: D) -> Result<Option<ReleaseType>, D::Error>
where
  D: Deserializer<'de>,
{
  let raw = Option::<String>::deserialize(deserializer)?;
  Ok(raw.filter(|s| !s.trim().is_empty()).map(ReleaseType::from))
}
