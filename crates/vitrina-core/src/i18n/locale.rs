use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identificador de idioma normalizado (`"en"`, `"es"`).
///
/// Siempre en minúsculas y sin etiqueta de región: `"es-MX"` y `"ES_mx"`
/// se convierten en `"es"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
  /// Interpreta un código de idioma de forma tolerante.
  ///
  /// Devuelve `None` para valores vacíos o que no parecen una etiqueta de idioma.
  pub fn parse(value: &str) -> Option<Self> {
    let value = value.trim();
    if value.is_empty() {
      return None;
    }

    let normalized = value.to_ascii_lowercase();
    let lang = normalized.split(['-', '_']).next().unwrap_or("");

    let valid = (2..=8).contains(&lang.len()) && lang.chars().all(|c| c.is_ascii_lowercase());
    valid.then(|| Locale(lang.to_string()))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl TryFrom<String> for Locale {
  type Error = String;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    Locale::parse(&value).ok_or_else(|| format!("invalid locale code: {value:?}"))
  }
}

impl From<Locale> for String {
  fn from(locale: Locale) -> Self {
    locale.0
  }
}

impl fmt::Display for Locale {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

/// Conjunto cerrado de idiomas que la web sabe mostrar.
///
/// Invariante: `default` siempre pertenece a `locales` y ocupa la primera
/// posición.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedLocales {
  default: Locale,
  locales: Vec<Locale>,
}

impl SupportedLocales {
  pub fn new(default: Locale, others: impl IntoIterator<Item = Locale>) -> Self {
    let mut locales = vec![default.clone()];
    for locale in others {
      if !locales.contains(&locale) {
        locales.push(locale);
      }
    }
    Self { default, locales }
  }

  /// Construye el conjunto desde códigos de configuración, ignorando los inválidos.
  ///
  /// Si el locale por defecto no es válido se usa `"en"`.
  pub fn from_codes<S: AsRef<str>>(default: &str, codes: &[S]) -> Self {
    let default = Locale::parse(default).unwrap_or_else(|| Locale("en".to_string()));
    Self::new(default, codes.iter().filter_map(|c| Locale::parse(c.as_ref())))
  }

  pub fn default_locale(&self) -> &Locale {
    &self.default
  }

  pub fn iter(&self) -> impl Iterator<Item = &Locale> {
    self.locales.iter()
  }

  pub fn contains(&self, locale: &Locale) -> bool {
    self.locales.contains(locale)
  }

  /// Devuelve el locale soportado que nombra `value`, si lo hay.
  pub fn pick(&self, value: &str) -> Option<Locale> {
    Locale::parse(value).filter(|l| self.contains(l))
  }

  /// Como [`pick`](Self::pick), pero lo no soportado colapsa al locale por defecto.
  pub fn collapse(&self, value: &str) -> Locale {
    self.pick(value).unwrap_or_else(|| self.default.clone())
  }
}

/// Busca la variante de un mapa `código -> valor` que corresponde a `locale`.
///
/// Las claves del documento se normalizan igual que los locales, así que
/// `"es-ES"` también sirve para `"es"`.
pub fn find_variant<'a, T>(variants: &'a BTreeMap<String, T>, locale: &Locale) -> Option<&'a T> {
  variants
    .get(locale.as_str())
    .or_else(|| variants.iter().find(|(code, _)| Locale::parse(code).as_ref() == Some(locale)).map(|(_, v)| v))
}
