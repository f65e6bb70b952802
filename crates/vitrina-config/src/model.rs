use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use vitrina_core::SupportedLocales;

use crate::backend::ConfigBackend;
use crate::paths::ConfigError;

/// Sección `[site]` de vitrina.toml.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SiteConfig {
  /// Locale base: respaldo final de textos y campos localizados.
  #[serde(default = "default_locale")]
  pub default_locale: String,

  #[serde(default = "default_supported_locales")]
  pub supported_locales: Vec<String>,

  /// Nombre del parámetro de la petición que fuerza un idioma.
  #[serde(default = "default_query_param")]
  pub query_param: String,

  /// Máximo de elementos en listados sin límite natural (pistas, vídeos, posts).
  #[serde(default = "default_list_cap")]
  pub list_cap: usize,

  /// Locale de calendario (formato POSIX, `"es_ES"`) usado para fechas de conciertos.
  #[serde(default = "default_calendar_locales")]
  pub calendar_locales: BTreeMap<String, String>,
}

fn default_locale() -> String {
  "en".into()
}

fn default_supported_locales() -> Vec<String> {
  vec!["en".into(), "es".into()]
}

fn default_query_param() -> String {
  "lang".into()
}

fn default_list_cap() -> usize {
  6
}

fn default_calendar_locales() -> BTreeMap<String, String> {
  BTreeMap::from([("en".to_string(), "en_US".to_string()), ("es".to_string(), "es_ES".to_string())])
}

impl Default for SiteConfig {
  fn default() -> Self {
    SiteConfig {
      default_locale: default_locale(),
      supported_locales: default_supported_locales(),
      query_param: default_query_param(),
      list_cap: default_list_cap(),
      calendar_locales: default_calendar_locales(),
    }
  }
}

impl SiteConfig {
  /// Carga `[site]` y la vuelve a escribir, para que el archivo muestre todos
  /// los valores efectivos.
  pub fn load<B: ConfigBackend>(backend: &B) -> Result<Self, ConfigError> {
    let cfg: SiteConfig = backend.load_section_with_default("site")?;
    backend.save_section("site", &cfg)?;
    Ok(cfg)
  }

  pub fn save<B: ConfigBackend>(&self, backend: &B) -> Result<(), ConfigError> {
    backend.save_section("site", self)
  }

  pub fn supported(&self) -> SupportedLocales {
    SupportedLocales::from_codes(&self.default_locale, &self.supported_locales)
  }
}
