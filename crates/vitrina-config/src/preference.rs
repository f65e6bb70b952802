use serde::{Deserialize, Serialize};
use vitrina_core::ports::PreferenceStore;
use vitrina_core::{CoreError, Locale};

use crate::backend::ConfigBackend;

const SECTION: &str = "preferences";

#[derive(Debug, Default, Serialize, Deserialize)]
struct Preferences {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  locale: Option<String>,
}

/// Guarda la preferencia de idioma en la sección `[preferences]` del archivo
/// de configuración.
#[derive(Debug, Clone)]
pub struct TomlPreferenceStore<B: ConfigBackend> {
  backend: B,
}

impl<B: ConfigBackend> TomlPreferenceStore<B> {
  pub fn new(backend: B) -> Self {
    Self { backend }
  }
}

impl<B: ConfigBackend> PreferenceStore for TomlPreferenceStore<B> {
  fn load_locale(&self) -> Result<Option<String>, CoreError> {
    let prefs: Preferences =
      self.backend.load_section_with_default(SECTION).map_err(|e| CoreError::Preference(e.to_string()))?;
    Ok(prefs.locale)
  }

  fn save_locale(&self, locale: &Locale) -> Result<(), CoreError> {
    let prefs = Preferences { locale: Some(locale.as_str().to_string()) };
    self.backend.save_section(SECTION, &prefs).map_err(|e| CoreError::Preference(e.to_string()))
  }
}
