use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::i18n::{Locale, find_variant};

/// Datos de contacto profesional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contacts {
  #[serde(default)]
  pub email: Option<String>,

  #[serde(default)]
  pub manager: Option<String>,

  #[serde(default)]
  pub location: Option<String>,

  #[serde(default)]
  pub translations: BTreeMap<String, ContactTranslation>,
}

impl Contacts {
  pub fn translation(&self, locale: &Locale) -> Option<&ContactTranslation> {
    find_variant(&self.translations, locale)
  }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactTranslation {
  #[serde(default)]
  pub manager: Option<String>,

  #[serde(default)]
  pub location: Option<String>,
}

/// Perfil en una red social.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Social {
  pub name: String,
  /// Clase de icono (`"bi-instagram"`).
  #[serde(default)]
  pub icon: String,
  pub url: String,
}
