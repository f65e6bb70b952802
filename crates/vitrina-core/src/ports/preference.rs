use std::cell::RefCell;

use crate::errors::CoreError;
use crate::i18n::Locale;

/// Port que abstrae dónde se guarda la preferencia de idioma del usuario.
///
/// Es la única persistencia del subsistema: un único valor (código de locale).
/// El adapter decide el medio (archivo TOML, almacenamiento del navegador...).
pub trait PreferenceStore {
  /// Devuelve el valor guardado tal cual, sin validar contra los locales soportados.
  fn load_locale(&self) -> Result<Option<String>, CoreError>;

  fn save_locale(&self, locale: &Locale) -> Result<(), CoreError>;
}

/// Implementación en memoria, útil para tests y ejecuciones efímeras.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
  value: RefCell<Option<String>>,
}

impl MemoryPreferenceStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_value(value: &str) -> Self {
    Self { value: RefCell::new(Some(value.to_string())) }
  }

  pub fn current(&self) -> Option<String> {
    self.value.borrow().clone()
  }
}

impl PreferenceStore for MemoryPreferenceStore {
  fn load_locale(&self) -> Result<Option<String>, CoreError> {
    Ok(self.value.borrow().clone())
  }

  fn save_locale(&self, locale: &Locale) -> Result<(), CoreError> {
    *self.value.borrow_mut() = Some(locale.as_str().to_string());
    Ok(())
  }
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &T {
  fn load_locale(&self) -> Result<Option<String>, CoreError> {
    (**self).load_locale()
  }

  fn save_locale(&self, locale: &Locale) -> Result<(), CoreError> {
    (**self).save_locale(locale)
  }
}
