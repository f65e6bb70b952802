use tracing::{debug, warn};

use crate::i18n::locale::{Locale, SupportedLocales};
use crate::ports::PreferenceStore;

/// De dónde salió el locale activo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleSource {
  /// Parámetro explícito de la petición (`?lang=es`).
  Request,
  /// Preferencia guardada en una visita anterior.
  Persisted,
  Default,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
  pub locale: Locale,
  pub source: LocaleSource,
}

/// Resolución pura del locale activo.
///
/// Precedencia: parámetro de la petición (si nombra un locale soportado),
/// después el valor persistido (si sigue soportado), después el por defecto.
pub fn resolve_locale(url_param: Option<&str>, persisted: Option<&str>, supported: &SupportedLocales) -> Resolution {
  if let Some(locale) = url_param.and_then(|p| supported.pick(p)) {
    return Resolution { locale, source: LocaleSource::Request };
  }

  if let Some(locale) = persisted.and_then(|p| supported.pick(p)) {
    return Resolution { locale, source: LocaleSource::Persisted };
  }

  Resolution { locale: supported.default_locale().clone(), source: LocaleSource::Default }
}

/// Combina la resolución pura con el almacén de preferencias.
///
/// Los fallos del almacén se registran y se ignoran: no poder guardar la
/// preferencia nunca impide mostrar la web.
pub struct LocaleResolver<P: PreferenceStore> {
  supported: SupportedLocales,
  store: P,
}

impl<P: PreferenceStore> LocaleResolver<P> {
  pub fn new(supported: SupportedLocales, store: P) -> Self {
    Self { supported, store }
  }

  pub fn supported(&self) -> &SupportedLocales {
    &self.supported
  }

  pub fn store(&self) -> &P {
    &self.store
  }

  /// Locale inicial. Si viene de la petición, se persiste.
  pub fn resolve(&self, url_param: Option<&str>) -> Resolution {
    let persisted = match self.store.load_locale() {
      Ok(value) => value,
      Err(e) => {
        warn!(error = %e, "could not read persisted locale preference");
        None
      }
    };

    let resolution = resolve_locale(url_param, persisted.as_deref(), &self.supported);
    debug!(locale = %resolution.locale, source = ?resolution.source, "resolved active locale");

    if resolution.source == LocaleSource::Request {
      self.persist(&resolution.locale);
    }

    resolution
  }

  /// Valida un cambio de idioma pedido por el usuario y lo persiste.
  ///
  /// Lo no soportado colapsa al locale por defecto, que también se persiste.
  pub fn switch(&self, requested: &str) -> Locale {
    let locale = self.supported.collapse(requested);
    self.persist(&locale);
    locale
  }

  fn persist(&self, locale: &Locale) {
    if let Err(e) = self.store.save_locale(locale) {
      warn!(locale = %locale, error = %e, "could not persist locale preference");
    }
  }
}
