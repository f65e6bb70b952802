use std::collections::BTreeMap;

use vitrina_config::SiteConfig;
use vitrina_core::{Locale, TextCatalog};

/// Opciones de render que no dependen del locale.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
  /// Límite de elementos en pistas, vídeos y posts.
  pub list_cap: usize,
  /// `locale -> locale de calendario POSIX` para fechas.
  pub calendar_locales: BTreeMap<String, String>,
}

impl Default for RenderOptions {
  fn default() -> Self {
    Self::from_config(&SiteConfig::default())
  }
}

impl RenderOptions {
  pub fn from_config(cfg: &SiteConfig) -> Self {
    Self { list_cap: cfg.list_cap, calendar_locales: cfg.calendar_locales.clone() }
  }
}

/// Todo lo que un renderer necesita además del contenido.
///
/// El año actual se fija al construir el contexto para que dos renders
/// seguidos no difieran por el reloj.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
  pub locale: &'a Locale,
  pub catalog: &'a TextCatalog,
  pub options: &'a RenderOptions,
  pub current_year: i32,
}

impl<'a> RenderContext<'a> {
  pub fn text(&self, key: &str) -> &'a str {
    self.catalog.lookup(self.locale, key)
  }

  /// Texto de una llamada a la acción. Si el catálogo no tiene la clave en
  /// ningún idioma se usa la etiqueta incorporada.
  pub fn label(&self, key: &str, builtin: &str) -> String {
    match self.text(key) {
      "" => builtin.to_string(),
      text => text.to_string(),
    }
  }

  pub fn calendar_locale(&self) -> Option<&'a str> {
    self.options.calendar_locales.get(self.locale.as_str()).map(String::as_str)
  }

  pub fn list_cap(&self) -> usize {
    self.options.list_cap
  }
}
