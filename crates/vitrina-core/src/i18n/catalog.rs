use std::collections::BTreeMap;

use tracing::debug;

use crate::i18n::locale::Locale;

/// Indica si un valor localizado tiene contenido suficiente para sustituir
/// al valor base.
pub trait Presence {
  fn is_present(&self) -> bool;
}

impl Presence for str {
  fn is_present(&self) -> bool {
    !self.trim().is_empty()
  }
}

impl<T> Presence for [T] {
  fn is_present(&self) -> bool {
    !self.is_empty()
  }
}

/// Catálogo `locale -> clave -> texto` con cadena de respaldo.
///
/// La búsqueda va del locale exacto al locale por defecto y de ahí a `""`.
/// Nunca falla ni devuelve `None`: una clave desconocida no es un error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextCatalog {
  default: Option<Locale>,
  entries: BTreeMap<Locale, BTreeMap<String, String>>,
}

impl TextCatalog {
  pub fn new(default: Locale) -> Self {
    Self { default: Some(default), entries: BTreeMap::new() }
  }

  /// Deriva el catálogo de la sección `i18n` del contenido.
  ///
  /// Los códigos de idioma se normalizan; los que no se pueden interpretar se
  /// descartan. Si dos códigos colapsan al mismo locale (`"es"` y `"es-MX"`),
  /// sus claves se fusionan.
  pub fn from_content(i18n: &BTreeMap<String, BTreeMap<String, String>>, default: Locale) -> Self {
    let mut catalog = Self::new(default);

    for (code, strings) in i18n {
      match Locale::parse(code) {
        Some(locale) => catalog.extend(locale, strings.iter().map(|(k, v)| (k.clone(), v.clone()))),
        None => debug!(code = %code, "ignoring catalog entry with invalid locale code"),
      }
    }

    catalog
  }

  pub fn insert(&mut self, locale: Locale, key: impl Into<String>, value: impl Into<String>) {
    self.entries.entry(locale).or_default().insert(key.into(), value.into());
  }

  pub fn extend(&mut self, locale: Locale, strings: impl IntoIterator<Item = (String, String)>) {
    self.entries.entry(locale).or_default().extend(strings);
  }

  pub fn default_locale(&self) -> Option<&Locale> {
    self.default.as_ref()
  }

  /// Texto para `key` en `locale`: exacto, luego locale por defecto, luego `""`.
  pub fn lookup(&self, locale: &Locale, key: &str) -> &str {
    self
      .entry(locale, key)
      .or_else(|| self.default.as_ref().and_then(|d| self.entry(d, key)))
      .unwrap_or("")
  }

  /// Claves conocidas para un locale (sin respaldo), en orden.
  pub fn keys(&self, locale: &Locale) -> Vec<&str> {
    self.entries.get(locale).map(|m| m.keys().map(String::as_str).collect()).unwrap_or_default()
  }

  /// Elige entre el valor base de una entidad y su variante localizada.
  ///
  /// La variante solo gana cuando el locale activo no es el por defecto y la
  /// variante existe y tiene contenido.
  pub fn select<'a, T>(&self, locale: &Locale, base: &'a T, variant: Option<&'a T>) -> &'a T
  where
    T: Presence + ?Sized,
  {
    if self.default.as_ref() == Some(locale) {
      return base;
    }

    match variant {
      Some(v) if v.is_present() => v,
      _ => base,
    }
  }

  fn entry(&self, locale: &Locale, key: &str) -> Option<&str> {
    self.entries.get(locale).and_then(|m| m.get(key)).map(String::as_str)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn loc(code: &str) -> Locale {
    Locale::parse(code).unwrap()
  }

  fn catalog() -> TextCatalog {
    let mut raw: BTreeMap<String, BTreeMap<String, String>> = BTreeMap::new();
    raw.entry("en".into()).or_default().insert("nav.music".into(), "Music".into());
    raw.entry("en".into()).or_default().insert("nav.shows".into(), "Shows".into());
    raw.entry("es-ES".into()).or_default().insert("nav.music".into(), "Música".into());
    raw.entry("??".into()).or_default().insert("nav.music".into(), "junk".into());
    TextCatalog::from_content(&raw, loc("en"))
  }

  #[test]
  fn lookup_prefers_exact_locale() {
    assert_eq!(catalog().lookup(&loc("es"), "nav.music"), "Música");
  }

  #[test]
  fn lookup_falls_back_to_default_locale() {
    assert_eq!(catalog().lookup(&loc("es"), "nav.shows"), "Shows");
  }

  #[test]
  fn lookup_falls_back_to_empty_string() {
    let c = catalog();
    assert_eq!(c.lookup(&loc("es"), "nav.unknown"), "");
    assert_eq!(c.lookup(&loc("fr"), "nav.unknown"), "");
    assert_eq!(c.lookup(&loc("fr"), "nav.music"), "Music");
  }

  #[test]
  fn invalid_codes_are_dropped() {
    let c = catalog();
    assert_eq!(c.keys(&loc("es")), vec!["nav.music"]);
  }

  #[test]
  fn select_only_overrides_for_non_default_locale() {
    let c = catalog();
    let base = "Producer from Valencia.";
    let variant = Some("Productora de Valencia.");

    assert_eq!(c.select(&loc("en"), base, variant), base);
    assert_eq!(c.select(&loc("es"), base, variant), "Productora de Valencia.");
    assert_eq!(c.select(&loc("es"), base, Some("   ")), base);
    assert_eq!(c.select(&loc("es"), base, None), base);
  }

  #[test]
  fn select_lists_requires_non_empty_variant() {
    let c = catalog();
    let base = vec!["Top 10".to_string()];
    let empty: Vec<String> = Vec::new();

    assert_eq!(c.select(&loc("es"), base.as_slice(), Some(empty.as_slice())), base.as_slice());
  }
}
