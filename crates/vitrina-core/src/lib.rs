pub mod domain;
pub mod errors;
pub mod i18n;
pub mod ports;

pub use errors::CoreError;
pub use i18n::{Locale, LocaleResolver, SupportedLocales, TextCatalog};
