//! Idiomas: qué locale está activo y qué texto corresponde a cada clave.
//!
//! El orden de inicialización es fijo: primero se resuelve el locale
//! ([`LocaleResolver`]), después se construye el [`TextCatalog`] a partir del
//! contenido. Ninguna operación de este módulo devuelve error por una clave o
//! un locale desconocido: todo cae al locale por defecto y, en último caso,
//! a la cadena vacía.

pub mod catalog;
pub mod locale;
pub mod resolver;

pub use catalog::{Presence, TextCatalog};
pub use locale::{Locale, SupportedLocales, find_variant};
pub use resolver::{LocaleResolver, LocaleSource, Resolution, resolve_locale};
