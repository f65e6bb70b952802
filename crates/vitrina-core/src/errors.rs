// crates/vitrina-core/src/errors.rs
use thiserror::Error;

/// Error genérico del núcleo de Vitrina.
///
/// Ningún renderizado produce este error: solo la persistencia de
/// preferencias puede fallar, y quien la usa lo registra y sigue.
#[derive(Debug, Error)]
pub enum CoreError {
  #[error("preference error: {0}")]
  Preference(String),
}
