//! Pasarela de redirección hacia plataformas externas.
//!
//! Valida el parámetro `url` contra una lista de dominios permitidos y, para
//! enlaces con esquema de aplicación (`vnd.youtube://`, `soundcloud://`),
//! intenta abrir la app y cae a la versión `https://` si la página sigue
//! visible tras el retardo.

mod config;
mod errors;
mod flow;
mod target;

pub use config::RedirectConfig;
pub use errors::{RedirectError, RedirectStatus};
pub use flow::{Navigator, run};
pub use target::{AllowList, RedirectTarget, evaluate};
