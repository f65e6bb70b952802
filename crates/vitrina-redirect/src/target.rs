use serde::Serialize;
use tracing::warn;
use url::Url;

use crate::errors::RedirectError;

/// Dominios y esquemas de aplicación permitidos, normalizados a minúsculas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList {
  domains: Vec<String>,
  app_schemes: Vec<String>,
}

impl AllowList {
  pub fn new<I, S>(domains: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let domains = domains
      .into_iter()
      .map(|d| d.as_ref().trim().trim_start_matches('.').to_ascii_lowercase())
      .filter(|d| !d.is_empty())
      .collect();
    AllowList { domains, app_schemes: Vec::new() }
  }

  /// Esquemas de aplicación (`vnd.youtube`, `soundcloud`) que se pueden abrir.
  /// Sin esta lista solo se aceptan enlaces `http`/`https`.
  pub fn with_app_schemes<I, S>(mut self, schemes: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    self.app_schemes = schemes
      .into_iter()
      .map(|s| s.as_ref().trim().trim_end_matches(':').to_ascii_lowercase())
      .filter(|s| !s.is_empty())
      .collect();
    self
  }

  pub fn allows_app_scheme(&self, scheme: &str) -> bool {
    self.app_schemes.iter().any(|s| s.eq_ignore_ascii_case(scheme))
  }

  /// El host coincide con un dominio o es subdominio suyo.
  ///
  /// `notyoutube.com` no coincide con `youtube.com`.
  pub fn allows(&self, host: &str) -> bool {
    let host = host.trim_end_matches('.').to_ascii_lowercase();
    self.domains.iter().any(|domain| {
      host == *domain || host.strip_suffix(domain.as_str()).is_some_and(|prefix| prefix.ends_with('.'))
    })
  }
}

/// Destino validado.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RedirectTarget {
  /// Enlace web normal.
  Web { url: String },
  /// Enlace de aplicación con su alternativa web.
  App { link: String, fallback: String },
}

impl RedirectTarget {
  /// Destino web final, el que se abre si la app no responde.
  pub fn web_url(&self) -> &str {
    match self {
      RedirectTarget::Web { url } => url,
      RedirectTarget::App { fallback, .. } => fallback,
    }
  }
}

fn is_web_scheme(scheme: &str) -> bool {
  matches!(scheme, "http" | "https")
}

/// Valida el parámetro `url`.
pub fn evaluate(param: Option<&str>, allowed: &AllowList) -> Result<RedirectTarget, RedirectError> {
  let raw = param.map(str::trim).filter(|s| !s.is_empty()).ok_or(RedirectError::Missing)?;

  let parsed = parse(raw)?;
  if is_web_scheme(parsed.scheme()) {
    let url = checked(parsed, allowed)?;
    return Ok(RedirectTarget::Web { url: url.into() });
  }

  if !allowed.allows_app_scheme(parsed.scheme()) {
    warn!(scheme = parsed.scheme(), "blocked redirect with unknown scheme");
    return Err(RedirectError::Blocked(parsed.into()));
  }

  // Esquema de aplicación: se quita el esquema y se prueba como https.
  let rest = raw[parsed.scheme().len() + 1..].trim_start_matches('/');
  let fallback = checked(parse(&format!("https://{rest}"))?, allowed)?;

  Ok(RedirectTarget::App { link: parsed.into(), fallback: fallback.into() })
}

fn parse(raw: &str) -> Result<Url, RedirectError> {
  Url::parse(raw).map_err(|e| RedirectError::InvalidFormat { url: raw.to_string(), reason: e.to_string() })
}

fn checked(url: Url, allowed: &AllowList) -> Result<Url, RedirectError> {
  let host = url.host_str().unwrap_or_default();
  if allowed.allows(host) {
    Ok(url)
  } else {
    warn!(url = %url, "blocked unsafe redirect");
    Err(RedirectError::Blocked(url.into()))
  }
}
