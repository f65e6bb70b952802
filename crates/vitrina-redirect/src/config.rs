use std::time::Duration;

use serde::{Deserialize, Serialize};
use vitrina_config::{ConfigBackend, ConfigError};

/// Sección `[redirect]` de vitrina.toml.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RedirectConfig {
  /// Dominios a los que se permite redirigir (incluye sus subdominios).
  #[serde(default = "default_allowed_domains")]
  pub allowed_domains: Vec<String>,

  /// Esquemas de aplicación que se abren directamente, con alternativa `https://`.
  #[serde(default = "default_app_schemes")]
  pub app_schemes: Vec<String>,

  #[serde(default = "default_delay_ms")]
  pub delay_ms: u64,
}

fn default_allowed_domains() -> Vec<String> {
  vec!["youtube.com".into(), "soundcloud.com".into()]
}

fn default_app_schemes() -> Vec<String> {
  vec!["vnd.youtube".into(), "soundcloud".into()]
}

fn default_delay_ms() -> u64 {
  250
}

impl Default for RedirectConfig {
  fn default() -> Self {
    RedirectConfig {
      allowed_domains: default_allowed_domains(),
      app_schemes: default_app_schemes(),
      delay_ms: default_delay_ms(),
    }
  }
}

impl RedirectConfig {
  pub fn load<B: ConfigBackend>(backend: &B) -> Result<Self, ConfigError> {
    let cfg: RedirectConfig = backend.load_section_with_default("redirect")?;
    backend.save_section("redirect", &cfg)?;
    Ok(cfg)
  }

  pub fn delay(&self) -> Duration {
    Duration::from_millis(self.delay_ms)
  }
}
