use serde::{Deserialize, Serialize};
use vitrina_config::{ConfigBackend, ConfigError};

/// Sección `[carousel]` de vitrina.toml.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CarouselConfig {
  /// Tolerancia (en unidades de layout) para decidir si se está en un borde.
  /// Absorbe el ruido de medición; depende de la precisión del host.
  #[serde(default = "default_edge_tolerance")]
  pub edge_tolerance: f64,

  /// Regiones desplazables que se registran tras cada render.
  #[serde(default = "default_regions")]
  pub regions: Vec<String>,
}

fn default_edge_tolerance() -> f64 {
  1.0
}

fn default_regions() -> Vec<String> {
  vec!["releasesCarousel".into(), "videosCarousel".into(), "postsCarousel".into()]
}

impl Default for CarouselConfig {
  fn default() -> Self {
    CarouselConfig { edge_tolerance: default_edge_tolerance(), regions: default_regions() }
  }
}

impl CarouselConfig {
  pub fn load<B: ConfigBackend>(backend: &B) -> Result<Self, ConfigError> {
    let cfg: CarouselConfig = backend.load_section_with_default("carousel")?;
    backend.save_section("carousel", &cfg)?;
    Ok(cfg)
  }
}
