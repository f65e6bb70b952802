use std::fmt;

use serde::Serialize;

use crate::geometry::{ControlVisibility, ScrollMetrics, StepMetrics};

/// Identidad de una región desplazable (el `id` de su contenedor).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RegionId(String);

impl RegionId {
  pub fn new(id: impl Into<String>) -> Self {
    RegionId(id.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for RegionId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
  Prev,
  Next,
}

impl Direction {
  pub fn sign(self) -> f64 {
    match self {
      Direction::Prev => -1.0,
      Direction::Next => 1.0,
    }
  }
}

/// Port hacia la región real (pista + viewport) que mide y desplaza el host.
///
/// Las peticiones de desplazamiento son "dispara y olvida": el controlador
/// no espera a que termine la animación.
pub trait CarouselSurface {
  fn metrics(&self) -> ScrollMetrics;

  fn step_metrics(&self) -> StepMetrics;

  /// Desplazamiento suave relativo.
  fn scroll_by(&mut self, delta: f64);

  fn scroll_to(&mut self, offset: f64);

  fn set_controls(&mut self, controls: ControlVisibility);
}
