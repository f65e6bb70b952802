use serde::Serialize;

/// Las tres magnitudes medidas de una región desplazable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScrollMetrics {
  /// Ancho total desplazable (contenido).
  pub scroll_extent: f64,
  /// Ancho visible.
  pub viewport_extent: f64,
  /// Desplazamiento actual desde el inicio.
  pub offset: f64,
}

impl ScrollMetrics {
  pub fn new(scroll_extent: f64, viewport_extent: f64, offset: f64) -> Self {
    Self { scroll_extent, viewport_extent, offset }
  }

  /// Máximo desplazamiento posible (nunca negativo).
  pub fn max_offset(&self) -> f64 {
    (self.scroll_extent - self.viewport_extent).max(0.0)
  }
}

/// Medidas que definen el paso de navegación.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepMetrics {
  /// Ancho del primer elemento, si la pista tiene alguno.
  pub first_item_extent: Option<f64>,
  /// Separación entre elementos.
  pub gap: f64,
}

impl StepMetrics {
  /// Un paso avanza exactamente un elemento, sea cual sea el viewport.
  ///
  /// Sin elementos se avanza un viewport.
  pub fn step(&self, viewport_extent: f64) -> f64 {
    match self.first_item_extent {
      Some(item) => item + self.gap,
      None => viewport_extent,
    }
  }
}

/// Estado de bordes de un carrusel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EdgeState {
  /// Todo cabe: no hay nada que desplazar.
  NoOverflow,
  AtStart,
  Middle,
  AtEnd,
}

impl EdgeState {
  pub fn classify(metrics: &ScrollMetrics, tolerance: f64) -> Self {
    let max = metrics.scroll_extent - metrics.viewport_extent;

    if max <= tolerance {
      EdgeState::NoOverflow
    } else if metrics.offset <= tolerance {
      EdgeState::AtStart
    } else if metrics.offset >= max - tolerance {
      EdgeState::AtEnd
    } else {
      EdgeState::Middle
    }
  }

  pub fn controls(self) -> ControlVisibility {
    match self {
      EdgeState::NoOverflow => ControlVisibility { prev: false, next: false },
      EdgeState::AtStart => ControlVisibility { prev: false, next: true },
      EdgeState::Middle => ControlVisibility { prev: true, next: true },
      EdgeState::AtEnd => ControlVisibility { prev: true, next: false },
    }
  }
}

/// Visibilidad derivada de los controles "anterior" y "siguiente".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ControlVisibility {
  pub prev: bool,
  pub next: bool,
}
