use tracing::debug;

use crate::geometry::{ControlVisibility, EdgeState, ScrollMetrics};
use crate::surface::{CarouselSurface, Direction, RegionId};

/// Resultado de notificar un evento de scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameRequest {
  /// El host debe pedir un frame de animación para esta región.
  Schedule,
  /// Ya hay un recálculo pendiente para el próximo frame.
  Coalesced,
}

/// Controlador de una región desplazable.
///
/// Mantiene la última medición y el estado de bordes, y refleja la
/// visibilidad de los controles en la superficie cada vez que recalcula.
pub struct CarouselController {
  region: RegionId,
  surface: Box<dyn CarouselSurface>,
  tolerance: f64,
  metrics: ScrollMetrics,
  state: EdgeState,
  bound: bool,
  frame_pending: bool,
}

impl CarouselController {
  /// Crea el controlador y hace la primera medición.
  pub fn attach(region: RegionId, surface: Box<dyn CarouselSurface>, tolerance: f64) -> Self {
    let mut controller = Self {
      region,
      surface,
      tolerance,
      metrics: ScrollMetrics::default(),
      state: EdgeState::NoOverflow,
      bound: false,
      frame_pending: false,
    };
    controller.recompute();
    controller
  }

  /// Sustituye la superficie tras un re-render y vuelve al inicio.
  ///
  /// No toca `bound`: los listeners del host siguen siendo válidos.
  pub fn reattach(&mut self, surface: Box<dyn CarouselSurface>) {
    self.surface = surface;
    self.frame_pending = false;
    self.surface.scroll_to(0.0);
    self.recompute();
  }

  pub fn region(&self) -> &RegionId {
    &self.region
  }

  pub fn state(&self) -> EdgeState {
    self.state
  }

  pub fn controls(&self) -> ControlVisibility {
    self.state.controls()
  }

  pub fn metrics(&self) -> ScrollMetrics {
    self.metrics
  }

  pub fn is_bound(&self) -> bool {
    self.bound
  }

  pub(crate) fn mark_bound(&mut self) {
    self.bound = true;
  }

  pub fn has_pending_frame(&self) -> bool {
    self.frame_pending
  }

  /// Distancia de un paso: primer elemento + separación.
  pub fn step(&self) -> f64 {
    self.surface.step_metrics().step(self.metrics.viewport_extent)
  }

  /// Activación de un control. Pide el desplazamiento y recalcula sin
  /// esperar a la animación; el estado puede quedar desfasado hasta el
  /// siguiente frame.
  pub fn on_activate(&mut self, direction: Direction) {
    if self.state == EdgeState::NoOverflow {
      return;
    }

    let delta = direction.sign() * self.step();
    self.surface.scroll_by(delta);
    self.recompute();
  }

  /// Evento de scroll del viewport: como mucho un recálculo por frame.
  pub fn on_viewport_scrolled(&mut self) -> FrameRequest {
    if self.frame_pending {
      return FrameRequest::Coalesced;
    }
    self.frame_pending = true;
    FrameRequest::Schedule
  }

  /// Callback del frame de animación.
  pub fn on_animation_frame(&mut self) {
    if !self.frame_pending {
      return;
    }
    self.frame_pending = false;
    self.recompute();
  }

  pub fn on_resized(&mut self) {
    self.recompute();
  }

  fn recompute(&mut self) -> EdgeState {
    self.metrics = self.surface.metrics();
    self.state = EdgeState::classify(&self.metrics, self.tolerance);
    self.surface.set_controls(self.state.controls());

    debug!(
      region = %self.region,
      scroll = self.metrics.scroll_extent,
      viewport = self.metrics.viewport_extent,
      offset = self.metrics.offset,
      state = ?self.state,
      "carousel recomputed"
    );

    self.state
  }
}
