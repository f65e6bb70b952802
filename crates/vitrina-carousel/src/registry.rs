use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::config::CarouselConfig;
use crate::controller::{CarouselController, FrameRequest};
use crate::geometry::EdgeState;
use crate::surface::{CarouselSurface, Direction, RegionId};

/// Resultado de registrar una región.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attached {
  /// Primera vez: el host debe enlazar sus listeners.
  New,
  /// La región ya tenía controlador y listeners; sólo se actualizó la superficie.
  Updated,
}

impl Attached {
  pub fn needs_binding(self) -> bool {
    matches!(self, Attached::New)
  }
}

/// Un controlador por identidad de región, creado una vez y reutilizado.
pub struct CarouselRegistry {
  controllers: BTreeMap<RegionId, CarouselController>,
  tolerance: f64,
}

impl CarouselRegistry {
  pub fn new(tolerance: f64) -> Self {
    Self { controllers: BTreeMap::new(), tolerance }
  }

  pub fn from_config(config: &CarouselConfig) -> Self {
    Self::new(config.edge_tolerance)
  }

  /// Registra o actualiza la región. Nunca crea un segundo controlador ni
  /// pide enlazar listeners dos veces para la misma identidad.
  pub fn attach(&mut self, region: RegionId, surface: Box<dyn CarouselSurface>) -> Attached {
    if let Some(controller) = self.controllers.get_mut(&region) {
      controller.reattach(surface);
      debug!(region = %region, "carousel re-attached");
      return Attached::Updated;
    }

    let mut controller = CarouselController::attach(region.clone(), surface, self.tolerance);
    controller.mark_bound();
    debug!(region = %region, state = ?controller.state(), "carousel attached");
    self.controllers.insert(region, controller);
    Attached::New
  }

  pub fn get(&self, region: &RegionId) -> Option<&CarouselController> {
    self.controllers.get(region)
  }

  pub fn contains(&self, region: &RegionId) -> bool {
    self.controllers.contains_key(region)
  }

  pub fn activate(&mut self, region: &RegionId, direction: Direction) {
    match self.controllers.get_mut(region) {
      Some(controller) => controller.on_activate(direction),
      None => warn!(region = %region, "activation on unknown carousel"),
    }
  }

  /// `None` si la región no está registrada.
  pub fn viewport_scrolled(&mut self, region: &RegionId) -> Option<FrameRequest> {
    self.controllers.get_mut(region).map(CarouselController::on_viewport_scrolled)
  }

  /// Ejecuta los recálculos pendientes de todas las regiones.
  pub fn animation_frame(&mut self) {
    for controller in self.controllers.values_mut() {
      controller.on_animation_frame();
    }
  }

  pub fn resized(&mut self) {
    for controller in self.controllers.values_mut() {
      controller.on_resized();
    }
  }

  pub fn len(&self) -> usize {
    self.controllers.len()
  }

  pub fn is_empty(&self) -> bool {
    self.controllers.is_empty()
  }

  pub fn states(&self) -> BTreeMap<RegionId, EdgeState> {
    self.controllers.iter().map(|(id, c)| (id.clone(), c.state())).collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::geometry::ControlVisibility;
  use crate::surface::testing::FakeSurface;

  fn region(id: &str) -> RegionId {
    RegionId::new(id)
  }

  #[test]
  fn reattach_never_binds_twice() {
    let mut registry = CarouselRegistry::new(1.0);
    let first = FakeSurface::new(1500.0, 1000.0, 280.0, 16.0);

    assert_eq!(registry.attach(region("videosCarousel"), Box::new(first)), Attached::New);

    for _ in 0..3 {
      let again = FakeSurface::new(1500.0, 1000.0, 280.0, 16.0);
      assert_eq!(registry.attach(region("videosCarousel"), Box::new(again)), Attached::Updated);
    }

    assert_eq!(registry.len(), 1);
    assert!(registry.get(&region("videosCarousel")).is_some_and(|c| c.is_bound()));
  }

  #[test]
  fn reattach_picks_up_new_measurements() {
    let mut registry = CarouselRegistry::new(1.0);
    registry.attach(region("postsCarousel"), Box::new(FakeSurface::new(1500.0, 1000.0, 280.0, 16.0)));

    // Tras el re-render la pista cabe entera.
    let smaller = FakeSurface::new(900.0, 1000.0, 280.0, 16.0);
    registry.attach(region("postsCarousel"), Box::new(smaller.clone()));

    assert_eq!(registry.states()[&region("postsCarousel")], EdgeState::NoOverflow);
    assert_eq!(smaller.controls(), Some(ControlVisibility { prev: false, next: false }));
  }

  #[test]
  fn resize_recomputes_every_region() {
    let mut registry = CarouselRegistry::new(1.0);
    let a = FakeSurface::new(1500.0, 1000.0, 280.0, 16.0);
    let b = FakeSurface::new(1500.0, 1000.0, 280.0, 16.0);
    registry.attach(region("releasesCarousel"), Box::new(a.clone()));
    registry.attach(region("videosCarousel"), Box::new(b.clone()));

    a.set_offset(500.0);
    b.set_offset(250.0);
    registry.resized();

    let states = registry.states();
    assert_eq!(states[&region("releasesCarousel")], EdgeState::AtEnd);
    assert_eq!(states[&region("videosCarousel")], EdgeState::Middle);
  }

  #[test]
  fn frames_are_per_region() {
    let mut registry = CarouselRegistry::new(1.0);
    let a = FakeSurface::new(1500.0, 1000.0, 280.0, 16.0);
    let b = FakeSurface::new(1500.0, 1000.0, 280.0, 16.0);
    registry.attach(region("releasesCarousel"), Box::new(a.clone()));
    registry.attach(region("videosCarousel"), Box::new(b.clone()));

    assert_eq!(registry.viewport_scrolled(&region("releasesCarousel")), Some(FrameRequest::Schedule));
    assert_eq!(registry.viewport_scrolled(&region("videosCarousel")), Some(FrameRequest::Schedule));
    assert_eq!(registry.viewport_scrolled(&region("releasesCarousel")), Some(FrameRequest::Coalesced));
    assert_eq!(registry.viewport_scrolled(&region("missing")), None);

    a.set_offset(250.0);
    registry.animation_frame();
    assert_eq!(registry.states()[&region("releasesCarousel")], EdgeState::Middle);
    assert!(!registry.get(&region("videosCarousel")).is_some_and(|c| c.has_pending_frame()));
  }

  #[test]
  fn activation_routes_to_region() {
    let mut registry = CarouselRegistry::new(1.0);
    let a = FakeSurface::new(1500.0, 1000.0, 300.0, 24.0);
    registry.attach(region("releasesCarousel"), Box::new(a.clone()));

    registry.activate(&region("releasesCarousel"), Direction::Next);
    registry.activate(&region("nope"), Direction::Next);

    assert_eq!(a.scroll_requests(), vec![324.0]);
  }
}
