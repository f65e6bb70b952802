use vitrina_carousel::{CarouselSurface, ControlVisibility, RegionId, ScrollMetrics, StepMetrics};
use vitrina_render::PresentationTree;
use vitrina_render::skeleton::SCROLLER_TRACK;

use crate::site::SurfaceProvider;

/// Fixed-size layout used when there is no real viewport to measure (CLI, tests).
///
/// Every item in a track is assumed to be `item_extent` wide with `gap` between
/// items, inside a viewport `viewport_extent` wide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadlessLayout {
  pub viewport_extent: f64,
  pub item_extent: f64,
  pub gap: f64,
}

impl Default for HeadlessLayout {
  fn default() -> Self {
    Self { viewport_extent: 1000.0, item_extent: 320.0, gap: 24.0 }
  }
}

impl HeadlessLayout {
  fn measure(&self, items: usize) -> (f64, StepMetrics) {
    if items == 0 {
      return (0.0, StepMetrics { first_item_extent: None, gap: self.gap });
    }
    let n = items as f64;
    let extent = n * self.item_extent + (n - 1.0) * self.gap;
    (extent, StepMetrics { first_item_extent: Some(self.item_extent), gap: self.gap })
  }
}

impl SurfaceProvider for HeadlessLayout {
  fn surface(&self, tree: &PresentationTree, region: &RegionId) -> Option<Box<dyn CarouselSurface>> {
    let track = tree.region(region.as_str())?.find_class(SCROLLER_TRACK)?;
    let (content_extent, step) = self.measure(track.children.len());

    Some(Box::new(HeadlessSurface {
      metrics: ScrollMetrics::new(content_extent.max(self.viewport_extent), self.viewport_extent, 0.0),
      step,
      controls: None,
    }))
  }
}

/// Surface with no animation: scroll requests land immediately, clamped to the track.
#[derive(Debug, Clone)]
pub struct HeadlessSurface {
  metrics: ScrollMetrics,
  step: StepMetrics,
  controls: Option<ControlVisibility>,
}

impl HeadlessSurface {
  pub fn controls(&self) -> Option<ControlVisibility> {
    self.controls
  }
}

impl CarouselSurface for HeadlessSurface {
  fn metrics(&self) -> ScrollMetrics {
    self.metrics
  }

  fn step_metrics(&self) -> StepMetrics {
    self.step
  }

  fn scroll_by(&mut self, delta: f64) {
    let target = self.metrics.offset + delta;
    self.scroll_to(target);
  }

  fn scroll_to(&mut self, offset: f64) {
    self.metrics.offset = offset.clamp(0.0, self.metrics.max_offset());
  }

  fn set_controls(&mut self, controls: ControlVisibility) {
    self.controls = Some(controls);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use vitrina_carousel::EdgeState;
  use vitrina_render::{Node, page_skeleton};

  #[test]
  fn empty_track_fits_the_viewport() {
    let tree = page_skeleton(&["en"]);
    let surface = HeadlessLayout::default().surface(&tree, &RegionId::new("videosCarousel")).unwrap();

    assert_eq!(EdgeState::classify(&surface.metrics(), 1.0), EdgeState::NoOverflow);
    assert_eq!(surface.step_metrics().step(1000.0), 1000.0);
  }

  #[test]
  fn long_track_overflows_and_clamps() {
    let mut tree = page_skeleton(&["en"]);
    let grid = tree.region_mut("ytGrid").unwrap();
    for _ in 0..6 {
      grid.push(Node::new("div"));
    }

    let mut surface = HeadlessLayout::default().surface(&tree, &RegionId::new("videosCarousel")).unwrap();
    assert_eq!(surface.metrics().scroll_extent, 6.0 * 320.0 + 5.0 * 24.0);

    surface.scroll_by(10_000.0);
    assert_eq!(surface.metrics().offset, surface.metrics().max_offset());
    surface.scroll_by(-20_000.0);
    assert_eq!(surface.metrics().offset, 0.0);
  }

  #[test]
  fn missing_region_has_no_surface() {
    let tree = PresentationTree::new(Node::new("html"));
    assert!(HeadlessLayout::default().surface(&tree, &RegionId::new("releasesCarousel")).is_none());
  }
}
