use chrono::Datelike;
use tracing::{debug, info};
use vitrina_carousel::{CarouselConfig, CarouselRegistry, CarouselSurface, Direction, EdgeState, FrameRequest, RegionId};
use vitrina_config::{ConfigBackend, ConfigError, SiteConfig};
use vitrina_core::domain::ContentModel;
use vitrina_core::ports::PreferenceStore;
use vitrina_core::{Locale, LocaleResolver, TextCatalog};
use vitrina_render::skeleton::{SCROLLER_NEXT, SCROLLER_PREV};
use vitrina_render::{PresentationTree, RenderContext, RenderOptions, apply_static_text, page_skeleton, render_all};

/// Host adapter that hands out a measurable surface for a carousel region.
///
/// Returns `None` when the region is not present in the tree.
pub trait SurfaceProvider {
  fn surface(&self, tree: &PresentationTree, region: &RegionId) -> Option<Box<dyn CarouselSurface>>;
}

/// Everything the site reads from configuration at boot.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
  pub site: SiteConfig,
  pub carousel: CarouselConfig,
  /// Year shown in the footer. Fixed at boot so re-renders never drift.
  pub current_year: i32,
}

impl Default for Settings {
  fn default() -> Self {
    Self { site: SiteConfig::default(), carousel: CarouselConfig::default(), current_year: chrono::Local::now().year() }
  }
}

impl Settings {
  pub fn load<B: ConfigBackend>(backend: &B) -> Result<Self, ConfigError> {
    Ok(Self {
      site: SiteConfig::load(backend)?,
      carousel: CarouselConfig::load(backend)?,
      current_year: chrono::Local::now().year(),
    })
  }
}

/// The orchestrator: owns the content, the active locale, the text catalog,
/// the carousel registry and the presentation tree they produce.
///
/// Every render cycle runs in the same order: static text, then sections,
/// then carousel re-attachment against the freshly rendered tree.
pub struct Site<P: PreferenceStore, L: SurfaceProvider> {
  content: ContentModel,
  resolver: LocaleResolver<P>,
  catalog: TextCatalog,
  registry: CarouselRegistry,
  regions: Vec<RegionId>,
  layout: L,
  options: RenderOptions,
  current_year: i32,
  locale: Locale,
  tree: PresentationTree,
}

impl<P: PreferenceStore, L: SurfaceProvider> Site<P, L> {
  /// Builds the site and performs the first render.
  ///
  /// `url_param` is the raw value of the locale request parameter, if any.
  pub fn boot(content: ContentModel, settings: Settings, store: P, layout: L, url_param: Option<&str>) -> Self {
    // 1. Locale resolution (request > persisted > default).
    let resolver = LocaleResolver::new(settings.site.supported(), store);
    let locale = resolver.resolve(url_param).locale;

    // 2. Text catalog, derived once from the content document.
    let catalog = TextCatalog::from_content(&content.i18n, resolver.supported().default_locale().clone());
    debug!(locale = %locale, keys = catalog.keys(&locale).len(), "text catalog loaded");

    // 3. Carousel registry, empty until the first render attaches regions.
    let registry = CarouselRegistry::from_config(&settings.carousel);
    let regions = settings.carousel.regions.iter().map(RegionId::new).collect();

    let codes: Vec<&str> = resolver.supported().iter().map(Locale::as_str).collect();
    let tree = page_skeleton(&codes);

    let mut site = Self {
      content,
      resolver,
      catalog,
      registry,
      regions,
      layout,
      options: RenderOptions::from_config(&settings.site),
      current_year: settings.current_year,
      locale,
      tree,
    };
    site.render_cycle();

    info!(locale = %site.locale, artist = %site.content.artist.name, "site ready");
    site
  }

  pub fn locale(&self) -> &Locale {
    &self.locale
  }

  pub fn tree(&self) -> &PresentationTree {
    &self.tree
  }

  pub fn content(&self) -> &ContentModel {
    &self.content
  }

  pub fn catalog(&self) -> &TextCatalog {
    &self.catalog
  }

  pub fn registry(&self) -> &CarouselRegistry {
    &self.registry
  }

  pub fn store(&self) -> &P {
    self.resolver.store()
  }

  /// Switches the active locale and re-renders everything.
  ///
  /// Total: unsupported input collapses to the default locale. Idempotent:
  /// repeating a switch leaves the tree unchanged.
  pub fn switch_locale(&mut self, requested: &str) -> &Locale {
    self.locale = self.resolver.switch(requested);
    debug!(requested, locale = %self.locale, "switching locale");
    self.render_cycle();
    &self.locale
  }

  /// Host event: a carousel control was activated.
  pub fn activate(&mut self, region: &str, direction: Direction) {
    self.registry.activate(&RegionId::new(region), direction);
    self.sync_controls();
  }

  /// Host event: a carousel viewport scrolled. The host should request an
  /// animation frame when this returns [`FrameRequest::Schedule`].
  pub fn viewport_scrolled(&mut self, region: &str) -> Option<FrameRequest> {
    self.registry.viewport_scrolled(&RegionId::new(region))
  }

  pub fn animation_frame(&mut self) {
    self.registry.animation_frame();
    self.sync_controls();
  }

  pub fn resized(&mut self) {
    self.registry.resized();
    self.sync_controls();
  }

  pub fn carousel_state(&self, region: &str) -> Option<EdgeState> {
    self.registry.get(&RegionId::new(region)).map(|c| c.state())
  }

  fn render_cycle(&mut self) {
    let ctx = RenderContext {
      locale: &self.locale,
      catalog: &self.catalog,
      options: &self.options,
      current_year: self.current_year,
    };

    apply_static_text(&mut self.tree, &ctx);
    render_all(&self.content, &ctx, &mut self.tree);
    self.attach_carousels();
  }

  fn attach_carousels(&mut self) {
    for region in &self.regions {
      let Some(surface) = self.layout.surface(&self.tree, region) else {
        debug!(region = %region, "carousel region not in tree");
        continue;
      };

      if self.registry.attach(region.clone(), surface).needs_binding() {
        debug!(region = %region, "carousel listeners bound");
      }
    }
    self.sync_controls();
  }

  /// Mirrors every controller's control visibility into the tree.
  fn sync_controls(&mut self) {
    for (region, state) in self.registry.states() {
      let controls = state.controls();
      let Some(node) = self.tree.region_mut(region.as_str()) else {
        continue;
      };
      if let Some(prev) = node.find_class_mut(SCROLLER_PREV) {
        prev.set_hidden(!controls.prev);
      }
      if let Some(next) = node.find_class_mut(SCROLLER_NEXT) {
        next.set_hidden(!controls.next);
      }
    }
  }
}
