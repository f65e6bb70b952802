//! Renderers de sección, uno por región de la página.
//!
//! Contrato común:
//! - región ausente → no se hace nada;
//! - región presente → se vacía y se reconstruye entera;
//! - listados sin límite natural se recortan a `list_cap` elementos.

mod about;
mod common;
mod contacts;
mod hero;
mod media;
mod releases;
mod shows;
mod tracks;

use tracing::debug;
use vitrina_core::domain::{ContentModel, Release};

use crate::context::RenderContext;
use crate::tree::{Node, PresentationTree};

pub type RenderFn = fn(&ContentModel, &RenderContext<'_>, &mut PresentationTree);

#[derive(Clone, Copy)]
pub struct Section {
  pub name: &'static str,
  pub render: RenderFn,
}

/// Todas las secciones en el orden fijo de render.
pub const SECTIONS: &[Section] = &[
  Section { name: "common", render: common::render },
  Section { name: "about_photos", render: about::render },
  Section { name: "hero", render: hero::render },
  Section { name: "tracks", render: tracks::render },
  Section { name: "shows", render: shows::render },
  Section { name: "releases", render: releases::render },
  Section { name: "contacts", render: contacts::render },
  Section { name: "videos", render: media::render_videos },
  Section { name: "posts", render: media::render_posts },
];

pub fn render_all(content: &ContentModel, ctx: &RenderContext<'_>, tree: &mut PresentationTree) {
  for section in SECTIONS {
    debug!(section = section.name, locale = %ctx.locale, "rendering section");
    (section.render)(content, ctx, tree);
  }
}

/// Localiza una región y la deja vacía, lista para reconstruir.
fn rebuild<'t>(tree: &'t mut PresentationTree, id: &str) -> Option<&'t mut Node> {
  let region = tree.region_mut(id)?;
  region.clear();
  Some(region)
}

fn column() -> Node {
  Node::new("div").with_class("col-md-6 col-lg-4")
}

fn card() -> Node {
  Node::new("div").with_class("card h-100")
}

fn icon(class: &str) -> Node {
  Node::new("i").with_class(&format!("bi {class} me-1"))
}

fn external_link(class: &str, href: &str, icon_class: &str, label: impl Into<String>) -> Node {
  Node::new("a")
    .with_class(class)
    .with_attr("href", href)
    .with_attr("target", "_blank")
    .with_attr("rel", "noreferrer")
    .with_child(icon(icon_class))
    .with_child(Node::new("span").with_text(label))
}

/// Botones de YouTube/SoundCloud de un release; omitidos si falta el dato.
fn listen_buttons(release: &Release, ctx: &RenderContext<'_>) -> Vec<Node> {
  let mut buttons = Vec::new();

  if let Some(url) = release.youtube_watch_url() {
    buttons.push(external_link("btn btn-accent btn-sm", &url, "bi-youtube", ctx.label("cta.youtube", "YouTube")));
  }

  if let Some(url) = release.soundcloud_url() {
    buttons.push(external_link(
      "btn btn-outline-light btn-sm",
      url,
      "bi-soundwave",
      ctx.label("cta.soundcloud", "SoundCloud"),
    ));
  }

  buttons
}

#[cfg(test)]
pub(crate) mod fixtures {
  use vitrina_core::domain::ContentModel;
  use vitrina_core::{Locale, TextCatalog};

  use crate::context::{RenderContext, RenderOptions};

  pub const DOC: &str = r#"{
    "artist": {
      "name": "Nadia Vega",
      "bio": "Producer from Valencia.",
      "highlights": ["Sónar 2023", "BBC Radio 1 premiere"],
      "video_embed_url": "https://www.youtube.com/embed/channel-trailer",
      "hero": { "latest_release_id": "night-drive" },
      "about_photos": ["p1.jpg", "", "p2.jpg"],
      "channels": { "youtube_channel_url": "https://youtube.com/@nadia" },
      "translations": { "es": { "bio": "Productora de Valencia." } }
    },
    "releases": [
      { "id": "first-light", "title": "First Light", "year": 2021, "type": "EP", "cover": "a.jpg",
        "tracks": [{ "title": "Dawn", "duration": "3:10" }, { "title": "Haze" }],
        "soundcloud_url": "https://soundcloud.com/nadia/first-light" },
      { "id": "night-drive", "title": "Night Drive", "year": 2024, "type": "Album", "cover": "b.jpg",
        "tracks": [{ "title": "Tunnel", "duration": "4:01" }],
        "links": [{ "name": "Bandcamp", "url": "https://nadia.bandcamp.com", "icon": "bi-music-note" }] }
    ],
    "shows": [
      { "date": "2025-03-14", "city": "Madrid", "venue": "Sala Sol", "status": "On Sale", "ticket_url": "https://t.example/1" },
      { "date": "2025-04-02", "city": "Lisboa", "venue": "Lux", "status": "Sold Out" }
    ],
    "contacts": { "email": "mgmt@nadia.example", "manager": "Ana Ruiz", "location": "Valencia",
      "translations": { "es": { "location": "València" } } },
    "socials": [{ "name": "Instagram", "icon": "bi-instagram", "url": "https://instagram.com/nadia" }],
    "youtube_videos": ["v1", "v2", "v3", "v4", "v5", "v6", "v7", "v8"],
    "instagram_posts": ["https://instagram.com/p/1", "https://instagram.com/p/2"],
    "i18n": {
      "en": { "cta.tickets": "Tickets", "meta.title_suffix": "Official Site" },
      "es": { "cta.tickets": "Entradas" }
    }
  }"#;

  pub fn content() -> ContentModel {
    serde_json::from_str(DOC).unwrap()
  }

  pub struct Env {
    pub locale: Locale,
    pub catalog: TextCatalog,
    pub options: RenderOptions,
  }

  impl Env {
    pub fn new(code: &str, content: &ContentModel) -> Self {
      let default = Locale::parse("en").unwrap();
      Self {
        locale: Locale::parse(code).unwrap(),
        catalog: TextCatalog::from_content(&content.i18n, default),
        options: RenderOptions::default(),
      }
    }

    pub fn ctx(&self) -> RenderContext<'_> {
      RenderContext { locale: &self.locale, catalog: &self.catalog, options: &self.options, current_year: 2025 }
    }
  }
}
