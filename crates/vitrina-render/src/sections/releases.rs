use vitrina_core::domain::ContentModel;

use super::{card, column, external_link, listen_buttons, rebuild};
use crate::context::RenderContext;
use crate::tree::{Node, PresentationTree};

/// Una tarjeta por release con su lista completa de pistas.
///
/// La región es la pista de un carrusel desplazable; aquí no se recorta.
pub(super) fn render(content: &ContentModel, ctx: &RenderContext<'_>, tree: &mut PresentationTree) {
  let Some(track) = rebuild(tree, "releases") else {
    return;
  };

  for release in &content.releases {
    let header = Node::new("div")
      .with_class("d-flex justify-content-between align-items-center mb-2")
      .with_child(Node::new("h5").with_class("card-title mb-0").with_text(release.title.clone()))
      .with_child(Node::new("span").with_class("chip").with_text(release.category_and_year()));

    let tracklist = Node::new("ul").with_class("list-unstyled small mb-3").with_children(release.tracks.iter().map(|t| {
      Node::new("li")
        .with_text(format!("• {} ", t.title))
        .with_child(Node::new("span").with_class("text-muted").with_text(t.duration.clone().unwrap_or_default()))
    }));

    let mut actions = listen_buttons(release, ctx);
    actions.extend(release.links.iter().filter(|l| !l.url.trim().is_empty()).map(|l| {
      external_link("btn btn-outline-light btn-sm", &l.url, l.icon.as_deref().unwrap_or("bi-link-45deg"), l.name.clone())
    }));

    let body = Node::new("div")
      .with_class("card-body d-flex flex-column")
      .with_child(header)
      .with_child(tracklist)
      .with_child(Node::new("div").with_class("mt-auto d-flex flex-wrap gap-2").with_children(actions));

    let cover = Node::new("img")
      .with_class("card-img-top")
      .with_attr("src", release.cover.clone())
      .with_attr("alt", format!("{} cover", release.title))
      .with_attr("loading", "lazy");

    track.push(column().with_class("carousel-item-card").with_child(card().with_child(cover).with_child(body)));
  }
}
