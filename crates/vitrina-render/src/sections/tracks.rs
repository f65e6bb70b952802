use vitrina_core::domain::ContentModel;

use super::{card, column, listen_buttons, rebuild};
use crate::context::RenderContext;
use crate::tree::{Node, PresentationTree};

/// Pistas de todos los releases, aplanadas en orden y recortadas a `list_cap`.
pub(super) fn render(content: &ContentModel, ctx: &RenderContext<'_>, tree: &mut PresentationTree) {
  let Some(grid) = rebuild(tree, "tracks") else {
    return;
  };

  let tracks = content.releases.iter().flat_map(|r| r.tracks.iter().map(move |t| (r, t))).take(ctx.list_cap());

  for (release, track) in tracks {
    let category = release.category.as_ref().map(ToString::to_string).unwrap_or_default();
    let origin = match release.year.trim() {
      "" => release.title.clone(),
      year => format!("{} • {year}", release.title),
    };
    let header = Node::new("div")
      .with_class("d-flex justify-content-between align-items-center mb-1")
      .with_child(Node::new("span").with_class("small text-muted").with_text(origin))
      .with_child(Node::new("span").with_class("small chip").with_text(category));

    let body = Node::new("div")
      .with_class("card-body d-flex flex-column")
      .with_child(header)
      .with_child(Node::new("h5").with_class("card-title mb-1").with_text(track.title.clone()))
      .with_child(Node::new("div").with_class("text-muted small mb-2").with_text(track.duration.clone().unwrap_or_default()))
      .with_child(Node::new("div").with_class("mt-auto d-flex flex-wrap gap-2").with_children(listen_buttons(release, ctx)));

    let cover = Node::new("img")
      .with_class("card-img-top")
      .with_attr("src", release.cover.clone())
      .with_attr("alt", format!("{} cover", release.title))
      .with_attr("loading", "lazy");

    grid.push(column().with_child(card().with_child(cover).with_child(body)));
  }
}
