use vitrina_core::domain::ContentModel;

use super::{card, column, rebuild};
use crate::context::RenderContext;
use crate::tree::{Node, PresentationTree};

/// Vídeos recientes de YouTube, recortados a `list_cap`.
pub(super) fn render_videos(content: &ContentModel, ctx: &RenderContext<'_>, tree: &mut PresentationTree) {
  let channel = content.artist.channels.youtube_channel_url.clone().unwrap_or_else(|| "#".to_string());
  let title = ctx.label("videos.frame_title", "YouTube video");

  let Some(grid) = rebuild(tree, "ytGrid") else {
    return;
  };

  for id in content.youtube_videos.iter().take(ctx.list_cap()) {
    let frame = Node::new("iframe")
      .with_attr("src", format!("https://www.youtube.com/embed/{id}"))
      .with_attr("title", title.clone())
      .with_attr(
        "allow",
        "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share",
      )
      .with_attr("allowfullscreen", "true")
      .with_attr("loading", "lazy");
    grid.push(column().with_child(card().with_child(Node::new("div").with_class("ratio ratio-16x9").with_child(frame))));
  }

  if let Some(link) = tree.region_mut("youtubeChannelLink") {
    link.set_attr("href", channel);
  }
}

/// Publicaciones de Instagram como permalinks, recortadas a `list_cap`.
pub(super) fn render_posts(content: &ContentModel, ctx: &RenderContext<'_>, tree: &mut PresentationTree) {
  let profile = content.artist.channels.instagram_url.clone().unwrap_or_else(|| "#".to_string());

  let Some(grid) = rebuild(tree, "igGrid") else {
    return;
  };

  for url in content.instagram_posts.iter().take(ctx.list_cap()) {
    let embed = Node::new("blockquote")
      .with_class("instagram-media")
      .with_attr("data-instgrm-permalink", url.clone())
      .with_attr("data-instgrm-version", "14");
    grid.push(column().with_child(card().with_child(embed)));
  }

  if let Some(link) = tree.region_mut("instagramProfileLink") {
    link.set_attr("href", profile);
  }
}
