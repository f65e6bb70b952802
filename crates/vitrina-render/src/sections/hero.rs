use vitrina_core::domain::ContentModel;

use super::rebuild;
use crate::context::RenderContext;
use crate::tree::PresentationTree;

/// Portada: el release seleccionado y su vídeo.
///
/// Sin vídeo propio se usa el embed genérico del artista, nunca un `src` vacío
/// si el artista tiene uno.
pub(super) fn render(content: &ContentModel, _ctx: &RenderContext<'_>, tree: &mut PresentationTree) {
  let Some(release) = content.selected_release() else {
    return;
  };

  if let Some(meta) = rebuild(tree, "latestReleaseMeta") {
    meta.text = format!("{} • {}", release.title, release.year);
  }

  if let Some(player) = tree.region_mut("latestYouTube") {
    let src = release.youtube_embed_url().or_else(|| content.artist.video_embed_url.clone()).unwrap_or_default();
    player.set_attr("src", src);
  }
}

#[cfg(test)]
mod tests {
  use super::super::fixtures::{Env, content};
  use super::*;
  use crate::skeleton::page_skeleton;

  #[test]
  fn selected_release_without_video_falls_back_to_artist_embed() {
    let content = content();
    let env = Env::new("en", &content);
    let mut tree = page_skeleton(&["en"]);

    render(&content, &env.ctx(), &mut tree);

    assert_eq!(tree.region("latestReleaseMeta").unwrap().text, "Night Drive • 2024");
    assert_eq!(
      tree.region("latestYouTube").unwrap().attr("src"),
      Some("https://www.youtube.com/embed/channel-trailer")
    );
  }

  #[test]
  fn selected_release_video_wins() {
    let mut content = content();
    content.releases[1].youtube_video_id = Some("xyz".into());
    let env = Env::new("en", &content);
    let mut tree = page_skeleton(&["en"]);

    render(&content, &env.ctx(), &mut tree);

    assert_eq!(tree.region("latestYouTube").unwrap().attr("src"), Some("https://www.youtube.com/embed/xyz"));
  }

  #[test]
  fn no_releases_is_a_no_op() {
    let mut content = content();
    content.releases.clear();
    let env = Env::new("en", &content);
    let mut tree = page_skeleton(&["en"]);
    let before = tree.clone();

    render(&content, &env.ctx(), &mut tree);

    assert_eq!(tree, before);
  }
}
