use vitrina_core::domain::ContentModel;

use super::rebuild;
use crate::context::RenderContext;
use crate::tree::{Node, PresentationTree};

/// Nombre, año, biografía y titulares: lo que aparece en varias partes de la página.
pub(super) fn render(content: &ContentModel, ctx: &RenderContext<'_>, tree: &mut PresentationTree) {
  let artist = &content.artist;
  let translation = artist.translation(ctx.locale);

  tree.title = format!("{} — {}", artist.name, ctx.label("meta.title_suffix", "Official Site"));

  for id in ["brandName", "footerArtist"] {
    if let Some(region) = rebuild(tree, id) {
      region.text = artist.name.clone();
    }
  }

  if let Some(year) = rebuild(tree, "year") {
    year.text = ctx.current_year.to_string();
  }

  if let Some(bio) = rebuild(tree, "bio") {
    let localized = translation.and_then(|t| t.bio.as_deref());
    bio.text = ctx.catalog.select(ctx.locale, artist.bio.as_str(), localized).to_string();
  }

  if let Some(list) = rebuild(tree, "highlights") {
    let localized = translation.and_then(|t| t.highlights.as_deref());
    let items = ctx.catalog.select(ctx.locale, artist.highlights.as_slice(), localized);
    list.children = items.iter().map(|h| Node::new("li").with_text(format!("• {h}"))).collect();
  }

  if let Some(video) = tree.region_mut("videoEmbed") {
    video.set_attr("src", artist.video_embed_url.clone().unwrap_or_default());
  }
}

#[cfg(test)]
mod tests {
  use super::super::fixtures::{Env, content};
  use super::*;
  use crate::skeleton::page_skeleton;

  #[test]
  fn fills_shared_regions() {
    let content = content();
    let env = Env::new("en", &content);
    let mut tree = page_skeleton(&["en", "es"]);

    render(&content, &env.ctx(), &mut tree);

    assert_eq!(tree.title, "Nadia Vega — Official Site");
    assert_eq!(tree.region("brandName").unwrap().text, "Nadia Vega");
    assert_eq!(tree.region("footerArtist").unwrap().text, "Nadia Vega");
    assert_eq!(tree.region("year").unwrap().text, "2025");
    assert_eq!(tree.region("bio").unwrap().text, "Producer from Valencia.");
    let items: Vec<&str> = tree.region("highlights").unwrap().children.iter().map(|n| n.text.as_str()).collect();
    assert_eq!(items, ["• Sónar 2023", "• BBC Radio 1 premiere"]);
  }

  #[test]
  fn localized_bio_and_base_highlights_in_secondary_locale() {
    let content = content();
    let env = Env::new("es", &content);
    let mut tree = page_skeleton(&["en", "es"]);

    render(&content, &env.ctx(), &mut tree);

    assert_eq!(tree.region("bio").unwrap().text, "Productora de Valencia.");
    assert_eq!(tree.region("highlights").unwrap().children.len(), 2);
  }

  #[test]
  fn bio_without_variant_keeps_default_text() {
    let mut content = content();
    content.artist.translations.clear();
    let env = Env::new("es", &content);
    let mut tree = page_skeleton(&["en", "es"]);

    render(&content, &env.ctx(), &mut tree);

    assert_eq!(tree.region("bio").unwrap().text, "Producer from Valencia.");
  }

  #[test]
  fn sets_legacy_video_embed_when_present() {
    let content = content();
    let env = Env::new("en", &content);
    let mut tree = PresentationTree::new(Node::new("div").with_child(Node::new("iframe").with_id("videoEmbed")));

    render(&content, &env.ctx(), &mut tree);

    assert_eq!(
      tree.region("videoEmbed").unwrap().attr("src"),
      Some("https://www.youtube.com/embed/channel-trailer")
    );
  }
}
