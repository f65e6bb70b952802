use crate::chrome::{ARIA_KEY_ATTR, TEXT_KEY_ATTR};
use crate::tree::{Node, PresentationTree};

/// Clases que marcan las partes de una región desplazable.
pub const SCROLLER_PREV: &str = "carousel-prev";
pub const SCROLLER_NEXT: &str = "carousel-next";
pub const SCROLLER_VIEWPORT: &str = "carousel-viewport";
pub const SCROLLER_TRACK: &str = "carousel-track";

/// Regiones desplazables de la página por defecto, en orden de aparición.
pub const SCROLLER_REGIONS: [&str; 3] = ["releasesCarousel", "videosCarousel", "postsCarousel"];

fn t(tag: &str, key: &str) -> Node {
  Node::new(tag).with_attr(TEXT_KEY_ATTR, key)
}

fn heading(key: &str) -> Node {
  t("h2", key).with_class("section-title")
}

/// Región desplazable: control anterior, viewport con la pista, control siguiente.
fn scroller(region_id: &str, track_id: &str) -> Node {
  Node::new("div")
    .with_id(region_id)
    .with_class("scroll-carousel")
    .with_child(
      Node::new("button")
        .with_class(SCROLLER_PREV)
        .with_attr("type", "button")
        .with_attr(ARIA_KEY_ATTR, "carousel.prev"),
    )
    .with_child(
      Node::new("div")
        .with_class(SCROLLER_VIEWPORT)
        .with_child(Node::new("div").with_id(track_id).with_class(&format!("{SCROLLER_TRACK} row flex-nowrap"))),
    )
    .with_child(
      Node::new("button")
        .with_class(SCROLLER_NEXT)
        .with_attr("type", "button")
        .with_attr(ARIA_KEY_ATTR, "carousel.next"),
    )
}

fn about_photos() -> Node {
  Node::new("div")
    .with_id("aboutCarousel")
    .with_class("carousel slide")
    .with_child(Node::new("div").with_class("carousel-indicators"))
    .with_child(Node::new("div").with_class("carousel-inner"))
    .with_child(Node::new("button").with_class("carousel-control-prev").with_attr(ARIA_KEY_ATTR, "carousel.prev"))
    .with_child(Node::new("button").with_class("carousel-control-next").with_attr(ARIA_KEY_ATTR, "carousel.next"))
}

fn lang_button(code: &str) -> Node {
  Node::new("button")
    .with_class("lang-switch")
    .with_attr("type", "button")
    .with_attr("data-locale", code)
    .with_text(code.to_uppercase())
}

/// Página por defecto con todas las regiones con nombre.
///
/// El marcado real es externo; este esqueleto es el contrato mínimo que los
/// renderers esperan y lo que usa la CLI cuando no se le da otra plantilla.
pub fn page_skeleton(locales: &[&str]) -> PresentationTree {
  let nav = Node::new("nav")
    .with_child(Node::new("span").with_id("brandName").with_class("brand"))
    .with_child(t("a", "nav.about").with_attr("href", "#about"))
    .with_child(t("a", "nav.music").with_attr("href", "#music"))
    .with_child(t("a", "nav.shows").with_attr("href", "#shows"))
    .with_child(t("a", "nav.videos").with_attr("href", "#videos"))
    .with_child(t("a", "nav.contact").with_attr("href", "#contact"))
    .with_child(Node::new("div").with_class("lang-switcher").with_children(locales.iter().map(|c| lang_button(c))));

  let hero = Node::new("section")
    .with_id("hero")
    .with_child(heading("hero.heading"))
    .with_child(Node::new("p").with_id("latestReleaseMeta"))
    .with_child(Node::new("iframe").with_id("latestYouTube").with_attr("allowfullscreen", "true"));

  let about = Node::new("section")
    .with_id("about")
    .with_child(heading("about.heading"))
    .with_child(about_photos())
    .with_child(Node::new("p").with_id("bio"))
    .with_child(Node::new("ul").with_id("highlights").with_class("list-unstyled"));

  let music = Node::new("section")
    .with_id("music")
    .with_child(heading("music.heading"))
    .with_child(scroller("releasesCarousel", "releases"))
    .with_child(t("h3", "tracks.heading"))
    .with_child(Node::new("div").with_id("tracks").with_class("row g-3"));

  let shows = Node::new("section")
    .with_id("shows")
    .with_child(heading("shows.heading"))
    .with_child(Node::new("div").with_id("showsList").with_class("row g-3"))
    .with_child(t("p", "shows.empty").with_id("noShows").with_class("text-muted"));

  let videos = Node::new("section")
    .with_id("videos")
    .with_child(heading("videos.heading"))
    .with_child(t("a", "videos.channel").with_id("youtubeChannelLink").with_attr("target", "_blank"))
    .with_child(scroller("videosCarousel", "ytGrid"));

  let posts = Node::new("section")
    .with_id("posts")
    .with_child(heading("posts.heading"))
    .with_child(t("a", "posts.profile").with_id("instagramProfileLink").with_attr("target", "_blank"))
    .with_child(scroller("postsCarousel", "igGrid"));

  let contact = Node::new("section")
    .with_id("contact")
    .with_child(heading("contact.heading"))
    .with_child(Node::new("div").with_id("contactInfo"))
    .with_child(Node::new("div").with_id("socials").with_class("d-flex flex-wrap gap-2"));

  let footer = Node::new("footer")
    .with_child(Node::new("span").with_id("footerArtist"))
    .with_child(Node::new("span").with_id("year"))
    .with_child(t("span", "footer.rights"));

  let root = Node::new("html").with_child(Node::new("body").with_children([
    nav, hero, about, music, shows, videos, posts, contact, footer,
  ]));

  PresentationTree::new(root)
}
