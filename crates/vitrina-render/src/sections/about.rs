use vitrina_core::domain::ContentModel;

use crate::context::RenderContext;
use crate::tree::{Node, PresentationTree};

const INNER: &str = "carousel-inner";
const INDICATORS: &str = "carousel-indicators";
const CONTROLS: [&str; 2] = ["carousel-control-prev", "carousel-control-next"];

/// Carrusel de fotos de la sección "about": una diapositiva y un indicador por foto.
///
/// Sin fotos se ocultan controles e indicadores; con una sola también, porque
/// no hay a dónde navegar.
pub(super) fn render(content: &ContentModel, ctx: &RenderContext<'_>, tree: &mut PresentationTree) {
  let Some(carousel) = tree.region_mut("aboutCarousel") else {
    return;
  };
  if carousel.find_class(INNER).is_none() {
    return;
  }

  let photos: Vec<&str> =
    content.artist.about_photos.iter().map(String::as_str).filter(|p| !p.trim().is_empty()).collect();
  let slide_label = ctx.label("carousel.slide", "Slide");
  let photo_alt = ctx.label("about.photo_alt", "About photo");

  let slides = photos.iter().enumerate().map(|(i, src)| {
    let classes = if i == 0 { "carousel-item h-100 active" } else { "carousel-item h-100" };
    Node::new("div").with_class(classes).with_child(
      Node::new("img")
        .with_class("d-block w-100 h-100 object-cover")
        .with_attr("src", *src)
        .with_attr("alt", format!("{photo_alt} {}", i + 1))
        .with_attr("loading", "lazy"),
    )
  });

  let dots = (0..photos.len()).map(|i| {
    let mut dot = Node::new("button")
      .with_attr("type", "button")
      .with_attr("data-bs-target", "#aboutCarousel")
      .with_attr("data-bs-slide-to", i.to_string())
      .with_attr("aria-label", format!("{slide_label} {}", i + 1));
    if i == 0 {
      dot = dot.with_class("active").with_attr("aria-current", "true");
    }
    dot
  });

  if let Some(inner) = carousel.find_class_mut(INNER) {
    inner.clear();
    inner.children.extend(slides);
  }

  let navigable = photos.len() > 1;

  if let Some(indicators) = carousel.find_class_mut(INDICATORS) {
    indicators.clear();
    indicators.children.extend(dots);
    indicators.set_hidden(!navigable);
  }

  for class in CONTROLS {
    if let Some(control) = carousel.find_class_mut(class) {
      control.set_hidden(!navigable);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::super::fixtures::{Env, content};
  use super::*;
  use crate::skeleton::page_skeleton;

  fn render_with(photos: &[&str]) -> PresentationTree {
    let mut content = content();
    content.artist.about_photos = photos.iter().map(|p| p.to_string()).collect();
    let env = Env::new("en", &content);
    let mut tree = page_skeleton(&["en"]);
    render(&content, &env.ctx(), &mut tree);
    tree
  }

  #[test]
  fn one_slide_per_non_empty_photo() {
    let tree = render_with(&["a.jpg", " ", "b.jpg"]);
    let carousel = tree.region("aboutCarousel").unwrap();

    let inner = carousel.find_class(INNER).unwrap();
    assert_eq!(inner.children.len(), 2);
    assert!(inner.children[0].has_class("active"));
    assert!(!inner.children[1].has_class("active"));

    let dots = carousel.find_class(INDICATORS).unwrap();
    assert_eq!(dots.children.len(), 2);
    assert_eq!(dots.children[1].attr("aria-label"), Some("Slide 2"));
    assert!(!dots.is_hidden());
    assert!(!carousel.find_class("carousel-control-next").unwrap().is_hidden());
  }

  #[test]
  fn single_photo_hides_navigation() {
    let tree = render_with(&["a.jpg"]);
    let carousel = tree.region("aboutCarousel").unwrap();

    assert_eq!(carousel.find_class(INNER).unwrap().children.len(), 1);
    assert!(carousel.find_class(INDICATORS).unwrap().is_hidden());
    assert!(carousel.find_class("carousel-control-prev").unwrap().is_hidden());
  }

  #[test]
  fn no_photos_leaves_empty_hidden_carousel() {
    let tree = render_with(&[]);
    let carousel = tree.region("aboutCarousel").unwrap();

    assert!(carousel.find_class(INNER).unwrap().children.is_empty());
    assert!(carousel.find_class("carousel-control-next").unwrap().is_hidden());
  }
}
