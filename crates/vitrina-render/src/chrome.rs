use crate::context::RenderContext;
use crate::tree::PresentationTree;

/// Atributo con la clave de catálogo del texto de un nodo.
pub const TEXT_KEY_ATTR: &str = "data-i18n";
/// Atributo con la clave de catálogo del `aria-label` de un nodo.
pub const ARIA_KEY_ATTR: &str = "data-i18n-aria";

/// Aplica el catálogo al "chrome" estático: navegación, títulos, botones.
///
/// Sustituye el texto de cada nodo marcado con `data-i18n` y su `aria-label`
/// si lleva `data-i18n-aria`. Es idempotente: el resultado solo depende del
/// locale y de las claves, no del texto anterior.
pub fn apply_static_text(tree: &mut PresentationTree, ctx: &RenderContext<'_>) {
  tree.root.set_attr("lang", ctx.locale.as_str());

  tree.root.walk_mut(&mut |node| {
    if let Some(key) = node.attr(TEXT_KEY_ATTR) {
      let text = ctx.text(key).to_string();
      node.text = text;
    }
    if let Some(key) = node.attr(ARIA_KEY_ATTR) {
      let label = ctx.text(key).to_string();
      node.set_attr("aria-label", label);
    }
  });
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::context::RenderOptions;
  use crate::tree::Node;
  use vitrina_core::{Locale, TextCatalog};

  #[test]
  fn replaces_marked_text_and_falls_back() {
    let en = Locale::parse("en").unwrap();
    let es = Locale::parse("es").unwrap();
    let mut catalog = TextCatalog::new(en.clone());
    catalog.insert(en.clone(), "nav.music", "Music");
    catalog.insert(en.clone(), "nav.shows", "Shows");
    catalog.insert(es.clone(), "nav.music", "Música");
    catalog.insert(es.clone(), "nav.menu", "Abrir menú");

    let root = Node::new("html")
      .with_child(Node::new("a").with_attr(TEXT_KEY_ATTR, "nav.music").with_text("stale"))
      .with_child(Node::new("a").with_attr(TEXT_KEY_ATTR, "nav.shows"))
      .with_child(Node::new("a").with_attr(TEXT_KEY_ATTR, "nav.missing").with_text("stale"))
      .with_child(Node::new("button").with_attr(ARIA_KEY_ATTR, "nav.menu"));
    let mut tree = PresentationTree::new(root);

    let options = RenderOptions::default();
    let ctx = RenderContext { locale: &es, catalog: &catalog, options: &options, current_year: 2025 };
    apply_static_text(&mut tree, &ctx);

    let texts: Vec<&str> = tree.root.children.iter().map(|n| n.text.as_str()).collect();
    assert_eq!(texts, ["Música", "Shows", "", ""]);
    assert_eq!(tree.root.children[3].attr("aria-label"), Some("Abrir menú"));
    assert_eq!(tree.root.attr("lang"), Some("es"));
  }
}
