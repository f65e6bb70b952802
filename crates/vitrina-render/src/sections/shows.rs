use vitrina_core::domain::ContentModel;

use super::{card, column};
use crate::context::RenderContext;
use crate::dates::format_show_date;
use crate::tree::{Node, PresentationTree};

/// Conciertos. Necesita tanto la rejilla como el aviso de "sin conciertos".
pub(super) fn render(content: &ContentModel, ctx: &RenderContext<'_>, tree: &mut PresentationTree) {
  if tree.region("showsList").is_none() || tree.region("noShows").is_none() {
    return;
  }

  let cards: Vec<Node> = content.shows.iter().map(|show| {
    let date = format_show_date(&show.date, ctx.calendar_locale());

    let place = Node::new("div")
      .with_child(Node::new("div").with_class("fw-semibold").with_text(show.city.clone()))
      .with_child(Node::new("div").with_class("text-muted small").with_text(show.venue.clone()));
    let when = Node::new("div")
      .with_class("text-end")
      .with_child(Node::new("div").with_class("fw-semibold").with_text(date.day_month))
      .with_child(Node::new("div").with_class("text-muted small").with_text(date.year));

    let status_class = if show.status().is_on_sale() { "chip badge-soft" } else { "chip" };
    let mut footer = Node::new("div")
      .with_class("mt-3 d-flex gap-2 align-items-center mt-auto")
      .with_child(Node::new("span").with_class(status_class).with_text(show.status.clone()));
    if let Some(url) = show.ticket_url() {
      footer.push(
        Node::new("a")
          .with_class("btn btn-accent btn-sm ms-auto")
          .with_attr("href", url)
          .with_text(ctx.label("cta.tickets", "Tickets")),
      );
    }

    let body = Node::new("div")
      .with_class("card-body d-flex flex-column")
      .with_child(Node::new("div").with_class("d-flex justify-content-between").with_child(place).with_child(when))
      .with_child(footer);

    column().with_child(card().with_child(body))
  }).collect();

  let empty = cards.is_empty();

  if let Some(grid) = tree.region_mut("showsList") {
    grid.clear();
    grid.children = cards;
  }

  if let Some(placeholder) = tree.region_mut("noShows") {
    placeholder.set_hidden(!empty);
  }
}

#[cfg(test)]
mod tests {
  use super::super::fixtures::{Env, content};
  use super::*;
  use crate::skeleton::page_skeleton;

  #[test]
  fn empty_shows_reveal_placeholder() {
    let mut content = content();
    content.shows.clear();
    let env = Env::new("en", &content);
    let mut tree = page_skeleton(&["en"]);
    tree.region_mut("noShows").unwrap().set_hidden(true);

    render(&content, &env.ctx(), &mut tree);

    assert!(tree.region("showsList").unwrap().children.is_empty());
    assert!(!tree.region("noShows").unwrap().is_hidden());
  }

  #[test]
  fn shows_hide_placeholder_and_render_cards() {
    let content = content();
    let env = Env::new("es", &content);
    let mut tree = page_skeleton(&["en", "es"]);

    render(&content, &env.ctx(), &mut tree);

    let grid = tree.region("showsList").unwrap();
    assert_eq!(grid.children.len(), 2);
    assert!(tree.region("noShows").unwrap().is_hidden());

    let first = &grid.children[0];
    assert!(first.find_class("badge-soft").is_some());
    assert!(first.text_content().contains("Madrid"));
    assert!(first.text_content().contains("Entradas"));

    let second = &grid.children[1];
    assert!(second.find_class("badge-soft").is_none());
    assert!(second.find_class("btn-accent").is_none());
  }

  #[test]
  fn missing_placeholder_makes_renderer_a_no_op() {
    let content = content();
    let env = Env::new("en", &content);
    let mut tree = PresentationTree::new(Node::new("div").with_child(Node::new("div").with_id("showsList")));
    let before = tree.clone();

    render(&content, &env.ctx(), &mut tree);

    assert_eq!(tree, before);
  }

  #[test]
  fn status_chip_shows_document_text() {
    let mut content = content();
    content.shows[0].status = "on sale".into();
    content.shows[1].status = String::new();
    let env = Env::new("en", &content);
    let mut tree = page_skeleton(&["en"]);

    render(&content, &env.ctx(), &mut tree);

    let grid = tree.region("showsList").unwrap();
    let first = grid.children[0].find_class("chip").unwrap();
    assert_eq!(first.text, "on sale");
    assert!(first.has_class("badge-soft"));
    assert_eq!(grid.children[1].find_class("chip").unwrap().text, "");
  }
}
