use vitrina_core::domain::ContentModel;

use super::{icon, rebuild};
use crate::context::RenderContext;
use crate::tree::{Node, PresentationTree};

pub(super) fn render(content: &ContentModel, ctx: &RenderContext<'_>, tree: &mut PresentationTree) {
  let contacts = &content.contacts;
  let translation = contacts.translation(ctx.locale);

  if let Some(info) = rebuild(tree, "contactInfo") {
    let email = contacts.email.as_deref().unwrap_or("");
    let manager = ctx.catalog.select(
      ctx.locale,
      contacts.manager.as_deref().unwrap_or(""),
      translation.and_then(|t| t.manager.as_deref()),
    );
    let location = ctx.catalog.select(
      ctx.locale,
      contacts.location.as_deref().unwrap_or(""),
      translation.and_then(|t| t.location.as_deref()),
    );

    let row = |icon_class: &str, value: Node| Node::new("div").with_child(icon(icon_class)).with_child(value);

    info.push(
      Node::new("div")
        .with_class("d-flex flex-column gap-2")
        .with_child(row(
          "bi-envelope",
          Node::new("a").with_class("link-muted").with_attr("href", format!("mailto:{email}")).with_text(email),
        ))
        .with_child(row("bi-person-badge", Node::new("span").with_text(manager)))
        .with_child(row("bi-geo-alt", Node::new("span").with_text(location))),
    );
  }

  if let Some(socials) = rebuild(tree, "socials") {
    for social in &content.socials {
      socials.push(
        Node::new("a")
          .with_class("btn btn-outline-light btn-sm")
          .with_attr("href", social.url.clone())
          .with_attr("target", "_blank")
          .with_attr("rel", "noreferrer")
          .with_child(icon(&social.icon))
          .with_child(Node::new("span").with_text(social.name.clone())),
      );
    }
  }
}

#[cfg(test)]
mod tests {
  use super::super::fixtures::{Env, content};
  use super::*;
  use crate::skeleton::page_skeleton;

  #[test]
  fn localized_location_and_base_manager() {
    let content = content();
    let env = Env::new("es", &content);
    let mut tree = page_skeleton(&["en", "es"]);

    render(&content, &env.ctx(), &mut tree);

    let text = tree.region("contactInfo").unwrap().text_content();
    assert!(text.contains("mgmt@nadia.example"));
    assert!(text.contains("Ana Ruiz"));
    assert!(text.contains("València"));
    assert_eq!(tree.region("socials").unwrap().children.len(), 1);
  }

  #[test]
  fn missing_contacts_render_empty_strings() {
    let mut content = content();
    content.contacts = Default::default();
    let env = Env::new("en", &content);
    let mut tree = page_skeleton(&["en"]);

    render(&content, &env.ctx(), &mut tree);

    let info = tree.region("contactInfo").unwrap();
    assert_eq!(info.text_content(), "");
    assert_eq!(info.children[0].children[0].children[1].attr("href"), Some("mailto:"));
  }
}
