use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Clase que oculta un elemento sin quitarlo del árbol.
pub const HIDDEN_CLASS: &str = "d-none";

/// Nodo del árbol de presentación.
///
/// Es un modelo de datos, no un DOM vivo: comparar dos árboles con `==` es
/// la forma de comprobar que un re-render es idempotente.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
  pub tag: String,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,

  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub classes: Vec<String>,

  #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
  pub attrs: BTreeMap<String, String>,

  #[serde(default, skip_serializing_if = "String::is_empty")]
  pub text: String,

  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub children: Vec<Node>,
}

impl Node {
  pub fn new(tag: &str) -> Self {
    Self { tag: tag.to_string(), ..Self::default() }
  }

  pub fn with_id(mut self, id: &str) -> Self {
    self.id = Some(id.to_string());
    self
  }

  /// Acepta varias clases separadas por espacios (`"card h-100"`).
  pub fn with_class(mut self, classes: &str) -> Self {
    for class in classes.split_whitespace() {
      self.toggle_class(class, true);
    }
    self
  }

  pub fn with_attr(mut self, key: &str, value: impl Into<String>) -> Self {
    self.set_attr(key, value);
    self
  }

  pub fn with_text(mut self, text: impl Into<String>) -> Self {
    self.text = text.into();
    self
  }

  pub fn with_child(mut self, child: Node) -> Self {
    self.children.push(child);
    self
  }

  pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
    self.children.extend(children);
    self
  }

  pub fn push(&mut self, child: Node) {
    self.children.push(child);
  }

  /// Vacía el contenido (texto e hijos). Atributos y clases se conservan.
  pub fn clear(&mut self) {
    self.text.clear();
    self.children.clear();
  }

  pub fn set_attr(&mut self, key: &str, value: impl Into<String>) {
    self.attrs.insert(key.to_string(), value.into());
  }

  pub fn attr(&self, key: &str) -> Option<&str> {
    self.attrs.get(key).map(String::as_str)
  }

  pub fn has_class(&self, class: &str) -> bool {
    self.classes.iter().any(|c| c == class)
  }

  pub fn toggle_class(&mut self, class: &str, on: bool) {
    let present = self.has_class(class);
    if on && !present {
      self.classes.push(class.to_string());
    } else if !on && present {
      self.classes.retain(|c| c != class);
    }
  }

  pub fn set_hidden(&mut self, hidden: bool) {
    self.toggle_class(HIDDEN_CLASS, hidden);
  }

  pub fn is_hidden(&self) -> bool {
    self.has_class(HIDDEN_CLASS)
  }

  /// Búsqueda en profundidad por `id`, incluyendo el propio nodo.
  pub fn find(&self, id: &str) -> Option<&Node> {
    if self.id.as_deref() == Some(id) {
      return Some(self);
    }
    self.children.iter().find_map(|c| c.find(id))
  }

  pub fn find_mut(&mut self, id: &str) -> Option<&mut Node> {
    if self.id.as_deref() == Some(id) {
      return Some(self);
    }
    self.children.iter_mut().find_map(|c| c.find_mut(id))
  }

  /// Primer descendiente (sin contar el propio nodo) con la clase dada.
  pub fn find_class(&self, class: &str) -> Option<&Node> {
    self.children.iter().find_map(|c| if c.has_class(class) { Some(c) } else { c.find_class(class) })
  }

  pub fn find_class_mut(&mut self, class: &str) -> Option<&mut Node> {
    for child in &mut self.children {
      if child.has_class(class) {
        return Some(child);
      }
      if let Some(found) = child.find_class_mut(class) {
        return Some(found);
      }
    }
    None
  }

  /// Recorre el subárbol en preorden.
  pub fn walk_mut(&mut self, f: &mut impl FnMut(&mut Node)) {
    f(self);
    for child in &mut self.children {
      child.walk_mut(f);
    }
  }

  /// Texto visible del subárbol concatenado, útil en tests y diagnósticos.
  pub fn text_content(&self) -> String {
    let mut out = self.text.clone();
    for child in &self.children {
      out.push_str(&child.text_content());
    }
    out
  }
}

/// Árbol completo: título del documento + nodo raíz.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationTree {
  pub title: String,
  pub root: Node,
}

impl PresentationTree {
  pub fn new(root: Node) -> Self {
    Self { title: String::new(), root }
  }

  pub fn region(&self, id: &str) -> Option<&Node> {
    self.root.find(id)
  }

  pub fn region_mut(&mut self, id: &str) -> Option<&mut Node> {
    self.root.find_mut(id)
  }
}
