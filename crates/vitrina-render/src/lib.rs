//! Proyección del contenido sobre el árbol de presentación.
//!
//! Cada sección es una función pura de `(ContentModel, RenderContext)` que
//! vacía su región y la reconstruye entera. Volver a renderizar con la misma
//! entrada produce exactamente el mismo árbol.

pub mod chrome;
pub mod context;
pub mod dates;
pub mod sections;
pub mod skeleton;
pub mod tree;

pub use chrome::apply_static_text;
pub use context::{RenderContext, RenderOptions};
pub use sections::{SECTIONS, Section, render_all};
pub use skeleton::page_skeleton;
pub use tree::{Node, PresentationTree};
