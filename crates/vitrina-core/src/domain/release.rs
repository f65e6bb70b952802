use serde::{Deserialize, Serialize};

use super::serde_helpers::{optional_category, string_or_number};
use crate::domain::ids::ReleaseId;
use crate::domain::release_type::ReleaseType;

/// Un lanzamiento publicado (álbum, EP, single...).
///
/// El orden de `tracks` es el orden oficial y se respeta en todas las vistas.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Release {
  pub id: ReleaseId,

  pub title: String,

  /// Año de publicación. Se guarda como texto porque el documento puede
  /// traerlo como número o como cadena.
  #[serde(default, deserialize_with = "string_or_number")]
  pub year: String,

  /// Categoría (`"Album"`, `"EP"`...). En el documento el campo se llama `type`.
  /// Ausente o en blanco queda en `None`.
  #[serde(rename = "type", default, deserialize_with = "optional_category")]
  pub category: Option<ReleaseType>,

  /// Ruta o URL de la portada.
  #[serde(default)]
  pub cover: String,

  #[serde(default)]
  pub tracks: Vec<Track>,

  #[serde(default)]
  pub youtube_video_id: Option<String>,

  #[serde(default)]
  pub soundcloud_url: Option<String>,

  /// Enlaces adicionales a plataformas (Spotify, Bandcamp...).
  #[serde(default)]
  pub links: Vec<PlatformLink>,
}

impl Release {
  /// `"EP • 2024"`, omitiendo las partes que falten.
  pub fn category_and_year(&self) -> String {
    let category = self.category.as_ref().map(ReleaseType::to_string).unwrap_or_default();
    [category.as_str(), self.year.trim()].into_iter().filter(|part| !part.is_empty()).collect::<Vec<_>>().join(" • ")
  }

  pub fn youtube_watch_url(&self) -> Option<String> {
    non_blank(self.youtube_video_id.as_deref()).map(|id| format!("https://www.youtube.com/watch?v={id}"))
  }

  pub fn youtube_embed_url(&self) -> Option<String> {
    non_blank(self.youtube_video_id.as_deref()).map(|id| format!("https://www.youtube.com/embed/{id}"))
  }

  pub fn soundcloud_url(&self) -> Option<&str> {
    non_blank(self.soundcloud_url.as_deref())
  }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Track {
  pub title: String,

  /// Duración ya formateada (`"3:42"`), opcional.
  #[serde(default)]
  pub duration: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformLink {
  pub name: String,
  pub url: String,
  /// Clase de icono (`"bi-spotify"`).
  #[serde(default)]
  pub icon: Option<String>,
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
  value.filter(|v| !v.trim().is_empty())
}
