use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::artist::Artist;
use crate::domain::contacts::{Contacts, Social};
use crate::domain::release::Release;
use crate::domain::show::Show;

/// Todo lo que la web puede mostrar, ya parseado y validado.
///
/// Se carga una sola vez al arrancar y este subsistema nunca lo modifica:
/// los renderers solo reciben `&ContentModel`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentModel {
  pub artist: Artist,

  #[serde(default)]
  pub releases: Vec<Release>,

  #[serde(default)]
  pub shows: Vec<Show>,

  #[serde(default)]
  pub contacts: Contacts,

  #[serde(default)]
  pub socials: Vec<Social>,

  /// IDs de vídeos de YouTube. Documentos antiguos usan `youtube_recent`.
  #[serde(default, alias = "youtube_recent")]
  pub youtube_videos: Vec<String>,

  /// Permalinks de publicaciones de Instagram.
  #[serde(default)]
  pub instagram_posts: Vec<String>,

  /// Catálogo de textos: `locale -> clave -> texto`.
  #[serde(default)]
  pub i18n: BTreeMap<String, BTreeMap<String, String>>,
}

impl ContentModel {
  /// Release destacado en la portada.
  ///
  /// Si `hero.latest_release_id` no apunta a ningún release existente se usa
  /// el primero. Solo devuelve `None` cuando no hay releases.
  pub fn selected_release(&self) -> Option<&Release> {
    let wanted = self.artist.hero.latest_release_id.as_ref();

    wanted
      .and_then(|id| self.releases.iter().find(|r| &r.id == id))
      .or_else(|| self.releases.first())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::{ReleaseId, ReleaseType, ShowStatus};

  const DOC: &str = r#"{
    "artist": {
      "name": "Nadia Vega",
      "bio": "Producer from Valencia.",
      "hero": { "latest_release_id": "night-drive" },
      "translations": { "es": { "bio": "Productora de Valencia." } }
    },
    "releases": [
      { "id": "first-light", "title": "First Light", "year": 2021, "type": "EP", "cover": "a.jpg" },
      { "id": "night-drive", "title": "Night Drive", "year": "2024", "type": "Live Session", "cover": "b.jpg",
        "tracks": [{ "title": "Intro", "duration": "1:02" }] }
    ],
    "shows": [{ "date": "2025-03-14", "city": "Madrid", "venue": "Sala Sol", "status": "On Sale" }],
    "youtube_recent": ["abc123"]
  }"#;

  #[test]
  fn parses_document_with_defaults() {
    let model: ContentModel = serde_json::from_str(DOC).unwrap();

    assert_eq!(model.releases.len(), 2);
    assert_eq!(model.releases[0].year, "2021");
    assert_eq!(model.releases[0].category, Some(ReleaseType::EP));
    assert_eq!(model.releases[1].category, Some(ReleaseType::Custom("Live Session".into())));
    assert_eq!(model.shows[0].status(), ShowStatus::OnSale);
    assert_eq!(model.youtube_videos, vec!["abc123".to_string()]);
    assert!(model.socials.is_empty());
    assert!(model.i18n.is_empty());
  }

  #[test]
  fn selected_release_uses_hero_reference() {
    let model: ContentModel = serde_json::from_str(DOC).unwrap();
    assert_eq!(model.selected_release().unwrap().id, ReleaseId::new("night-drive"));
  }

  #[test]
  fn selected_release_falls_back_to_first() {
    let mut model: ContentModel = serde_json::from_str(DOC).unwrap();
    model.artist.hero.latest_release_id = Some(ReleaseId::new("missing"));
    assert_eq!(model.selected_release().unwrap().id, ReleaseId::new("first-light"));

    model.artist.hero.latest_release_id = None;
    assert_eq!(model.selected_release().unwrap().id, ReleaseId::new("first-light"));

    model.releases.clear();
    assert!(model.selected_release().is_none());
  }
}
