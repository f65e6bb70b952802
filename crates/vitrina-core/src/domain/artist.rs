use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::ids::ReleaseId;
use crate::i18n::{Locale, find_variant};

/// Perfil del artista que protagoniza la web.
///
/// Los campos de texto base están en el locale por defecto; las variantes
/// por idioma viven en `translations` y solo sustituyen al valor base cuando
/// existen y no están vacías.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Artist {
  /// Nombre artístico, usado en cabecera, pie y título del documento.
  pub name: String,

  /// Biografía en el locale por defecto.
  #[serde(default)]
  pub bio: String,

  /// Lista de logros o titulares cortos.
  #[serde(default)]
  pub highlights: Vec<String>,

  /// URL de embed genérica (canal, tráiler...). Es el respaldo del hero
  /// cuando el release seleccionado no tiene vídeo propio.
  #[serde(default)]
  pub video_embed_url: Option<String>,

  #[serde(default)]
  pub hero: Hero,

  /// Fotos para el carrusel de la sección "about".
  #[serde(default)]
  pub about_photos: Vec<String>,

  #[serde(default)]
  pub channels: Channels,

  /// Variantes por idioma (`"es" -> { bio, highlights }`).
  #[serde(default)]
  pub translations: BTreeMap<String, ArtistTranslation>,
}

impl Artist {
  pub fn translation(&self, locale: &Locale) -> Option<&ArtistTranslation> {
    find_variant(&self.translations, locale)
  }
}

/// Referencia al lanzamiento destacado en la portada.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hero {
  #[serde(default)]
  pub latest_release_id: Option<ReleaseId>,
}

/// Enlaces a los perfiles externos del artista.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Channels {
  #[serde(default)]
  pub youtube_channel_url: Option<String>,

  #[serde(default)]
  pub instagram_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtistTranslation {
  #[serde(default)]
  pub bio: Option<String>,

  #[serde(default)]
  pub highlights: Option<Vec<String>>,
}
