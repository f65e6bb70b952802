use serde::{Deserialize, Serialize};

use crate::domain::release::non_blank;

/// Un concierto anunciado.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Show {
  /// Fecha en formato `YYYY-MM-DD`. Si no se puede interpretar se muestra tal cual.
  pub date: String,

  #[serde(default)]
  pub city: String,

  #[serde(default)]
  pub venue: String,

  /// Estado tal como viene en el documento; se muestra literalmente.
  #[serde(default)]
  pub status: String,

  #[serde(default)]
  pub ticket_url: Option<String>,
}

impl Show {
  pub fn ticket_url(&self) -> Option<&str> {
    non_blank(self.ticket_url.as_deref())
  }

  /// Estado interpretado, solo para decidir estilos.
  pub fn status(&self) -> ShowStatus {
    ShowStatus::parse(&self.status)
  }
}

/// Estado de venta de un concierto, reconocido a partir del texto libre.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowStatus {
  OnSale,
  SoldOut,
  Announced,
  Cancelled,
  /// Vacío o no reconocido.
  Other,
}

impl ShowStatus {
  pub fn parse(raw: &str) -> Self {
    match raw.trim().to_lowercase().as_str() {
      "on sale" | "on_sale" => ShowStatus::OnSale,
      "sold out" | "sold_out" => ShowStatus::SoldOut,
      "announced" => ShowStatus::Announced,
      "cancelled" | "canceled" => ShowStatus::Cancelled,
      _ => ShowStatus::Other,
    }
  }

  pub fn is_on_sale(self) -> bool {
    matches!(self, ShowStatus::OnSale)
  }
}
