use chrono::{Datelike, NaiveDate};

/// Fecha de concierto lista para mostrar: `"Mar 14"` + `"2025"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowDate {
  pub day_month: String,
  pub year: String,
}

/// Formatea `YYYY-MM-DD` con las convenciones del locale de calendario.
///
/// Sin locale de calendario (o uno desconocido para chrono) se usa la
/// convención neutra POSIX. Una fecha que no se puede interpretar se muestra
/// tal cual y sin año.
pub fn format_show_date(raw: &str, calendar: Option<&str>) -> ShowDate {
  let Ok(date) = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") else {
    return ShowDate { day_month: raw.to_string(), year: String::new() };
  };

  let locale = calendar.and_then(|name| chrono::Locale::try_from(name).ok()).unwrap_or(chrono::Locale::POSIX);

  ShowDate { day_month: date.format_localized("%b %d", locale).to_string(), year: date.year().to_string() }
}
