//! Display formatting for server timestamps.
//!
//! The API sends ISO-8601 strings. Tables show dates as `dd/mm/yyyy` and last
//! activity relative to now ("hace 3 días").

use chrono::{DateTime, NaiveDate, Utc};

fn parse(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// `dd/mm/yyyy`, or `"-"` when missing or unreadable.
pub fn short_date(value: Option<&str>) -> String {
    value
        .and_then(parse)
        .map(|dt| dt.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Relative time in Spanish, measured against `now`.
pub fn relative_to(value: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(then) = value.and_then(parse) else {
        return "Nunca".to_string();
    };
    let seconds = (now - then).num_seconds();
    if seconds < 60 {
        return "Hace unos segundos".to_string();
    }

    let (amount, singular, plural) = match seconds {
        s if s < 3_600 => (s / 60, "minuto", "minutos"),
        s if s < 86_400 => (s / 3_600, "hora", "horas"),
        s if s < 2_592_000 => (s / 86_400, "día", "días"),
        s if s < 31_536_000 => (s / 2_592_000, "mes", "meses"),
        s => (s / 31_536_000, "año", "años"),
    };
    let unit = if amount == 1 { singular } else { plural };
    format!("Hace {amount} {unit}")
}

pub fn relative(value: Option<&str>) -> String {
    relative_to(value, Utc::now())
}
