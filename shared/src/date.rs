//! Date helpers
//!
//! The backend stores dates as strings: plain `YYYY-MM-DD` for matches and
//! tournaments, RFC 3339 timestamps for news and achievements. These helpers
//! parse both forms and provide the French weekday order and hour parsing
//! used by the training schedule.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Training days in display order.
pub const FRENCH_WEEKDAYS: [&str; 7] = [
    "Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi", "Samedi", "Dimanche",
];

/// Parses `YYYY-MM-DD`, RFC 3339 or a naive `YYYY-MM-DDTHH:MM:SS` into a date.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}

/// `dd/mm/yyyy`, or the raw input when it is not a date.
pub fn format_fr(s: &str) -> String {
    match parse_date(s) {
        Some(d) => d.format("%d/%m/%Y").to_string(),
        None => s.to_string(),
    }
}

/// Local calendar date of the viewer.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Position of a French weekday name (case-insensitive) in the week, Monday = 0.
pub fn weekday_index(jour: &str) -> Option<usize> {
    FRENCH_WEEKDAYS
        .iter()
        .position(|d| d.eq_ignore_ascii_case(jour.trim()))
}

/// Parses a training hour, `HH:MM` with or without the leading zero.
pub fn parse_hour(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_forms() {
        let expected = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        assert_eq!(parse_date("2025-03-14"), Some(expected));
        assert_eq!(parse_date("2025-03-14T18:30:00+00:00"), Some(expected));
        assert_eq!(parse_date("2025-03-14T18:30:00.123456"), Some(expected));
        assert_eq!(parse_date("bientôt"), None);
    }

    #[test]
    fn test_format_fr() {
        assert_eq!(format_fr("2025-03-14"), "14/03/2025");
        assert_eq!(format_fr("à définir"), "à définir");
    }

    #[test]
    fn test_weekday_index() {
        assert_eq!(weekday_index("Lundi"), Some(0));
        assert_eq!(weekday_index("dimanche"), Some(6));
        assert_eq!(weekday_index("Someday"), None);
    }

    #[test]
    fn test_parse_hour_accepts_unpadded() {
        let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        assert_eq!(parse_hour("9:00"), Some(nine));
        assert_eq!(parse_hour(" 09:00 "), Some(nine));
        assert!(parse_hour("9:00") < parse_hour("18:00"));
        assert_eq!(parse_hour("25:00"), None);
        assert_eq!(parse_hour("soir"), None);
    }
}
