//! Calendar date (de)serialization
//!
//! The backend is not consistent about dates: some records carry plain
//! `YYYY-MM-DD`, others full RFC 3339 timestamps written by a JS client.
//! Both decode to a [`NaiveDate`]; dates are always written back as `YYYY-MM-DD`.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{de, Deserialize, Deserializer, Serializer};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date in any of the accepted wire formats
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Some(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }

    // Timestamps without an offset
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}

/// Format a date the way it is sent to the backend
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// `#[serde(with = "dates::optional")]` for `Option<NaiveDate>` fields
pub mod optional {
    use super::*;

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&format_date(*date)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(s) if s.trim().is_empty() => Ok(None),
            Some(s) => parse_date(&s)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("invalid date: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(
            parse_date("1990-06-15"),
            NaiveDate::from_ymd_opt(1990, 6, 15)
        );
    }

    #[test]
    fn test_parse_rfc3339() {
        assert_eq!(
            parse_date("1990-06-15T00:00:00.000Z"),
            NaiveDate::from_ymd_opt(1990, 6, 15)
        );
        assert_eq!(
            parse_date("1990-06-15T10:30:00+08:00"),
            NaiveDate::from_ymd_opt(1990, 6, 15)
        );
    }

    #[test]
    fn test_parse_naive_timestamp() {
        assert_eq!(
            parse_date("2021-01-02T03:04:05"),
            NaiveDate::from_ymd_opt(2021, 1, 2)
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("15/06/1990"), None);
        assert_eq!(parse_date("not a date"), None);
    }
}
