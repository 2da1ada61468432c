//! Display helpers
//!
//! Small, total functions shared by the cards, the detail popup and the CLI.

use chrono::{Datelike, NaiveDate};

/// Base URL of the flag image CDN
pub const FLAG_CDN_BASE: &str = "https://flagcdn.com/w40";

/// Whole years between `dob` and `today`; the birthday itself counts.
///
/// A date of birth in the future yields 0.
pub fn age_on(dob: NaiveDate, today: NaiveDate) -> u32 {
    if today < dob {
        return 0;
    }

    let mut years = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        years -= 1;
    }

    years.max(0) as u32
}

/// Resolve an image reference against the configured image base.
///
/// Absolute URLs (anything starting with `http`) pass through unchanged.
pub fn resolve_image_url(path: &str, image_base: &str) -> Option<String> {
    let path = path.trim();
    if path.is_empty() {
        return None;
    }

    if path.starts_with("http") {
        return Some(path.to_string());
    }

    let base = image_base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    Some(format!("{}/{}", base, path))
}

/// ISO 3166-1 alpha-2 code for a country name (lowercase, flag CDN style)
pub fn country_flag_code(country: &str) -> Option<&'static str> {
    let code = match country.trim().to_ascii_lowercase().as_str() {
        "philippines" | "the philippines" => "ph",
        "indonesia" => "id",
        "myanmar" | "burma" => "mm",
        "india" => "in",
        "sri lanka" => "lk",
        "bangladesh" => "bd",
        "nepal" => "np",
        "cambodia" => "kh",
        "vietnam" | "viet nam" => "vn",
        "thailand" => "th",
        "laos" => "la",
        "malaysia" => "my",
        "singapore" => "sg",
        "hong kong" => "hk",
        "taiwan" => "tw",
        "china" => "cn",
        "macau" | "macao" => "mo",
        "brunei" => "bn",
        "japan" => "jp",
        "south korea" | "korea" => "kr",
        "saudi arabia" => "sa",
        "united arab emirates" | "uae" => "ae",
        "qatar" => "qa",
        "kuwait" => "kw",
        "oman" => "om",
        "bahrain" => "bh",
        "kenya" => "ke",
        "uganda" => "ug",
        "ethiopia" => "et",
        _ => return None,
    };
    Some(code)
}

/// Flag image URL for a country, when the country is known
pub fn flag_image_url(country: &str) -> Option<String> {
    country_flag_code(country).map(|code| format!("{}/{}.png", FLAG_CDN_BASE, code))
}

/// Render an amount as `$1,200`
pub fn format_salary(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("${}", grouped)
}

/// First letters of the first two name parts, for avatar placeholders
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_day_before_birthday() {
        assert_eq!(age_on(date(1990, 6, 15), date(2024, 6, 14)), 33);
    }

    #[test]
    fn test_age_on_birthday() {
        assert_eq!(age_on(date(1990, 6, 15), date(2024, 6, 15)), 34);
    }

    #[test]
    fn test_age_leap_day_birth() {
        // Not yet 1 on Feb 28 of a non-leap year
        assert_eq!(age_on(date(2000, 2, 29), date(2001, 2, 28)), 0);
        assert_eq!(age_on(date(2000, 2, 29), date(2001, 3, 1)), 1);
    }

    #[test]
    fn test_age_future_dob() {
        assert_eq!(age_on(date(2030, 1, 1), date(2024, 1, 1)), 0);
    }

    #[test]
    fn test_absolute_image_url_passes_through() {
        let url = "https://cdn.example.com/maids/anna.jpg";
        assert_eq!(
            resolve_image_url(url, "http://localhost:5000/uploads"),
            Some(url.to_string())
        );
        assert_eq!(
            resolve_image_url("http://x/y.png", "/ignored"),
            Some("http://x/y.png".to_string())
        );
    }

    #[test]
    fn test_relative_image_url_gets_base() {
        assert_eq!(
            resolve_image_url("uploads/anna.jpg", "http://localhost:5000/"),
            Some("http://localhost:5000/uploads/anna.jpg".to_string())
        );
        assert_eq!(
            resolve_image_url("/uploads/anna.jpg", "http://localhost:5000"),
            Some("http://localhost:5000/uploads/anna.jpg".to_string())
        );
    }

    #[test]
    fn test_empty_image_url() {
        assert_eq!(resolve_image_url("   ", "http://localhost:5000"), None);
    }

    #[test]
    fn test_flag_codes() {
        assert_eq!(country_flag_code("Philippines"), Some("ph"));
        assert_eq!(country_flag_code("  INDONESIA "), Some("id"));
        assert_eq!(country_flag_code("Atlantis"), None);
        assert_eq!(
            flag_image_url("Myanmar").as_deref(),
            Some("https://flagcdn.com/w40/mm.png")
        );
    }

    #[test]
    fn test_format_salary() {
        assert_eq!(format_salary(0), "$0");
        assert_eq!(format_salary(650), "$650");
        assert_eq!(format_salary(1200), "$1,200");
        assert_eq!(format_salary(1234567), "$1,234,567");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("maria clara santos"), "MC");
        assert_eq!(initials("Siti"), "S");
        assert_eq!(initials(""), "");
    }
}
