//! Profile cards
//!
//! The catalogue can render a profile in six layouts. They differ only in
//! how much they show; every layout derives its fields from the same
//! [`CardModel`] and carries the same favorite button.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::helpers;
use crate::models::{Availability, HelperProfile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardVariant {
    #[default]
    Classic,
    Compact,
    Modern,
    Minimal,
    Detailed,
    Gallery,
}

impl CardVariant {
    pub const ALL: [CardVariant; 6] = [
        CardVariant::Classic,
        CardVariant::Compact,
        CardVariant::Modern,
        CardVariant::Minimal,
        CardVariant::Detailed,
        CardVariant::Gallery,
    ];

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|v| v.slug().eq_ignore_ascii_case(s.trim()))
    }

    pub fn slug(&self) -> &'static str {
        match self {
            CardVariant::Classic => "classic",
            CardVariant::Compact => "compact",
            CardVariant::Modern => "modern",
            CardVariant::Minimal => "minimal",
            CardVariant::Detailed => "detailed",
            CardVariant::Gallery => "gallery",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CardVariant::Classic => "Classic",
            CardVariant::Compact => "Compact",
            CardVariant::Modern => "Modern",
            CardVariant::Minimal => "Minimal",
            CardVariant::Detailed => "Detailed",
            CardVariant::Gallery => "Gallery",
        }
    }

    /// How many skill chips fit; `None` shows them all
    pub fn skill_limit(&self) -> Option<usize> {
        match self {
            CardVariant::Classic => Some(3),
            CardVariant::Compact | CardVariant::Minimal => Some(0),
            CardVariant::Modern => Some(4),
            CardVariant::Detailed => None,
            CardVariant::Gallery => Some(2),
        }
    }

    pub fn shows_description(&self) -> bool {
        matches!(self, CardVariant::Modern | CardVariant::Detailed)
    }

    pub fn shows_languages(&self) -> bool {
        matches!(self, CardVariant::Detailed | CardVariant::Classic)
    }

    pub fn shows_experience(&self) -> bool {
        !matches!(self, CardVariant::Minimal | CardVariant::Gallery)
    }
}

/// Longest description excerpt on a card
const EXCERPT_CHARS: usize = 140;

/// Everything a card displays, already formatted
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardModel {
    pub variant: CardVariant,
    pub id: String,
    pub name: String,
    pub initials: String,
    pub age: Option<u32>,
    pub country: String,
    pub flag_url: Option<String>,
    pub image_url: Option<String>,
    pub salary_label: Option<String>,
    pub availability: Availability,
    pub availability_label: &'static str,
    pub type_badges: Vec<String>,
    pub skills: Vec<String>,
    /// Skills left out by the variant's limit
    pub hidden_skills: usize,
    pub languages: Vec<String>,
    pub experience: Option<String>,
    pub excerpt: Option<String>,
}

impl CardModel {
    pub fn build(
        profile: &HelperProfile,
        variant: CardVariant,
        today: NaiveDate,
        image_base: &str,
    ) -> Self {
        let all_skills: Vec<String> = profile.skills.iter().cloned().collect();
        let shown = variant
            .skill_limit()
            .map(|limit| limit.min(all_skills.len()))
            .unwrap_or(all_skills.len());
        let hidden_skills = all_skills.len() - shown;
        let skills = all_skills.into_iter().take(shown).collect();

        let languages = if variant.shows_languages() {
            profile.languages.iter().cloned().collect()
        } else {
            Vec::new()
        };

        let experience = if variant.shows_experience() {
            experience_label(profile.experience_months(today))
        } else {
            None
        };

        let excerpt = if variant.shows_description() {
            profile
                .description
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(|d| excerpt(d, EXCERPT_CHARS))
        } else {
            None
        };

        let availability = profile.availability();

        Self {
            variant,
            id: profile.id.clone(),
            name: profile.name.clone(),
            initials: helpers::initials(&profile.name),
            age: profile.age_on(today),
            country: profile.country.clone(),
            flag_url: helpers::flag_image_url(&profile.country),
            image_url: profile.resolved_image(image_base),
            salary_label: profile
                .salary
                .map(|s| format!("{}/month", helpers::format_salary(s))),
            availability,
            availability_label: availability.label(),
            type_badges: profile.types.iter().cloned().collect(),
            skills,
            hidden_skills,
            languages,
            experience,
            excerpt,
        }
    }

    /// "Anna, 34" or just the name when the age is unknown
    pub fn title(&self) -> String {
        match self.age {
            Some(age) => format!("{}, {}", self.name, age),
            None => self.name.clone(),
        }
    }
}

/// "2 yrs 3 mos overseas"; `None` for no recorded experience
pub fn experience_label(months: u32) -> Option<String> {
    if months == 0 {
        return None;
    }
    let (years, months) = (months / 12, months % 12);
    let plural = |n: u32, unit: &str| {
        if n == 1 {
            format!("1 {}", unit)
        } else {
            format!("{} {}s", n, unit)
        }
    };
    let text = match (years, months) {
        (0, m) => plural(m, "mo"),
        (y, 0) => plural(y, "yr"),
        (y, m) => format!("{} {}", plural(y, "yr"), plural(m, "mo")),
    };
    Some(format!("{} experience", text))
}

fn excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    let cut = match cut.rfind(' ') {
        Some(pos) if pos > max_chars / 2 => &cut[..pos],
        _ => cut.as_str(),
    };
    format!("{}…", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmploymentRecord;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 14).unwrap()
    }

    fn anna() -> HelperProfile {
        let mut p = HelperProfile::new("m1", "Anna Cruz");
        p.country = "Philippines".into();
        p.date_of_birth = NaiveDate::from_ymd_opt(1990, 6, 15);
        p.salary = Some(1200);
        p.image_url = Some("/uploads/anna.jpg".into());
        p.skills = ["Cooking", "Childcare", "Elderly Care", "Pet Care", "Baking"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        p.languages.insert("English".into());
        p.types.insert("Transfer".into());
        p.description = Some("Warm and patient. ".repeat(20));
        p.employment_history.push(EmploymentRecord {
            country: "Singapore".into(),
            from: NaiveDate::from_ymd_opt(2019, 1, 1),
            to: NaiveDate::from_ymd_opt(2021, 4, 1),
            ..Default::default()
        });
        p
    }

    #[test]
    fn test_classic_card() {
        let card = CardModel::build(&anna(), CardVariant::Classic, today(), "https://cdn.example.com/");

        assert_eq!(card.title(), "Anna Cruz, 33");
        assert_eq!(card.initials, "AC");
        assert_eq!(card.flag_url.as_deref(), Some("https://flagcdn.com/w40/ph.png"));
        assert_eq!(
            card.image_url.as_deref(),
            Some("https://cdn.example.com/uploads/anna.jpg")
        );
        assert_eq!(card.salary_label.as_deref(), Some("$1,200/month"));
        assert_eq!(card.availability_label, "Available");
        assert_eq!(card.skills.len(), 3);
        assert_eq!(card.hidden_skills, 2);
        assert_eq!(card.experience.as_deref(), Some("2 yrs 3 mos experience"));
        assert_eq!(card.excerpt, None);
    }

    #[test]
    fn test_variant_differences() {
        let profile = anna();
        let build = |v| CardModel::build(&profile, v, today(), "");

        assert!(build(CardVariant::Compact).skills.is_empty());
        assert_eq!(build(CardVariant::Detailed).skills.len(), 5);
        assert_eq!(build(CardVariant::Detailed).hidden_skills, 0);
        assert!(build(CardVariant::Minimal).experience.is_none());
        assert!(build(CardVariant::Gallery).languages.is_empty());

        let modern = build(CardVariant::Modern);
        let excerpt = modern.excerpt.unwrap();
        assert!(excerpt.ends_with('…'));
        assert!(excerpt.chars().count() <= EXCERPT_CHARS + 1);
    }

    #[test]
    fn test_every_variant_has_identity_fields() {
        let profile = anna();
        for variant in CardVariant::ALL {
            let card = CardModel::build(&profile, variant, today(), "");
            assert_eq!(card.id, "m1");
            assert_eq!(card.age, Some(33));
            assert_eq!(card.variant, variant);
        }
    }

    #[test]
    fn test_sparse_profile() {
        let mut p = HelperProfile::new("m2", "Siti");
        p.is_employed = true;
        let card = CardModel::build(&p, CardVariant::Detailed, today(), "");

        assert_eq!(card.title(), "Siti");
        assert_eq!(card.flag_url, None);
        assert_eq!(card.image_url, None);
        assert_eq!(card.salary_label, None);
        assert_eq!(card.availability, Availability::Employed);
        assert_eq!(card.experience, None);
    }

    #[test]
    fn test_experience_label() {
        assert_eq!(experience_label(0), None);
        assert_eq!(experience_label(1).as_deref(), Some("1 mo experience"));
        assert_eq!(experience_label(12).as_deref(), Some("1 yr experience"));
        assert_eq!(experience_label(26).as_deref(), Some("2 yrs 2 mos experience"));
    }

    #[test]
    fn test_variant_from_str() {
        assert_eq!(CardVariant::from_str("Gallery"), Some(CardVariant::Gallery));
        assert_eq!(CardVariant::from_str("poster"), None);
    }
}
