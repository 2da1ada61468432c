//! Helper profile records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{dates, wire};
use crate::helpers;

/// Profile identifier as issued by the backend
pub type ProfileId = String;

/// A domestic helper candidate as listed in the catalogue.
///
/// Catalogue summaries and detailed records share this type; fields a
/// summary omits decode to `None` or an empty collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ProfileWire")]
pub struct HelperProfile {
    pub id: ProfileId,

    pub name: String,

    pub country: String,

    #[serde(serialize_with = "dates::optional::serialize", skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,

    /// Height in centimetres
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,

    /// Weight in kilograms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub loan: Option<u32>,

    pub skills: BTreeSet<String>,

    pub languages: BTreeSet<String>,

    /// Placement types such as "Transfer" or "New/Fresh"
    #[serde(rename = "type")]
    pub types: BTreeSet<String>,

    pub is_active: bool,

    pub is_employed: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    pub employment_history: Vec<EmploymentRecord>,
}

/// Profile as the backend sends it
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileWire {
    #[serde(rename = "_id", default)]
    object_id: Option<ProfileId>,
    #[serde(default)]
    id: Option<ProfileId>,
    #[serde(default, deserialize_with = "wire::null_as_default")]
    name: String,
    #[serde(default, deserialize_with = "wire::null_as_default")]
    country: String,
    #[serde(default, deserialize_with = "dates::optional::deserialize")]
    date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    height: Option<f32>,
    #[serde(default)]
    weight: Option<f32>,
    #[serde(default)]
    salary: Option<u32>,
    #[serde(default)]
    loan: Option<u32>,
    #[serde(default, deserialize_with = "wire::null_as_default")]
    skills: BTreeSet<String>,
    #[serde(default, deserialize_with = "wire::null_as_default")]
    languages: BTreeSet<String>,
    #[serde(default, rename = "type", deserialize_with = "wire::null_as_default")]
    types: BTreeSet<String>,
    #[serde(default)]
    is_active: Option<bool>,
    #[serde(default)]
    is_employed: Option<bool>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default, deserialize_with = "wire::null_as_default")]
    employment_history: Vec<EmploymentRecord>,
}

impl TryFrom<ProfileWire> for HelperProfile {
    type Error = String;

    fn try_from(wire: ProfileWire) -> Result<Self, Self::Error> {
        Ok(Self {
            id: wire::record_id(wire.object_id, wire.id)?,
            name: wire.name,
            country: wire.country,
            date_of_birth: wire.date_of_birth,
            height: wire.height,
            weight: wire.weight,
            salary: wire.salary,
            loan: wire.loan,
            skills: wire.skills,
            languages: wire.languages,
            types: wire.types,
            is_active: wire.is_active.unwrap_or(true),
            is_employed: wire.is_employed.unwrap_or(false),
            description: wire.description,
            image_url: wire.image_url,
            employment_history: wire.employment_history,
        })
    }
}

/// One previous employer
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmploymentRecord {
    #[serde(default, deserialize_with = "wire::null_as_default")]
    pub country: String,

    #[serde(default, with = "dates::optional", skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDate>,

    #[serde(default, with = "dates::optional", skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_size: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_scope: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason_for_leaving: Option<String>,
}

/// Where a helper stands for new placements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Available,
    Employed,
    Inactive,
}

impl Availability {
    pub fn label(&self) -> &'static str {
        match self {
            Availability::Available => "Available",
            Availability::Employed => "Employed",
            Availability::Inactive => "Inactive",
        }
    }
}

impl HelperProfile {
    /// Create a bare profile with just an id and a name
    pub fn new(id: impl Into<ProfileId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            country: String::new(),
            date_of_birth: None,
            height: None,
            weight: None,
            salary: None,
            loan: None,
            skills: BTreeSet::new(),
            languages: BTreeSet::new(),
            types: BTreeSet::new(),
            is_active: true,
            is_employed: false,
            description: None,
            image_url: None,
            employment_history: Vec::new(),
        }
    }

    /// Age on the given day, if the date of birth is known
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        self.date_of_birth.map(|dob| helpers::age_on(dob, today))
    }

    pub fn availability(&self) -> Availability {
        if !self.is_active {
            Availability::Inactive
        } else if self.is_employed {
            Availability::Employed
        } else {
            Availability::Available
        }
    }

    /// Active and not currently placed
    pub fn is_available(&self) -> bool {
        self.availability() == Availability::Available
    }

    /// Photo URL resolved against the image base
    pub fn resolved_image(&self, image_base: &str) -> Option<String> {
        self.image_url
            .as_deref()
            .and_then(|path| helpers::resolve_image_url(path, image_base))
    }

    /// Total months of recorded overseas employment
    pub fn experience_months(&self, today: NaiveDate) -> u32 {
        self.employment_history
            .iter()
            .filter_map(|record| record.duration_months(today))
            .sum()
    }

    /// Whether any previous employment was outside the helper's home country
    pub fn has_overseas_experience(&self) -> bool {
        self.employment_history
            .iter()
            .any(|record| !record.country.is_empty() && !record.country.eq_ignore_ascii_case(&self.country))
    }
}

impl EmploymentRecord {
    /// Whole months between `from` and `to`; an open-ended record runs until `today`
    pub fn duration_months(&self, today: NaiveDate) -> Option<u32> {
        use chrono::Datelike;

        let from = self.from?;
        let to = self.to.unwrap_or(today);
        if to < from {
            return None;
        }

        let mut months = (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
        if to.day() < from.day() {
            months -= 1;
        }
        Some(months.max(0) as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_decode_summary() {
        let json = r#"{"_id": "m1", "name": "Anna", "country": "Philippines"}"#;
        let profile: HelperProfile = serde_json::from_str(json).unwrap();

        assert_eq!(profile.id, "m1");
        assert_eq!(profile.name, "Anna");
        assert!(profile.is_active);
        assert!(!profile.is_employed);
        assert!(profile.skills.is_empty());
        assert!(profile.date_of_birth.is_none());
    }

    #[test]
    fn test_decode_detailed() {
        let json = r#"{
            "id": "m2",
            "name": "Siti",
            "country": "Indonesia",
            "dateOfBirth": "1990-06-15T00:00:00.000Z",
            "height": 155,
            "weight": 50.5,
            "salary": 650,
            "loan": 1200,
            "skills": ["Cooking", "Infant Care", "Cooking"],
            "languages": ["English", "Bahasa"],
            "type": ["Transfer"],
            "isActive": true,
            "isEmployed": true,
            "employmentHistory": [
                {"country": "Singapore", "from": "2015-01-01", "to": "2018-12-31",
                 "familySize": 4, "jobScope": "Elderly care", "reasonForLeaving": "Contract ended"}
            ]
        }"#;
        let profile: HelperProfile = serde_json::from_str(json).unwrap();

        assert_eq!(profile.date_of_birth, Some(date(1990, 6, 15)));
        assert_eq!(profile.skills.len(), 2);
        assert!(profile.types.contains("Transfer"));
        assert_eq!(profile.salary, Some(650));
        assert_eq!(profile.availability(), Availability::Employed);
        assert_eq!(profile.employment_history[0].family_size, Some(4));
        assert!(profile.has_overseas_experience());
    }

    #[test]
    fn test_decode_both_id_keys() {
        let json = r#"[{"_id": "m1", "id": "m1", "name": "Anna"}, {"id": "m2"}]"#;
        let profiles: Vec<HelperProfile> = serde_json::from_str(json).unwrap();

        assert_eq!(profiles[0].id, "m1");
        assert_eq!(profiles[0].name, "Anna");
        assert_eq!(profiles[1].id, "m2");
    }

    #[test]
    fn test_decode_requires_an_id() {
        let result: Result<HelperProfile, _> = serde_json::from_str(r#"{"name": "Anna"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_null_collections() {
        let json = r#"{
            "_id": "m7",
            "name": null,
            "skills": null,
            "languages": null,
            "type": null,
            "isActive": null,
            "employmentHistory": [{"country": null, "from": null}]
        }"#;
        let profile: HelperProfile = serde_json::from_str(json).unwrap();

        assert_eq!(profile.name, "");
        assert!(profile.skills.is_empty());
        assert!(profile.languages.is_empty());
        assert!(profile.types.is_empty());
        assert!(profile.is_active);
        assert_eq!(profile.employment_history.len(), 1);
        assert_eq!(profile.employment_history[0].country, "");
    }

    #[test]
    fn test_serialized_profile_decodes_again() {
        let mut profile = HelperProfile::new("m8", "Nur");
        profile.skills.insert("Cooking".into());
        profile.date_of_birth = Some(date(1992, 3, 4));

        let json = serde_json::to_string(&profile).unwrap();
        let back: HelperProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }

    #[test]
    fn test_serialize_uses_wire_names() {
        let mut profile = HelperProfile::new("m3", "Lina");
        profile.types.insert("New/Fresh".to_string());
        profile.date_of_birth = Some(date(1995, 1, 2));

        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["type"][0], "New/Fresh");
        assert_eq!(value["dateOfBirth"], "1995-01-02");
        assert_eq!(value["isActive"], true);
        assert!(value.get("salary").is_none());
    }

    #[test]
    fn test_availability() {
        let mut profile = HelperProfile::new("m4", "Mya");
        assert!(profile.is_available());

        profile.is_active = false;
        profile.is_employed = true;
        assert_eq!(profile.availability(), Availability::Inactive);
    }

    #[test]
    fn test_experience_months() {
        let mut profile = HelperProfile::new("m5", "Rosa");
        profile.employment_history = vec![
            EmploymentRecord {
                country: "Hong Kong".into(),
                from: Some(date(2018, 1, 15)),
                to: Some(date(2020, 1, 14)),
                ..Default::default()
            },
            EmploymentRecord {
                country: "Singapore".into(),
                from: Some(date(2023, 6, 1)),
                to: None,
                ..Default::default()
            },
            // Backwards dates are ignored
            EmploymentRecord {
                from: Some(date(2022, 1, 1)),
                to: Some(date(2021, 1, 1)),
                ..Default::default()
            },
        ];

        assert_eq!(profile.experience_months(date(2024, 6, 1)), 23 + 12);
    }

    #[test]
    fn test_resolved_image() {
        let mut profile = HelperProfile::new("m6", "Dewi");
        assert_eq!(profile.resolved_image("http://img"), None);

        profile.image_url = Some("dewi.jpg".into());
        assert_eq!(
            profile.resolved_image("http://img/uploads"),
            Some("http://img/uploads/dewi.jpg".to_string())
        );
    }
}
