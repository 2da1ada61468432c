//! Admin profile editing form
//!
//! [`ProfileDraft`] mirrors a [`HelperProfile`] with every field as text,
//! the way the edit form holds it. Set-valued fields are comma separated.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::FormErrors;
use crate::helpers;
use crate::models::{dates, EmploymentRecord, HelperProfile};

pub const MIN_AGE: u32 = 18;
pub const MAX_AGE: u32 = 65;

/// Editable copy of a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileDraft {
    pub name: String,
    pub country: String,
    pub date_of_birth: String,
    pub height: String,
    pub weight: String,
    pub salary: String,
    pub loan: String,
    pub skills: String,
    pub languages: String,
    pub types: String,
    pub is_active: bool,
    pub is_employed: bool,
    pub description: String,
    pub image_url: String,
    pub history: Vec<HistoryDraft>,
}

/// Editable employment history row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryDraft {
    pub country: String,
    pub from: String,
    pub to: String,
    pub family_size: String,
    pub job_scope: String,
    pub reason_for_leaving: String,
}

impl Default for ProfileDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            country: String::new(),
            date_of_birth: String::new(),
            height: String::new(),
            weight: String::new(),
            salary: String::new(),
            loan: String::new(),
            skills: String::new(),
            languages: String::new(),
            types: String::new(),
            is_active: true,
            is_employed: false,
            description: String::new(),
            image_url: String::new(),
            history: Vec::new(),
        }
    }
}

/// Body of create and update requests
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePayload {
    pub name: String,
    pub country: String,
    #[serde(with = "dates::optional")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loan: Option<u32>,
    pub skills: BTreeSet<String>,
    pub languages: BTreeSet<String>,
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

impl ProfileDraft {
    /// Start editing an existing profile
    pub fn from_profile(profile: &HelperProfile) -> Self {
        Self {
            name: profile.name.clone(),
            country: profile.country.clone(),
            date_of_birth: profile.date_of_birth.map(dates::format_date).unwrap_or_default(),
            height: profile.height.map(|v| v.to_string()).unwrap_or_default(),
            weight: profile.weight.map(|v| v.to_string()).unwrap_or_default(),
            salary: profile.salary.map(|v| v.to_string()).unwrap_or_default(),
            loan: profile.loan.map(|v| v.to_string()).unwrap_or_default(),
            skills: join_set(&profile.skills),
            languages: join_set(&profile.languages),
            types: join_set(&profile.types),
            is_active: profile.is_active,
            is_employed: profile.is_employed,
            description: profile.description.clone().unwrap_or_default(),
            image_url: profile.image_url.clone().unwrap_or_default(),
            history: profile
                .employment_history
                .iter()
                .map(HistoryDraft::from_record)
                .collect(),
        }
    }

    /// Append an empty history row
    pub fn add_history(&mut self) {
        self.history.push(HistoryDraft::default());
    }

    /// Remove a history row; out-of-range indexes are ignored
    pub fn remove_history(&mut self, index: usize) {
        if index < self.history.len() {
            self.history.remove(index);
        }
    }

    /// Check every field and build the request body
    pub fn validate(&self, today: NaiveDate) -> Result<ProfilePayload, FormErrors> {
        let mut errors = FormErrors::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.add("name", "Name is required");
        }

        let country = self.country.trim();
        if country.is_empty() {
            errors.add("country", "Country is required");
        }

        let date_of_birth = match self.date_of_birth.trim() {
            "" => {
                errors.add("date_of_birth", "Date of birth is required");
                None
            }
            raw => match dates::parse_date(raw) {
                None => {
                    errors.add("date_of_birth", "Use the format YYYY-MM-DD");
                    None
                }
                Some(dob) if dob > today => {
                    errors.add("date_of_birth", "Date of birth cannot be in the future");
                    None
                }
                Some(dob) => {
                    let age = helpers::age_on(dob, today);
                    if !(MIN_AGE..=MAX_AGE).contains(&age) {
                        errors.add(
                            "date_of_birth",
                            format!("Helper must be between {} and {} years old", MIN_AGE, MAX_AGE),
                        );
                    }
                    Some(dob)
                }
            },
        };

        let height = parse_measure(&self.height, 250.0, "height", "Height must be in centimetres", &mut errors);
        let weight = parse_measure(&self.weight, 300.0, "weight", "Weight must be in kilograms", &mut errors);
        let salary = parse_amount(&self.salary, "salary", &mut errors);
        let loan = parse_amount(&self.loan, "loan", &mut errors);

        let mut employment_history = Vec::with_capacity(self.history.len());
        for (index, row) in self.history.iter().enumerate() {
            if let Some(record) = row.validate(index, today, &mut errors) {
                employment_history.push(record);
            }
        }

        errors.into_result(ProfilePayload {
            name: name.to_string(),
            country: country.to_string(),
            date_of_birth,
            height,
            weight,
            salary,
            loan,
            skills: split_set(&self.skills),
            languages: split_set(&self.languages),
            types: split_set(&self.types),
            is_active: self.is_active,
            is_employed: self.is_employed,
            description: non_empty(&self.description),
            image_url: non_empty(&self.image_url),
            employment_history,
        })
    }
}

impl HistoryDraft {
    pub fn from_record(record: &EmploymentRecord) -> Self {
        Self {
            country: record.country.clone(),
            from: record.from.map(dates::format_date).unwrap_or_default(),
            to: record.to.map(dates::format_date).unwrap_or_default(),
            family_size: record.family_size.map(|v| v.to_string()).unwrap_or_default(),
            job_scope: record.job_scope.clone().unwrap_or_default(),
            reason_for_leaving: record.reason_for_leaving.clone().unwrap_or_default(),
        }
    }

    fn validate(&self, index: usize, today: NaiveDate, errors: &mut FormErrors) -> Option<EmploymentRecord> {
        let field = |name: &str| format!("history.{}.{}", index, name);
        let before = errors.len();

        let country = self.country.trim();
        if country.is_empty() {
            errors.add(field("country"), "Country is required");
        }

        let from = match self.from.trim() {
            "" => {
                errors.add(field("from"), "Start date is required");
                None
            }
            raw => {
                let parsed = dates::parse_date(raw);
                if parsed.is_none() {
                    errors.add(field("from"), "Use the format YYYY-MM-DD");
                }
                parsed
            }
        };

        let to = match self.to.trim() {
            "" => None,
            raw => {
                let parsed = dates::parse_date(raw);
                if parsed.is_none() {
                    errors.add(field("to"), "Use the format YYYY-MM-DD");
                }
                parsed
            }
        };

        if let (Some(from), Some(to)) = (from, to) {
            if to < from {
                errors.add(field("to"), "End date must be after start date");
            }
        }
        if from.is_some_and(|from| from > today) {
            errors.add(field("from"), "Start date cannot be in the future");
        }

        let family_size = match self.family_size.trim() {
            "" => None,
            raw => match raw.parse::<u32>() {
                Ok(size) if size > 0 => Some(size),
                _ => {
                    errors.add(field("family_size"), "Family size must be a whole number");
                    None
                }
            },
        };

        if errors.len() != before {
            return None;
        }

        Some(EmploymentRecord {
            country: country.to_string(),
            from,
            to,
            family_size,
            job_scope: non_empty(&self.job_scope),
            reason_for_leaving: non_empty(&self.reason_for_leaving),
        })
    }
}

fn parse_measure(raw: &str, max: f32, field: &str, message: &str, errors: &mut FormErrors) -> Option<f32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<f32>() {
        Ok(value) if value > 0.0 && value <= max => Some(value),
        _ => {
            errors.add(field, message);
            None
        }
    }
}

fn parse_amount(raw: &str, field: &str, errors: &mut FormErrors) -> Option<u32> {
    let raw = raw.trim().trim_start_matches('$').replace(',', "");
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<u32>() {
        Ok(value) => Some(value),
        Err(_) => {
            errors.add(field, "Enter a whole amount");
            None
        }
    }
}

fn split_set(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn join_set(set: &BTreeSet<String>) -> String {
    set.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

fn non_empty(raw: &str) -> Option<String> {
    let raw = raw.trim();
    (!raw.is_empty()).then(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn valid_draft() -> ProfileDraft {
        ProfileDraft {
            name: " Maria Santos ".into(),
            country: "Philippines".into(),
            date_of_birth: "1990-06-15".into(),
            height: "155".into(),
            weight: "52.5".into(),
            salary: "$1,200".into(),
            loan: "".into(),
            skills: "Cooking, Infant Care,, cooking".into(),
            languages: "English,Tagalog".into(),
            types: "Transfer".into(),
            history: vec![HistoryDraft {
                country: "Singapore".into(),
                from: "2016-03-01".into(),
                to: "2019-02-28".into(),
                family_size: "5".into(),
                job_scope: "Cooking and child care".into(),
                reason_for_leaving: "".into(),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_draft() {
        let payload = valid_draft().validate(today()).unwrap();

        assert_eq!(payload.name, "Maria Santos");
        assert_eq!(payload.salary, Some(1200));
        assert_eq!(payload.loan, None);
        // Case-sensitive set: "cooking" and "Cooking" are distinct
        assert_eq!(payload.skills.len(), 3);
        assert_eq!(payload.employment_history.len(), 1);
        assert_eq!(payload.employment_history[0].reason_for_leaving, None);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["dateOfBirth"], "1990-06-15");
        assert_eq!(json["type"][0], "Transfer");
    }

    #[test]
    fn test_required_fields() {
        let errors = ProfileDraft::default().validate(today()).unwrap_err();
        assert!(errors.contains("name"));
        assert!(errors.contains("country"));
        assert!(errors.contains("date_of_birth"));
    }

    #[test]
    fn test_age_limits() {
        let mut draft = valid_draft();
        draft.date_of_birth = "2010-01-01".into();
        let errors = draft.validate(today()).unwrap_err();
        assert_eq!(
            errors.get("date_of_birth"),
            Some("Helper must be between 18 and 65 years old")
        );

        draft.date_of_birth = "2030-01-01".into();
        let errors = draft.validate(today()).unwrap_err();
        assert_eq!(
            errors.get("date_of_birth"),
            Some("Date of birth cannot be in the future")
        );
    }

    #[test]
    fn test_bad_numbers() {
        let mut draft = valid_draft();
        draft.height = "-3".into();
        draft.weight = "heavy".into();
        draft.salary = "12.5".into();

        let errors = draft.validate(today()).unwrap_err();
        assert!(errors.contains("height"));
        assert!(errors.contains("weight"));
        assert!(errors.contains("salary"));
        assert!(!errors.contains("loan"));
    }

    #[test]
    fn test_history_rows() {
        let mut draft = valid_draft();
        draft.add_history();
        draft.history[1].country = "Hong Kong".into();
        draft.history[1].from = "2020-05-01".into();
        draft.history[1].to = "2020-01-01".into();

        let errors = draft.validate(today()).unwrap_err();
        assert_eq!(
            errors.get("history.1.to"),
            Some("End date must be after start date")
        );
        assert!(!errors.contains("history.0.country"));

        draft.remove_history(1);
        draft.remove_history(9);
        assert!(draft.validate(today()).is_ok());
    }

    #[test]
    fn test_from_profile_round_trip() {
        let payload = valid_draft().validate(today()).unwrap();

        let mut profile = HelperProfile::new("m1", payload.name.clone());
        profile.country = payload.country.clone();
        profile.date_of_birth = payload.date_of_birth;
        profile.salary = payload.salary;
        profile.skills = payload.skills.clone();
        profile.employment_history = payload.employment_history.clone();

        let draft = ProfileDraft::from_profile(&profile);
        assert_eq!(draft.salary, "1200");
        assert_eq!(draft.skills, "Cooking, Infant Care, cooking");
        assert_eq!(draft.history[0].from, "2016-03-01");
        assert_eq!(draft.validate(today()).unwrap().skills, payload.skills);
    }
}
