//! Catalogue filtering and sorting
//!
//! Narrowing the list of helper profiles happens client side on the list
//! the backend already returned.
//!
//! ```rust,ignore
//! let filter = CatalogueFilter::new()
//!     .search("cook")
//!     .country("Philippines")
//!     .age_range(Some(25), Some(40))
//!     .available_only(true);
//! let shown = filter.apply(&profiles, today, &favorites);
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

use crate::models::{HelperProfile, ProfileId};

/// Ordering of the filtered list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Order the backend returned
    #[default]
    Newest,
    Name,
    AgeAsc,
    SalaryAsc,
    SalaryDesc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 5] = [
        SortOrder::Newest,
        SortOrder::Name,
        SortOrder::AgeAsc,
        SortOrder::SalaryAsc,
        SortOrder::SalaryDesc,
    ];

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "newest" => Some(SortOrder::Newest),
            "name" => Some(SortOrder::Name),
            "age" | "age_asc" => Some(SortOrder::AgeAsc),
            "salary" | "salary_asc" => Some(SortOrder::SalaryAsc),
            "salary_desc" => Some(SortOrder::SalaryDesc),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Newest => "Newest",
            SortOrder::Name => "Name",
            SortOrder::AgeAsc => "Youngest first",
            SortOrder::SalaryAsc => "Salary: low to high",
            SortOrder::SalaryDesc => "Salary: high to low",
        }
    }
}

/// Criteria picked in the catalogue sidebar. Empty sets match everything.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogueFilter {
    /// Case-insensitive match on name, country or description
    pub search: String,
    /// Any of these countries
    pub countries: BTreeSet<String>,
    /// Every one of these skills
    pub skills: BTreeSet<String>,
    /// Every one of these languages
    pub languages: BTreeSet<String>,
    /// Any of these helper types
    pub types: BTreeSet<String>,
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,
    pub max_salary: Option<u32>,
    pub available_only: bool,
    pub favorites_only: bool,
    pub sort: SortOrder,
}

impl CatalogueFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.countries.insert(country.into());
        self
    }

    pub fn skill(mut self, skill: impl Into<String>) -> Self {
        self.skills.insert(skill.into());
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.languages.insert(language.into());
        self
    }

    pub fn helper_type(mut self, helper_type: impl Into<String>) -> Self {
        self.types.insert(helper_type.into());
        self
    }

    pub fn age_range(mut self, min: Option<u32>, max: Option<u32>) -> Self {
        self.min_age = min;
        self.max_age = max;
        self
    }

    pub fn max_salary(mut self, max: Option<u32>) -> Self {
        self.max_salary = max;
        self
    }

    pub fn available_only(mut self, yes: bool) -> Self {
        self.available_only = yes;
        self
    }

    pub fn favorites_only(mut self, yes: bool) -> Self {
        self.favorites_only = yes;
        self
    }

    pub fn sort_by(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// True when nothing narrows the list
    pub fn is_empty(&self) -> bool {
        let sort = self.sort;
        *self == Self::default().sort_by(sort)
    }

    /// Whether one profile passes every criterion
    pub fn matches(
        &self,
        profile: &HelperProfile,
        today: NaiveDate,
        favorites: &HashSet<ProfileId>,
    ) -> bool {
        let needle = self.search.trim().to_lowercase();
        if !needle.is_empty() {
            let hit = profile.name.to_lowercase().contains(&needle)
                || profile.country.to_lowercase().contains(&needle)
                || profile
                    .description
                    .as_deref()
                    .map(|d| d.to_lowercase().contains(&needle))
                    .unwrap_or(false);
            if !hit {
                return false;
            }
        }

        if !self.countries.is_empty() && !contains_ci(&self.countries, &profile.country) {
            return false;
        }
        if !self
            .skills
            .iter()
            .all(|s| contains_ci(&profile.skills, s))
        {
            return false;
        }
        if !self
            .languages
            .iter()
            .all(|l| contains_ci(&profile.languages, l))
        {
            return false;
        }
        if !self.types.is_empty() && !self.types.iter().any(|t| contains_ci(&profile.types, t)) {
            return false;
        }

        if self.min_age.is_some() || self.max_age.is_some() {
            // No birth date means the age is unknown, so a range excludes it
            let Some(age) = profile.age_on(today) else {
                return false;
            };
            if self.min_age.map(|min| age < min).unwrap_or(false)
                || self.max_age.map(|max| age > max).unwrap_or(false)
            {
                return false;
            }
        }

        if let Some(max) = self.max_salary {
            if profile.salary.map(|s| s > max).unwrap_or(false) {
                return false;
            }
        }

        if self.available_only && !profile.is_available() {
            return false;
        }
        if self.favorites_only && !favorites.contains(&profile.id) {
            return false;
        }

        true
    }

    /// Matching profiles in the chosen order
    pub fn apply<'a>(
        &self,
        profiles: &'a [HelperProfile],
        today: NaiveDate,
        favorites: &HashSet<ProfileId>,
    ) -> Vec<&'a HelperProfile> {
        let mut shown: Vec<&HelperProfile> = profiles
            .iter()
            .filter(|p| self.matches(p, today, favorites))
            .collect();

        // Stable sorts keep server order among equals
        match self.sort {
            SortOrder::Newest => {}
            SortOrder::Name => shown.sort_by_key(|p| p.name.to_lowercase()),
            SortOrder::AgeAsc => shown.sort_by_key(|p| p.age_on(today).unwrap_or(u32::MAX)),
            SortOrder::SalaryAsc => shown.sort_by_key(|p| p.salary.unwrap_or(u32::MAX)),
            SortOrder::SalaryDesc => {
                shown.sort_by_key(|p| std::cmp::Reverse(p.salary.unwrap_or(0)))
            }
        }

        tracing::trace!(total = profiles.len(), shown = shown.len(), "Applied catalogue filter");
        shown
    }
}

fn contains_ci(set: &BTreeSet<String>, value: &str) -> bool {
    set.iter().any(|s| s.eq_ignore_ascii_case(value))
}

/// Distinct values offered by the filter widgets
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Facets {
    pub countries: BTreeSet<String>,
    pub skills: BTreeSet<String>,
    pub languages: BTreeSet<String>,
    pub types: BTreeSet<String>,
}

pub fn facets(profiles: &[HelperProfile]) -> Facets {
    let mut facets = Facets::default();
    for profile in profiles {
        if !profile.country.is_empty() {
            facets.countries.insert(profile.country.clone());
        }
        facets.skills.extend(profile.skills.iter().cloned());
        facets.languages.extend(profile.languages.iter().cloned());
        facets.types.extend(profile.types.iter().cloned());
    }
    facets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn profile(
        id: &str,
        name: &str,
        country: &str,
        born: (i32, u32, u32),
        salary: u32,
    ) -> HelperProfile {
        let mut p = HelperProfile::new(id, name);
        p.country = country.into();
        p.date_of_birth = NaiveDate::from_ymd_opt(born.0, born.1, born.2);
        p.salary = Some(salary);
        p
    }

    fn sample() -> Vec<HelperProfile> {
        let mut anna = profile("m1", "Anna", "Philippines", (1990, 6, 15), 700);
        anna.skills = ["Cooking", "Childcare"].iter().map(|s| s.to_string()).collect();
        anna.languages = ["English"].iter().map(|s| s.to_string()).collect();
        anna.types.insert("Transfer".into());

        let mut siti = profile("m2", "Siti", "Indonesia", (1998, 1, 2), 600);
        siti.skills.insert("Cooking".into());
        siti.types.insert("Fresh".into());
        siti.is_employed = true;

        let mut bea = profile("m3", "bea", "Philippines", (1982, 3, 9), 900);
        bea.description = Some("Experienced elderly care".into());
        bea.types.insert("Ex-Overseas".into());

        vec![anna, siti, bea]
    }

    fn ids(shown: &[&HelperProfile]) -> Vec<String> {
        shown.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_empty_filter_keeps_server_order() {
        let profiles = sample();
        let filter = CatalogueFilter::new();
        assert!(filter.is_empty());
        assert_eq!(
            ids(&filter.apply(&profiles, today(), &HashSet::new())),
            vec!["m1", "m2", "m3"]
        );
    }

    #[test]
    fn test_search_covers_description() {
        let profiles = sample();
        let filter = CatalogueFilter::new().search("ELDERLY");
        assert!(!filter.is_empty());
        assert_eq!(ids(&filter.apply(&profiles, today(), &HashSet::new())), vec!["m3"]);
    }

    #[test]
    fn test_skills_must_all_match() {
        let profiles = sample();
        let filter = CatalogueFilter::new().skill("cooking").skill("Childcare");
        assert_eq!(ids(&filter.apply(&profiles, today(), &HashSet::new())), vec!["m1"]);
    }

    #[test]
    fn test_types_any_match() {
        let profiles = sample();
        let filter = CatalogueFilter::new()
            .helper_type("Fresh")
            .helper_type("Ex-Overseas");
        assert_eq!(
            ids(&filter.apply(&profiles, today(), &HashSet::new())),
            vec!["m2", "m3"]
        );
    }

    #[test]
    fn test_age_range_is_inclusive() {
        let profiles = sample();
        // Anna turns 34 on the reference date
        let filter = CatalogueFilter::new().age_range(Some(27), Some(34));
        assert_eq!(ids(&filter.apply(&profiles, today(), &HashSet::new())), vec!["m1"]);

        let mut unknown = HelperProfile::new("m4", "No DOB");
        unknown.salary = Some(500);
        let with_unknown = vec![unknown];
        assert!(filter.apply(&with_unknown, today(), &HashSet::new()).is_empty());
    }

    #[test]
    fn test_availability_and_favorites() {
        let profiles = sample();
        let favorites: HashSet<ProfileId> = ["m2".to_string(), "m3".to_string()].into();

        let available = CatalogueFilter::new().available_only(true);
        assert_eq!(ids(&available.apply(&profiles, today(), &favorites)), vec!["m1", "m3"]);

        let both = available.favorites_only(true);
        assert_eq!(ids(&both.apply(&profiles, today(), &favorites)), vec!["m3"]);
    }

    #[test]
    fn test_sort_orders() {
        let profiles = sample();
        let none = HashSet::new();
        let by = |sort| ids(&CatalogueFilter::new().sort_by(sort).apply(&profiles, today(), &none));

        assert_eq!(by(SortOrder::Name), vec!["m1", "m3", "m2"]);
        assert_eq!(by(SortOrder::AgeAsc), vec!["m2", "m1", "m3"]);
        assert_eq!(by(SortOrder::SalaryAsc), vec!["m2", "m1", "m3"]);
        assert_eq!(by(SortOrder::SalaryDesc), vec!["m3", "m1", "m2"]);
    }

    #[test]
    fn test_sort_from_str() {
        assert_eq!(SortOrder::from_str("salary-desc"), Some(SortOrder::SalaryDesc));
        assert_eq!(SortOrder::from_str("Age"), Some(SortOrder::AgeAsc));
        assert_eq!(SortOrder::from_str("random"), None);
    }

    #[test]
    fn test_facets() {
        let facets = facets(&sample());
        assert_eq!(facets.countries.len(), 2);
        assert!(facets.skills.contains("Childcare"));
        assert_eq!(facets.types.len(), 3);
    }
}
