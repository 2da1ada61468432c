//! Card Showcase
//!
//! One profile rendered in every card layout, side by side.

use chrono::NaiveDate;
use leptos::*;

use helperhub::cards::CardVariant;
use helperhub::models::{EmploymentRecord, HelperProfile};

use crate::components::MaidCard;
use crate::state::GlobalState;

/// Stand-in profile for visitors who have not loaded the catalogue
fn sample_profile() -> HelperProfile {
    let mut profile = HelperProfile::new("sample", "Maria Santos");
    profile.country = "Philippines".into();
    profile.date_of_birth = NaiveDate::from_ymd_opt(1991, 3, 12);
    profile.height = Some(158.0);
    profile.weight = Some(52.0);
    profile.salary = Some(650);
    profile.skills = ["Cooking", "Childcare", "Housekeeping", "Elderly Care", "Pet Care"]
        .into_iter()
        .map(String::from)
        .collect();
    profile.languages = ["English", "Tagalog"].into_iter().map(String::from).collect();
    profile.types.insert("Transfer".into());
    profile.description = Some(
        "Cheerful and organised, with six years caring for young children and an elderly \
         grandparent. Confident cooking Chinese and Western dishes."
            .into(),
    );
    profile.employment_history.push(EmploymentRecord {
        country: "Singapore".into(),
        from: NaiveDate::from_ymd_opt(2017, 5, 1),
        to: NaiveDate::from_ymd_opt(2023, 4, 30),
        family_size: Some(5),
        job_scope: Some("Childcare, cooking, housekeeping".into()),
        reason_for_leaving: Some("Family relocated".into()),
    });
    profile
}

#[component]
pub fn Showcase() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let profile = move || {
        state
            .profiles
            .with(|profiles| profiles.first().cloned())
            .unwrap_or_else(sample_profile)
    };

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold text-slate-800">"Card Layouts"</h1>
                <p class="text-slate-500 mt-1">
                    "Every layout shares the same favorite button and opens the same detail view."
                </p>
            </div>
            <div class="grid gap-8 md:grid-cols-2 xl:grid-cols-3">
                {move || {
                    let profile = profile();
                    CardVariant::ALL.into_iter().map(|variant| view! {
                        <div class="space-y-2">
                            <h2 class="text-sm font-semibold uppercase tracking-wide text-slate-500">
                                {variant.label()}
                            </h2>
                            <MaidCard profile=profile.clone() variant=variant />
                        </div>
                    }).collect_view()
                }}
            </div>
        </div>
    }
}
