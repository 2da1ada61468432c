//! Detail Popup
//!
//! Full profile for the card the visitor clicked. The card's summary is
//! shown straight away and replaced when the detailed record arrives.

use leptos::*;
use leptos_router::*;

use helperhub::cards::experience_label;
use helperhub::detail::{resolve_detail, DetailView};
use helperhub::helpers;
use helperhub::models::{EmploymentRecord, HelperProfile};

use crate::api;
use crate::components::{FavoriteButton, Loading};
use crate::state::{AuthState, GlobalState};

#[component]
pub fn DetailPopup() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let auth = use_context::<AuthState>().expect("AuthState not found");
    let detail = create_rw_signal(None::<DetailView>);

    create_effect(move |_| {
        let Some(summary) = state.selected.get() else {
            detail.set(None);
            return;
        };
        detail.set(None);

        spawn_local(async move {
            let view = resolve_detail(&summary, |attempt| {
                let id = summary.id.clone();
                async move { api::get_maid(&id, attempt.credentials()).await }
            })
            .await;

            // Ignore answers for a popup that was closed or switched meanwhile
            let still_open = state
                .selected
                .with_untracked(|s| s.as_ref().map(|p| p.id == summary.id).unwrap_or(false));
            if still_open {
                detail.set(Some(view));
            }
        });
    });

    let close = move |_| state.close_detail();

    view! {
        {move || state.selected.get().map(|summary| view! {
            <div class="fixed inset-0 z-50 bg-black/50 flex items-center justify-center p-4" on:click=close>
                <div
                    class="bg-white rounded-2xl shadow-xl max-w-2xl w-full max-h-[90vh] overflow-y-auto"
                    on:click=|ev| ev.stop_propagation()
                >
                    {move || match detail.get() {
                        Some(view) => view! {
                            <DetailBody
                                profile=view.profile.clone()
                                notice=view.notice(auth.is_authenticated())
                            />
                        }.into_view(),
                        None => view! {
                            <DetailBody profile=summary.clone() notice=None />
                            <Loading />
                        }.into_view(),
                    }}
                    <div class="px-6 pb-6 flex justify-end">
                        <button
                            class="px-4 py-2 rounded-lg border border-slate-300 hover:bg-slate-100"
                            on:click=close
                        >
                            "Close"
                        </button>
                    </div>
                </div>
            </div>
        })}
    }
}

#[component]
fn DetailBody(profile: HelperProfile, notice: Option<&'static str>) -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");

    let today = chrono::Local::now().date_naive();
    let image = profile.resolved_image(&api::image_base());
    let age = profile.age_on(today);
    let availability = profile.availability();
    let experience = experience_label(profile.experience_months(today));
    let admin_href = format!("/admin/maids/{}", profile.id);

    let facts: Vec<(&'static str, String)> = [
        ("Age", age.map(|a| a.to_string())),
        ("Country", Some(profile.country.clone()).filter(|c| !c.is_empty())),
        ("Height", profile.height.map(|h| format!("{} cm", h))),
        ("Weight", profile.weight.map(|w| format!("{} kg", w))),
        (
            "Salary",
            profile
                .salary
                .map(|s| format!("{}/month", helpers::format_salary(s))),
        ),
        ("Loan", profile.loan.map(helpers::format_salary)),
        ("Experience", experience),
        ("Status", Some(availability.label().to_string())),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.map(|v| (label, v)))
    .collect();

    view! {
        <div class="p-6 space-y-5">
            <div class="flex items-start space-x-4">
                {match image {
                    Some(src) => view! {
                        <img src=src alt=profile.name.clone() class="w-28 h-28 rounded-xl object-cover" />
                    }.into_view(),
                    None => view! {
                        <div class="w-28 h-28 rounded-xl bg-teal-100 text-teal-700 flex items-center justify-center text-3xl font-bold">
                            {helpers::initials(&profile.name)}
                        </div>
                    }.into_view(),
                }}
                <div class="flex-1">
                    <div class="flex items-center space-x-2">
                        {helpers::flag_image_url(&profile.country).map(|src| view! {
                            <img src=src alt=profile.country.clone() class="w-6 h-auto rounded-sm" />
                        })}
                        <h2 class="text-2xl font-bold text-slate-800">{profile.name.clone()}</h2>
                    </div>
                    {notice.map(|text| view! {
                        <p class="text-xs text-amber-600 mt-1">{text}</p>
                    })}
                </div>
                <FavoriteButton profile_id=profile.id.clone() />
            </div>

            <dl class="grid grid-cols-2 gap-x-6 gap-y-2 text-sm">
                {facts.into_iter().map(|(label, value)| view! {
                    <dt class="text-slate-500">{label}</dt>
                    <dd class="text-slate-800 font-medium">{value}</dd>
                }).collect_view()}
            </dl>

            <ChipSection title="Skills" items=profile.skills.iter().cloned().collect() />
            <ChipSection title="Languages" items=profile.languages.iter().cloned().collect() />
            <ChipSection title="Placement" items=profile.types.iter().cloned().collect() />

            {profile.description.clone().filter(|d| !d.trim().is_empty()).map(|text| view! {
                <section>
                    <h3 class="font-semibold text-slate-700 mb-1">"About"</h3>
                    <p class="text-sm text-slate-600 whitespace-pre-line">{text}</p>
                </section>
            })}

            {(!profile.employment_history.is_empty()).then(|| view! {
                <EmploymentHistory records=profile.employment_history.clone() />
            })}

            {move || auth.is_admin().then(|| view! {
                <A href=admin_href.clone() class="inline-block text-sm text-teal-700 hover:underline">
                    "Edit profile"
                </A>
            })}
        </div>
    }
}

#[component]
fn ChipSection(title: &'static str, items: Vec<String>) -> impl IntoView {
    (!items.is_empty()).then(|| view! {
        <section>
            <h3 class="font-semibold text-slate-700 mb-1">{title}</h3>
            <div class="flex flex-wrap gap-1">
                {items.into_iter().map(|item| view! {
                    <span class="px-2 py-0.5 text-xs rounded-full bg-teal-50 text-teal-700">{item}</span>
                }).collect_view()}
            </div>
        </section>
    })
}

#[component]
fn EmploymentHistory(records: Vec<EmploymentRecord>) -> impl IntoView {
    let today = chrono::Local::now().date_naive();
    let period = |record: &EmploymentRecord| {
        let from = record.from.map(|d| d.format("%b %Y").to_string());
        let to = record
            .to
            .map(|d| d.format("%b %Y").to_string())
            .unwrap_or_else(|| "present".to_string());
        match from {
            Some(from) => format!("{} – {}", from, to),
            None => String::new(),
        }
    };

    view! {
        <section>
            <h3 class="font-semibold text-slate-700 mb-2">"Employment history"</h3>
            <table class="w-full text-sm">
                <thead class="text-left text-slate-500">
                    <tr>
                        <th class="pb-1">"Country"</th>
                        <th class="pb-1">"Period"</th>
                        <th class="pb-1">"Family size"</th>
                        <th class="pb-1">"Duties"</th>
                        <th class="pb-1">"Reason for leaving"</th>
                    </tr>
                </thead>
                <tbody>
                    {records.iter().map(|record| {
                        let duration = record
                            .duration_months(today)
                            .and_then(experience_label)
                            .map(|d| d.replace(" experience", ""))
                            .unwrap_or_default();
                        view! {
                            <tr class="border-t border-slate-100">
                                <td class="py-1">{record.country.clone()}</td>
                                <td class="py-1">
                                    {period(record)}
                                    <span class="block text-xs text-slate-400">{duration}</span>
                                </td>
                                <td class="py-1">
                                    {record.family_size.map(|n| n.to_string()).unwrap_or_default()}
                                </td>
                                <td class="py-1">{record.job_scope.clone().unwrap_or_default()}</td>
                                <td class="py-1">{record.reason_for_leaving.clone().unwrap_or_default()}</td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </section>
    }
}
