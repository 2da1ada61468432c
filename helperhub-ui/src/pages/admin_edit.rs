//! Admin Profile Editor
//!
//! Create a profile at `/admin/maids/new` or edit one at `/admin/maids/:id`.
//! Only admins get the form; the backend enforces the same rule.

use leptos::*;
use leptos_router::*;

use helperhub::forms::{FormErrors, HistoryDraft, ProfileDraft};
use helperhub::models::HelperProfile;

use crate::api;
use crate::components::{CheckField, Loading, TextField};
use crate::state::{AuthState, GlobalState};

#[component]
pub fn AdminEdit() -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");
    let params = use_params_map();
    let id = move || params.with(|p| p.get("id").cloned());

    view! {
        {move || {
            if auth.is_loading() {
                view! { <Loading /> }.into_view()
            } else if !auth.is_admin() {
                view! {
                    <div class="text-center py-16">
                        <h1 class="text-2xl font-bold">"Admins only"</h1>
                        <p class="text-slate-500 mt-2">"You do not have access to this page."</p>
                    </div>
                }.into_view()
            } else {
                view! { <ProfileEditor id=id() /> }.into_view()
            }
        }}
    }
}

/// One signal per draft field so inputs can bind directly
#[derive(Clone, Copy)]
struct DraftSignals {
    name: RwSignal<String>,
    country: RwSignal<String>,
    date_of_birth: RwSignal<String>,
    height: RwSignal<String>,
    weight: RwSignal<String>,
    salary: RwSignal<String>,
    loan: RwSignal<String>,
    skills: RwSignal<String>,
    languages: RwSignal<String>,
    types: RwSignal<String>,
    is_active: RwSignal<bool>,
    is_employed: RwSignal<bool>,
    description: RwSignal<String>,
    image_url: RwSignal<String>,
    history: RwSignal<Vec<HistoryDraft>>,
}

impl DraftSignals {
    fn new(draft: ProfileDraft) -> Self {
        Self {
            name: create_rw_signal(draft.name),
            country: create_rw_signal(draft.country),
            date_of_birth: create_rw_signal(draft.date_of_birth),
            height: create_rw_signal(draft.height),
            weight: create_rw_signal(draft.weight),
            salary: create_rw_signal(draft.salary),
            loan: create_rw_signal(draft.loan),
            skills: create_rw_signal(draft.skills),
            languages: create_rw_signal(draft.languages),
            types: create_rw_signal(draft.types),
            is_active: create_rw_signal(draft.is_active),
            is_employed: create_rw_signal(draft.is_employed),
            description: create_rw_signal(draft.description),
            image_url: create_rw_signal(draft.image_url),
            history: create_rw_signal(draft.history),
        }
    }

    fn load(&self, draft: ProfileDraft) {
        self.name.set(draft.name);
        self.country.set(draft.country);
        self.date_of_birth.set(draft.date_of_birth);
        self.height.set(draft.height);
        self.weight.set(draft.weight);
        self.salary.set(draft.salary);
        self.loan.set(draft.loan);
        self.skills.set(draft.skills);
        self.languages.set(draft.languages);
        self.types.set(draft.types);
        self.is_active.set(draft.is_active);
        self.is_employed.set(draft.is_employed);
        self.description.set(draft.description);
        self.image_url.set(draft.image_url);
        self.history.set(draft.history);
    }

    fn snapshot(&self) -> ProfileDraft {
        ProfileDraft {
            name: self.name.get_untracked(),
            country: self.country.get_untracked(),
            date_of_birth: self.date_of_birth.get_untracked(),
            height: self.height.get_untracked(),
            weight: self.weight.get_untracked(),
            salary: self.salary.get_untracked(),
            loan: self.loan.get_untracked(),
            skills: self.skills.get_untracked(),
            languages: self.languages.get_untracked(),
            types: self.types.get_untracked(),
            is_active: self.is_active.get_untracked(),
            is_employed: self.is_employed.get_untracked(),
            description: self.description.get_untracked(),
            image_url: self.image_url.get_untracked(),
            history: self.history.get_untracked(),
        }
    }
}

#[component]
fn ProfileEditor(id: Option<String>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let auth = use_context::<AuthState>().expect("AuthState not found");
    let navigate = use_navigate();

    let draft = DraftSignals::new(ProfileDraft::default());
    let errors = create_rw_signal(FormErrors::new());
    let (saving, set_saving) = create_signal(false);
    let (ready, set_ready) = create_signal(id.is_none());

    if let Some(id) = id.clone() {
        spawn_local(async move {
            match auth.guard(api::get_maid(&id, helperhub::detail::Credentials::Include).await) {
                Ok(profile) => draft.load(ProfileDraft::from_profile(&profile)),
                Err(e) => state.show_error(&e.user_message()),
            }
            set_ready.set(true);
        });
    }

    let editing = id.clone();
    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }

        let today = chrono::Local::now().date_naive();
        let payload = match draft.snapshot().validate(today) {
            Ok(payload) => payload,
            Err(e) => {
                state.show_error(&e.to_string());
                errors.set(e);
                return;
            }
        };
        errors.set(FormErrors::new());
        set_saving.set(true);

        let editing = editing.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = match &editing {
                Some(id) => api::update_maid(id, &payload).await,
                None => api::create_maid(&payload).await,
            };
            match auth.guard(result) {
                Ok(saved) => {
                    remember(state, saved);
                    state.show_success("Profile saved");
                    navigate("/maids", Default::default());
                }
                Err(e) => state.show_error(&e.user_message()),
            }
            set_saving.set(false);
        });
    };

    let heading = if id.is_some() { "Edit profile" } else { "New profile" };

    view! {
        <div class="max-w-3xl mx-auto space-y-6">
            <h1 class="text-3xl font-bold text-slate-800">{heading}</h1>
            {move || if !ready.get() {
                view! { <Loading /> }.into_view()
            } else {
                view! {}.into_view()
            }}
            <form class="bg-white rounded-xl shadow p-6 space-y-5" on:submit=submit>
                <div class="grid gap-4 md:grid-cols-2">
                    <TextField label="Name" name="name" value=draft.name errors=errors />
                    <TextField label="Country" name="country" value=draft.country errors=errors />
                    <TextField
                        label="Date of birth"
                        name="date_of_birth"
                        kind="date"
                        value=draft.date_of_birth
                        errors=errors
                    />
                    <TextField label="Photo URL" name="image_url" value=draft.image_url errors=errors />
                    <TextField label="Height (cm)" name="height" value=draft.height errors=errors />
                    <TextField label="Weight (kg)" name="weight" value=draft.weight errors=errors />
                    <TextField label="Salary per month" name="salary" value=draft.salary errors=errors />
                    <TextField label="Loan" name="loan" value=draft.loan errors=errors />
                </div>
                <TextField
                    label="Skills"
                    name="skills"
                    placeholder="Cooking, Childcare, Elderly Care"
                    value=draft.skills
                    errors=errors
                />
                <TextField
                    label="Languages"
                    name="languages"
                    placeholder="English, Cantonese"
                    value=draft.languages
                    errors=errors
                />
                <TextField
                    label="Placement types"
                    name="types"
                    placeholder="Transfer, New/Fresh"
                    value=draft.types
                    errors=errors
                />
                <TextField
                    label="Description"
                    name="description"
                    multiline=true
                    value=draft.description
                    errors=errors
                />
                <div class="flex space-x-6">
                    <CheckField label="Active" value=draft.is_active />
                    <CheckField label="Currently employed" value=draft.is_employed />
                </div>

                <HistoryEditor history=draft.history errors=errors />

                <button
                    type="submit"
                    class="w-full py-3 rounded-lg bg-teal-600 text-white font-medium hover:bg-teal-700 disabled:opacity-60"
                    disabled=move || saving.get()
                >
                    {move || if saving.get() { "Saving..." } else { "Save profile" }}
                </button>
            </form>
        </div>
    }
}

/// Replace or add the saved profile in the loaded catalogue
fn remember(state: GlobalState, saved: HelperProfile) {
    state.profiles.update(|profiles| {
        match profiles.iter_mut().find(|p| p.id == saved.id) {
            Some(existing) => *existing = saved,
            None => profiles.insert(0, saved),
        }
    });
}

#[component]
fn HistoryEditor(history: RwSignal<Vec<HistoryDraft>>, errors: RwSignal<FormErrors>) -> impl IntoView {
    let add = move |_| history.update(|rows| rows.push(HistoryDraft::default()));

    view! {
        <section class="space-y-3">
            <div class="flex items-center justify-between">
                <h2 class="font-semibold text-slate-700">"Employment history"</h2>
                <button type="button" class="text-sm text-teal-700 hover:underline" on:click=add>
                    "+ Add employer"
                </button>
            </div>
            {move || (0..history.with(Vec::len)).map(|index| view! {
                <HistoryRow history=history errors=errors index=index />
            }).collect_view()}
        </section>
    }
}

#[component]
fn HistoryRow(history: RwSignal<Vec<HistoryDraft>>, errors: RwSignal<FormErrors>, index: usize) -> impl IntoView {
    let cell = move |label: &'static str, key: &'static str, kind: &'static str| {
        let read = move || {
            history.with(|rows| {
                rows.get(index)
                    .map(|row| match key {
                        "country" => row.country.clone(),
                        "from" => row.from.clone(),
                        "to" => row.to.clone(),
                        "family_size" => row.family_size.clone(),
                        "job_scope" => row.job_scope.clone(),
                        _ => row.reason_for_leaving.clone(),
                    })
                    .unwrap_or_default()
            })
        };
        let write = move |value: String| {
            history.update(|rows| {
                if let Some(row) = rows.get_mut(index) {
                    match key {
                        "country" => row.country = value,
                        "from" => row.from = value,
                        "to" => row.to = value,
                        "family_size" => row.family_size = value,
                        "job_scope" => row.job_scope = value,
                        _ => row.reason_for_leaving = value,
                    }
                }
            })
        };
        let message = move || errors.with(|e| e.get(&format!("history.{}.{}", index, key)).map(str::to_string));

        view! {
            <label class="block text-sm space-y-1">
                <span class="text-slate-600">{label}</span>
                <input
                    type=kind
                    class="w-full rounded-lg border border-slate-300 px-2 py-1"
                    prop:value=read
                    on:change=move |ev| write(event_target_value(&ev))
                />
                {move || message().map(|m| view! { <span class="text-xs text-rose-600">{m}</span> })}
            </label>
        }
    };

    let remove = move |_| {
        history.update(|rows| {
            if index < rows.len() {
                rows.remove(index);
            }
        })
    };

    view! {
        <div class="rounded-lg border border-slate-200 p-4 grid gap-3 md:grid-cols-3">
            {cell("Country", "country", "text")}
            {cell("From", "from", "date")}
            {cell("To", "to", "date")}
            {cell("Family size", "family_size", "number")}
            {cell("Duties", "job_scope", "text")}
            {cell("Reason for leaving", "reason_for_leaving", "text")}
            <div class="md:col-span-3 text-right">
                <button type="button" class="text-sm text-rose-600 hover:underline" on:click=remove>
                    "Remove"
                </button>
            </div>
        </div>
    }
}
