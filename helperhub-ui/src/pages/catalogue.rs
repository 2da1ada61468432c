//! Catalogue Page
//!
//! Helper profiles for signed-in visitors, filtered client side. Visitors
//! without a session get a sign-in call to action instead.

use leptos::*;
use leptos_router::*;
use std::collections::{BTreeSet, HashSet};

use helperhub::cards::CardVariant;
use helperhub::catalogue::{facets, CatalogueFilter, SortOrder};
use helperhub::models::HelperProfile;

use crate::api;
use crate::components::{CardGridSkeleton, CheckField, MaidCard};
use crate::state::{AuthState, GlobalState};

#[component]
pub fn Catalogue() -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold text-slate-800">"Find a Helper"</h1>
                <p class="text-slate-500 mt-1">"Browse available helpers and shortlist your favorites."</p>
            </div>
            {move || {
                if auth.is_loading() {
                    view! { <CardGridSkeleton /> }.into_view()
                } else if auth.is_authenticated() {
                    view! { <CatalogueBrowser /> }.into_view()
                } else {
                    view! { <SignInRequired /> }.into_view()
                }
            }}
        </div>
    }
}

#[component]
fn SignInRequired() -> impl IntoView {
    view! {
        <div class="bg-white rounded-2xl shadow p-10 text-center space-y-4 max-w-lg mx-auto">
            <div class="text-5xl">"🔒"</div>
            <h2 class="text-xl font-semibold">"Sign in to browse helper profiles"</h2>
            <p class="text-slate-500">"Profiles are shared with registered families only."</p>
            <A href="/login" class="inline-block px-6 py-3 rounded-lg bg-teal-600 text-white hover:bg-teal-700">
                "Sign in or create an account"
            </A>
        </div>
    }
}

#[component]
fn CatalogueBrowser() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let auth = use_context::<AuthState>().expect("AuthState not found");

    let filter = create_rw_signal(CatalogueFilter::new());
    let variant = create_rw_signal(CardVariant::Classic);
    let (loaded, set_loaded) = create_signal(false);

    spawn_local(async move {
        state.loading.set(true);
        match auth.guard(api::list_maids().await) {
            Ok(profiles) => state.profiles.set(profiles),
            Err(e) => state.show_error(&e.user_message()),
        }
        match auth.guard(api::list_favorites().await) {
            Ok(ids) => state.favorites.set(ids.into_iter().collect()),
            Err(e) => web_sys::console::warn_1(&format!("Favorites failed to load: {}", e).into()),
        }
        state.loading.set(false);
        set_loaded.set(true);
    });

    let today = chrono::Local::now().date_naive();
    let shown = create_memo(move |_| {
        let favorites: HashSet<String> = state.favorites.get();
        state.profiles.with(|profiles| {
            filter.with(|f| {
                f.apply(profiles, today, &favorites)
                    .into_iter()
                    .cloned()
                    .collect::<Vec<HelperProfile>>()
            })
        })
    });
    let options = create_memo(move |_| state.profiles.with(|p| facets(p)));

    view! {
        <div class="grid gap-6 lg:grid-cols-[18rem_1fr]">
            <aside class="bg-white rounded-xl shadow p-5 space-y-4 h-fit">
                <input
                    type="search"
                    placeholder="Search name, country or keywords"
                    class="w-full rounded-lg border border-slate-300 px-3 py-2"
                    prop:value=move || filter.with(|f| f.search.clone())
                    on:input=move |ev| filter.update(|f| f.search = event_target_value(&ev))
                />
                <FacetSelect
                    label="Country"
                    options=Signal::derive(move || options.with(|o| o.countries.clone()))
                    on_pick=move |value| filter.update(|f| f.countries = single(value))
                />
                <FacetSelect
                    label="Skill"
                    options=Signal::derive(move || options.with(|o| o.skills.clone()))
                    on_pick=move |value| filter.update(|f| f.skills = single(value))
                />
                <FacetSelect
                    label="Language"
                    options=Signal::derive(move || options.with(|o| o.languages.clone()))
                    on_pick=move |value| filter.update(|f| f.languages = single(value))
                />
                <FacetSelect
                    label="Placement"
                    options=Signal::derive(move || options.with(|o| o.types.clone()))
                    on_pick=move |value| filter.update(|f| f.types = single(value))
                />
                <div class="grid grid-cols-2 gap-2">
                    <NumberInput
                        label="Min age"
                        on_change=move |v| filter.update(|f| f.min_age = v)
                    />
                    <NumberInput
                        label="Max age"
                        on_change=move |v| filter.update(|f| f.max_age = v)
                    />
                </div>
                <NumberInput
                    label="Max salary"
                    on_change=move |v| filter.update(|f| f.max_salary = v)
                />
                <FilterToggle
                    label="Available now"
                    on_change=move |v| filter.update(|f| f.available_only = v)
                />
                <FilterToggle
                    label="My favorites"
                    on_change=move |v| filter.update(|f| f.favorites_only = v)
                />
            </aside>

            <section class="space-y-4">
                <div class="flex flex-wrap items-center justify-between gap-3">
                    <p class="text-sm text-slate-500">
                        {move || format!("{} helpers", shown.with(Vec::len))}
                    </p>
                    <div class="flex items-center space-x-3 text-sm">
                        <select
                            class="rounded-lg border border-slate-300 px-2 py-1"
                            on:change=move |ev| {
                                let sort = event_target_value(&ev)
                                    .parse::<usize>()
                                    .ok()
                                    .and_then(|i| SortOrder::ALL.get(i).copied())
                                    .unwrap_or_default();
                                filter.update(|f| f.sort = sort);
                            }
                        >
                            {SortOrder::ALL.iter().enumerate().map(|(i, sort)| view! {
                                <option value=i.to_string()>{sort.label()}</option>
                            }).collect_view()}
                        </select>
                        <select
                            class="rounded-lg border border-slate-300 px-2 py-1"
                            on:change=move |ev| {
                                if let Some(v) = CardVariant::from_str(&event_target_value(&ev)) {
                                    variant.set(v);
                                }
                            }
                        >
                            {CardVariant::ALL.iter().map(|v| view! {
                                <option value=v.slug()>{v.label()}</option>
                            }).collect_view()}
                        </select>
                    </div>
                </div>

                {move || {
                    if !loaded.get() {
                        view! { <CardGridSkeleton /> }.into_view()
                    } else if shown.with(Vec::is_empty) {
                        view! {
                            <p class="text-center text-slate-500 py-12">
                                "No helpers match these filters."
                            </p>
                        }.into_view()
                    } else {
                        let grid = match variant.get() {
                            CardVariant::Compact | CardVariant::Minimal => "grid gap-4 sm:grid-cols-2",
                            _ => "grid gap-6 sm:grid-cols-2 xl:grid-cols-3",
                        };
                        view! {
                            <div class=grid>
                                {shown.get().into_iter().map(|profile| view! {
                                    <MaidCard profile=profile variant=variant.get_untracked() />
                                }).collect_view()}
                            </div>
                        }.into_view()
                    }
                }}
            </section>
        </div>
    }
}

fn single(value: Option<String>) -> BTreeSet<String> {
    value.into_iter().collect()
}

#[component]
fn FacetSelect<F>(
    label: &'static str,
    options: Signal<BTreeSet<String>>,
    on_pick: F,
) -> impl IntoView
where
    F: Fn(Option<String>) + 'static,
{
    view! {
        <label class="block text-sm space-y-1">
            <span class="font-medium text-slate-700">{label}</span>
            <select
                class="w-full rounded-lg border border-slate-300 px-2 py-2"
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    on_pick((!value.is_empty()).then_some(value));
                }
            >
                <option value="">"Any"</option>
                {move || options.get().into_iter().map(|o| view! {
                    <option value=o.clone()>{o}</option>
                }).collect_view()}
            </select>
        </label>
    }
}

#[component]
fn NumberInput<F>(label: &'static str, on_change: F) -> impl IntoView
where
    F: Fn(Option<u32>) + 'static,
{
    view! {
        <label class="block text-sm space-y-1">
            <span class="font-medium text-slate-700">{label}</span>
            <input
                type="number"
                min="0"
                class="w-full rounded-lg border border-slate-300 px-2 py-2"
                on:input=move |ev| on_change(event_target_value(&ev).trim().parse().ok())
            />
        </label>
    }
}

#[component]
fn FilterToggle<F>(label: &'static str, on_change: F) -> impl IntoView
where
    F: Fn(bool) + 'static,
{
    let value = create_rw_signal(false);
    create_effect(move |_| on_change(value.get()));
    view! { <CheckField label=label value=value /> }
}
