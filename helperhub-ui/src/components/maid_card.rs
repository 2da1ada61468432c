//! Profile Card Component
//!
//! One component renders all six layouts from a [`CardModel`]. Clicking a
//! card opens the detail popup; the heart does not.

use leptos::*;

use helperhub::cards::{CardModel, CardVariant};
use helperhub::models::{Availability, HelperProfile};

use crate::api;
use crate::components::FavoriteButton;
use crate::state::GlobalState;

#[component]
pub fn MaidCard(
    profile: HelperProfile,
    #[prop(default = CardVariant::Classic)]
    variant: CardVariant,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let today = chrono::Local::now().date_naive();
    let card = CardModel::build(&profile, variant, today, &api::image_base());

    let open = move |_| state.open_detail(profile.clone());

    let shell = match variant {
        CardVariant::Classic => "bg-white rounded-xl shadow hover:shadow-lg",
        CardVariant::Compact => "bg-white rounded-lg shadow-sm hover:shadow flex items-center",
        CardVariant::Modern => "bg-gradient-to-br from-teal-50 to-white rounded-2xl shadow-md hover:shadow-xl",
        CardVariant::Minimal => "bg-white rounded-lg border border-slate-200 hover:border-teal-400",
        CardVariant::Detailed => "bg-white rounded-xl shadow-md hover:shadow-lg",
        CardVariant::Gallery => "relative rounded-2xl overflow-hidden shadow-lg group",
    };

    view! {
        <article
            class=format!("{} cursor-pointer transition-all relative", shell)
            on:click=open
        >
            {match variant {
                CardVariant::Gallery => gallery_body(card).into_view(),
                CardVariant::Compact => compact_body(card).into_view(),
                _ => standard_body(card).into_view(),
            }}
        </article>
    }
}

fn availability_class(availability: Availability) -> &'static str {
    match availability {
        Availability::Available => "bg-emerald-100 text-emerald-700",
        Availability::Employed => "bg-amber-100 text-amber-700",
        Availability::Inactive => "bg-slate-100 text-slate-500",
    }
}

#[component]
fn Photo(card: CardModel, #[prop(default = "h-48")] height: &'static str) -> impl IntoView {
    match card.image_url.clone() {
        Some(src) => view! {
            <img src=src alt=card.name.clone() class=format!("w-full {} object-cover", height) />
        }
        .into_view(),
        None => view! {
            <div class=format!(
                "w-full {} bg-teal-100 text-teal-700 flex items-center justify-center text-4xl font-bold",
                height
            )>
                {card.initials.clone()}
            </div>
        }
        .into_view(),
    }
}

#[component]
fn Chips(items: Vec<String>, #[prop(default = 0)] hidden: usize) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-1">
            {items.into_iter().map(|item| view! {
                <span class="px-2 py-0.5 text-xs rounded-full bg-slate-100 text-slate-700">{item}</span>
            }).collect_view()}
            {(hidden > 0).then(|| view! {
                <span class="px-2 py-0.5 text-xs rounded-full bg-slate-50 text-slate-500">
                    {format!("+{}", hidden)}
                </span>
            })}
        </div>
    }
}

fn title_row(card: &CardModel) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-2">
            {card.flag_url.clone().map(|src| view! {
                <img src=src alt=card.country.clone() class="w-5 h-auto rounded-sm" />
            })}
            <h3 class="font-semibold text-slate-800">{card.title()}</h3>
        </div>
    }
}

fn standard_body(card: CardModel) -> impl IntoView {
    let variant = card.variant;
    let photo_height = match variant {
        CardVariant::Minimal => "h-32",
        CardVariant::Detailed => "h-56",
        _ => "h-48",
    };

    view! {
        <div class="relative">
            <Photo card=card.clone() height=photo_height />
            <div class="absolute top-2 right-2">
                <FavoriteButton profile_id=card.id.clone() />
            </div>
        </div>
        <div class="p-4 space-y-2">
            {title_row(&card)}
            <div class="flex items-center justify-between text-sm">
                <span class="text-slate-500">{card.country.clone()}</span>
                <span class=format!(
                    "px-2 py-0.5 rounded-full text-xs {}",
                    availability_class(card.availability)
                )>
                    {card.availability_label}
                </span>
            </div>
            {card.salary_label.clone().map(|salary| view! {
                <p class="text-teal-700 font-medium">{salary}</p>
            })}
            {(!card.type_badges.is_empty() && variant != CardVariant::Minimal).then(|| view! {
                <Chips items=card.type_badges.clone() />
            })}
            {(!card.skills.is_empty()).then(|| view! {
                <Chips items=card.skills.clone() hidden=card.hidden_skills />
            })}
            {(!card.languages.is_empty()).then(|| view! {
                <p class="text-xs text-slate-500">{format!("Speaks {}", card.languages.join(", "))}</p>
            })}
            {card.experience.clone().map(|exp| view! {
                <p class="text-xs text-slate-500">{exp}</p>
            })}
            {card.excerpt.clone().map(|text| view! {
                <p class="text-sm text-slate-600">{text}</p>
            })}
        </div>
    }
}

fn compact_body(card: CardModel) -> impl IntoView {
    view! {
        <div class="w-20 h-20 flex-shrink-0 rounded-l-lg overflow-hidden">
            <Photo card=card.clone() height="h-20" />
        </div>
        <div class="flex-1 px-3 py-2 space-y-1">
            {title_row(&card)}
            <p class="text-xs text-slate-500">
                {card.salary_label.clone().unwrap_or_else(|| card.availability_label.to_string())}
            </p>
            {card.experience.clone().map(|exp| view! {
                <p class="text-xs text-slate-400">{exp}</p>
            })}
        </div>
        <div class="pr-3">
            <FavoriteButton profile_id=card.id.clone() size="w-8 h-8" />
        </div>
    }
}

fn gallery_body(card: CardModel) -> impl IntoView {
    view! {
        <Photo card=card.clone() height="h-72" />
        <div class="absolute top-3 right-3">
            <FavoriteButton profile_id=card.id.clone() />
        </div>
        <div class="absolute inset-x-0 bottom-0 bg-gradient-to-t from-black/70 to-transparent p-4 text-white">
            <h3 class="font-semibold text-lg">{card.title()}</h3>
            <p class="text-sm opacity-80">
                {format!("{} · {}", card.country, card.availability_label)}
            </p>
            {(!card.skills.is_empty()).then(|| view! {
                <p class="text-xs opacity-80 mt-1">{card.skills.join(" · ")}</p>
            })}
        </div>
    }
}
