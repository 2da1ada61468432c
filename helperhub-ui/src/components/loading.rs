//! Loading Component
//!
//! Loading spinners and skeleton states.

use leptos::*;

/// Full-width loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

/// Skeleton for one profile card
#[component]
pub fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow p-4 animate-pulse">
            <div class="h-40 bg-slate-200 rounded-lg mb-4" />
            <div class="h-5 bg-slate-200 rounded w-2/3 mb-2" />
            <div class="h-4 bg-slate-200 rounded w-1/3 mb-4" />
            <div class="flex space-x-2">
                <div class="h-6 bg-slate-200 rounded-full w-16" />
                <div class="h-6 bg-slate-200 rounded-full w-20" />
            </div>
        </div>
    }
}

/// Grid of card skeletons while the catalogue loads
#[component]
pub fn CardGridSkeleton(
    #[prop(default = 6)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
            {(0..count).map(|_| view! { <CardSkeleton /> }).collect_view()}
        </div>
    }
}
