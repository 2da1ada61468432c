//! Toast
//!
//! One notice at a time in the bottom corner: confirmations for saved
//! profiles, sent enquiries and sign-in, failures for rejected requests.

use leptos::*;

use crate::state::{GlobalState, Notice, NoticeKind};

#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed bottom-6 right-4 z-50" role="status" aria-live="polite">
            {move || state.notice.get().map(|notice| view! { <NoticeCard notice=notice /> })}
        </div>
    }
}

#[component]
fn NoticeCard(notice: Notice) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let id = notice.id;

    let (icon, colours) = match notice.kind {
        NoticeKind::Confirmation => ("✓", "bg-teal-600"),
        NoticeKind::Failure => ("!", "bg-rose-600"),
    };

    view! {
        <div class=format!(
            "flex items-center space-x-3 {} text-white pl-4 pr-2 py-3 rounded-lg shadow-lg max-w-sm",
            colours
        )>
            <span class="w-6 h-6 flex items-center justify-center rounded-full bg-white/20 font-bold">
                {icon}
            </span>
            <span class="text-sm font-medium flex-1">{notice.message}</span>
            <button
                class="px-2 text-white/80 hover:text-white"
                aria-label="Dismiss"
                on:click=move |_| state.dismiss(id)
            >
                "×"
            </button>
        </div>
    }
}
