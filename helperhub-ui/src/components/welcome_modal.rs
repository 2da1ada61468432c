//! Welcome Modal
//!
//! Shown once per browser on the first visit to the home page.

use leptos::*;

use crate::storage;

#[component]
pub fn WelcomeModal() -> impl IntoView {
    let (open, set_open) = create_signal(storage::get(storage::WELCOME_SEEN_KEY).is_none());

    let dismiss = move |_| {
        storage::set(storage::WELCOME_SEEN_KEY, "true");
        set_open.set(false);
    };

    view! {
        {move || open.get().then(|| view! {
            <div class="fixed inset-0 z-50 bg-black/50 flex items-center justify-center p-4">
                <div class="bg-white rounded-2xl shadow-xl max-w-md w-full p-8 text-center space-y-4">
                    <h2 class="text-2xl font-bold text-teal-700">"Welcome to HelperHub"</h2>
                    <p class="text-slate-600">
                        "Browse verified helper profiles, shortlist your favorites and let our \
                         consultants handle the paperwork."
                    </p>
                    <div class="flex justify-center space-x-3">
                        <a
                            href="/maids"
                            class="px-5 py-2 rounded-lg bg-teal-600 text-white hover:bg-teal-700"
                            on:click=dismiss
                        >
                            "Find a helper"
                        </a>
                        <button
                            class="px-5 py-2 rounded-lg border border-slate-300 hover:bg-slate-100"
                            on:click=dismiss
                        >
                            "Look around"
                        </button>
                    </div>
                </div>
            </div>
        })}
    }
}
