//! Login Prompt
//!
//! Modal shown when a signed-out visitor tries something that needs an
//! account, or when the server rejects the session mid-action.

use leptos::*;

use crate::state::GlobalState;

#[component]
pub fn LoginPrompt() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let close = move |_| state.login_prompt.set(false);

    view! {
        {move || state.login_prompt.get().then(|| view! {
            <div class="fixed inset-0 z-50 bg-black/50 flex items-center justify-center p-4" on:click=close>
                <div
                    class="bg-white rounded-2xl shadow-xl max-w-sm w-full p-6 text-center space-y-4"
                    on:click=|ev| ev.stop_propagation()
                >
                    <div class="text-4xl">"♥"</div>
                    <h2 class="text-xl font-semibold text-slate-800">"Sign in to save favorites"</h2>
                    <p class="text-sm text-slate-500">
                        "Create a free account to shortlist helpers and see their full profiles."
                    </p>
                    <div class="flex justify-center space-x-3">
                        <a
                            href="/login"
                            class="px-4 py-2 rounded-lg bg-teal-600 text-white hover:bg-teal-700"
                            on:click=close
                        >
                            "Sign in"
                        </a>
                        <button
                            class="px-4 py-2 rounded-lg border border-slate-300 hover:bg-slate-100"
                            on:click=close
                        >
                            "Not now"
                        </button>
                    </div>
                </div>
            </div>
        })}
    }
}
