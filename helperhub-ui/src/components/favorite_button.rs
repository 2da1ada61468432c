//! Favorite Button
//!
//! Heart toggle carried by every card layout and the detail popup. The
//! click flips the heart at once; a failed request flips it back.

use leptos::*;

use helperhub::api::ApiError;
use helperhub::favorites::{
    FavoriteAction, FavoriteToggle, ToggleFeedback, ToggleOutcome, ToggleStart,
};

use crate::api;
use crate::state::{AuthState, GlobalState};

#[component]
pub fn FavoriteButton(
    #[prop(into)]
    profile_id: String,
    #[prop(default = "w-9 h-9")]
    size: &'static str,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let auth = use_context::<AuthState>().expect("AuthState not found");

    let toggle = create_rw_signal(FavoriteToggle::new(
        profile_id.clone(),
        state.is_favorite(&profile_id),
    ));

    // Follow server truth when the favorites list reloads
    let id_for_sync = profile_id.clone();
    create_effect(move |_| {
        let favorited = state.favorites.with(|f| f.contains(&id_for_sync));
        toggle.update(|t| t.sync(favorited));
    });

    let on_click = move |ev: ev::MouseEvent| {
        ev.stop_propagation();

        let start = toggle
            .try_update(|t| t.begin(auth.is_authenticated()))
            .unwrap_or(ToggleStart::Busy);

        let request = match start {
            ToggleStart::LoginRequired => {
                state.prompt_login();
                return;
            }
            ToggleStart::Busy => return,
            ToggleStart::Send(request) => request,
        };

        spawn_local(async move {
            let result = match request.action {
                FavoriteAction::Add => api::add_favorite(&request.profile_id).await,
                FavoriteAction::Remove => api::remove_favorite(&request.profile_id).await,
            };

            let outcome = toggle.try_update(|t| t.settle(&request, result.as_ref().map(|_| ())));
            report(outcome, result.err(), &request.profile_id, state, auth);
        });
    };

    let label = move || {
        if toggle.with(FavoriteToggle::is_favorited) {
            "Remove from favorites"
        } else {
            "Add to favorites"
        }
    };

    view! {
        <button
            class=move || format!(
                "{} flex items-center justify-center rounded-full bg-white/90 shadow \
                 hover:scale-110 transition-transform {}",
                size,
                if toggle.with(FavoriteToggle::is_pending) { "opacity-60" } else { "" }
            )
            title=label
            aria-label=label
            aria-pressed=move || toggle.with(FavoriteToggle::is_favorited).to_string()
            on:click=on_click
        >
            {move || {
                if toggle.with(FavoriteToggle::is_favorited) {
                    view! { <span class="text-rose-500 text-lg">"♥"</span> }
                } else {
                    view! { <span class="text-slate-400 text-lg">"♡"</span> }
                }
            }}
        </button>
    }
}

/// Surface the settled outcome to the rest of the page
fn report(
    outcome: Option<ToggleOutcome>,
    error: Option<ApiError>,
    profile_id: &str,
    state: GlobalState,
    auth: AuthState,
) {
    let Some(outcome) = outcome else {
        // Card was unmounted before the server answered
        return;
    };

    match outcome.feedback(error.as_ref()) {
        ToggleFeedback::Record { favorited } => state.set_favorite(profile_id, favorited),
        ToggleFeedback::PromptLogin { invalidate } => {
            if invalidate {
                auth.invalidate();
            }
            state.prompt_login();
        }
        ToggleFeedback::Error(message) => {
            web_sys::console::error_1(&format!("Favorite update failed: {}", message).into());
            state.show_error(&message);
        }
        ToggleFeedback::Ignore => {}
    }
}
