//! Login and Signup Page
//!
//! Also hosts the redirect target for one-click sign-in links.

use leptos::*;
use leptos_router::*;

use helperhub::forms::{FormErrors, LoginForm, SignupForm};

use crate::components::{Loading, TextField};
use crate::state::{AuthState, GlobalState};

#[derive(Clone, Copy, PartialEq)]
enum Mode {
    Login,
    Signup,
}

#[component]
pub fn Login() -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");
    let (mode, set_mode) = create_signal(Mode::Login);

    // Already signed in: go straight to the catalogue
    let navigate = use_navigate();
    create_effect(move |_| {
        if auth.is_authenticated() {
            navigate("/maids", Default::default());
        }
    });

    let tab = move |target: Mode, label: &'static str| {
        view! {
            <button
                class=move || format!(
                    "flex-1 py-2 font-medium border-b-2 {}",
                    if mode.get() == target { "border-teal-600 text-teal-700" } else { "border-transparent text-slate-500" }
                )
                on:click=move |_| set_mode.set(target)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="max-w-md mx-auto bg-white rounded-2xl shadow p-8 space-y-6">
            <div class="flex">
                {tab(Mode::Login, "Sign in")}
                {tab(Mode::Signup, "Create account")}
            </div>
            {move || match mode.get() {
                Mode::Login => view! { <LoginFormView /> }.into_view(),
                Mode::Signup => view! { <SignupFormView /> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn LoginFormView() -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let errors = create_rw_signal(FormErrors::new());
    let (busy, set_busy) = create_signal(false);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let form = LoginForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let request = match form.validate() {
            Ok(request) => request,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FormErrors::new());
        set_busy.set(true);

        spawn_local(async move {
            match auth.login(&request).await {
                Ok(user) => state.show_success(&format!("Welcome back, {}", user.display_name())),
                Err(e) => state.show_error(&e.user_message()),
            }
            set_busy.set(false);
        });
    };

    view! {
        <form class="space-y-4" on:submit=submit>
            <TextField label="Email" name="email" kind="email" value=email errors=errors />
            <TextField label="Password" name="password" kind="password" value=password errors=errors />
            <SubmitButton busy=busy label="Sign in" />
        </form>
    }
}

#[component]
fn SignupFormView() -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let confirm = create_rw_signal(String::new());
    let errors = create_rw_signal(FormErrors::new());
    let (busy, set_busy) = create_signal(false);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let form = SignupForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm.get_untracked(),
        };
        let request = match form.validate() {
            Ok(request) => request,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FormErrors::new());
        set_busy.set(true);

        spawn_local(async move {
            match auth.signup(&request).await {
                Ok(_) => state.show_success("Account created"),
                Err(e) => state.show_error(&e.user_message()),
            }
            set_busy.set(false);
        });
    };

    view! {
        <form class="space-y-4" on:submit=submit>
            <TextField label="Name" name="name" value=name errors=errors />
            <TextField label="Email" name="email" kind="email" value=email errors=errors />
            <TextField label="Password" name="password" kind="password" value=password errors=errors />
            <TextField
                label="Confirm password"
                name="confirm_password"
                kind="password"
                value=confirm
                errors=errors
            />
            <SubmitButton busy=busy label="Create account" />
        </form>
    }
}

#[component]
fn SubmitButton(busy: ReadSignal<bool>, label: &'static str) -> impl IntoView {
    view! {
        <button
            type="submit"
            class="w-full py-3 rounded-lg bg-teal-600 text-white font-medium hover:bg-teal-700 disabled:opacity-60"
            disabled=move || busy.get()
        >
            {move || if busy.get() { "Please wait..." } else { label }}
        </button>
    }
}

/// `/auth/callback?token=...`
#[component]
pub fn AuthCallback() -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let query = use_query_map();
    let navigate = use_navigate();

    let token = query.with_untracked(|q| q.get("token").cloned());

    spawn_local(async move {
        let target = match token {
            Some(token) if !token.is_empty() => match auth.simple_callback(&token).await {
                Ok(_) => "/maids",
                Err(e) => {
                    state.show_error(&e.user_message());
                    "/login"
                }
            },
            _ => {
                state.show_error("Sign-in link is missing its token");
                "/login"
            }
        };
        navigate(target, Default::default());
    });

    view! {
        <div class="text-center py-16 space-y-4">
            <Loading />
            <p class="text-slate-500">"Signing you in..."</p>
        </div>
    }
}
