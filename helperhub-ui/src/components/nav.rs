//! Navigation Component
//!
//! Header navigation bar with logo, links and the session control.

use leptos::*;
use leptos_router::*;

use crate::state::{AuthState, GlobalState};

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let logout = move |_| {
        spawn_local(async move {
            auth.logout().await;
            state.favorites.set(Default::default());
            state.show_success("Signed out");
        });
    };

    view! {
        <nav class="bg-white border-b border-slate-200 sticky top-0 z-40">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <A href="/" class="flex items-center space-x-2">
                        <span class="text-2xl">"🏠"</span>
                        <span class="text-xl font-bold text-teal-700">"HelperHub"</span>
                    </A>

                    <div class="hidden md:flex items-center space-x-1">
                        <NavLink href="/maids" label="Find a Helper" />
                        <NavLink href="/services" label="Services" />
                        <NavLink href="/about" label="About" />
                        <NavLink href="/faqs" label="FAQs" />
                        <NavLink href="/contact" label="Contact" />
                        {move || auth.is_admin().then(|| view! {
                            <NavLink href="/admin/maids/new" label="Add Profile" />
                        })}
                    </div>

                    <div class="flex items-center space-x-3 text-sm">
                        {move || {
                            if auth.is_loading() {
                                let name = auth.cached_user().map(|u| u.display_name().to_string());
                                view! {
                                    <span class="text-slate-400">{name.unwrap_or_default()}</span>
                                }.into_view()
                            } else if let Some(user) = auth.user() {
                                view! {
                                    <span class="text-slate-600">{user.display_name().to_string()}</span>
                                    <button
                                        class="px-3 py-2 rounded-lg border border-slate-300 hover:bg-slate-100"
                                        on:click=logout
                                    >
                                        "Sign out"
                                    </button>
                                }.into_view()
                            } else {
                                view! {
                                    <A
                                        href="/login"
                                        class="px-4 py-2 rounded-lg bg-teal-600 text-white hover:bg-teal-700"
                                    >
                                        "Sign in"
                                    </A>
                                }.into_view()
                            }
                        }}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-3 py-2 rounded-lg text-slate-600 hover:text-teal-700 hover:bg-teal-50 transition-colors"
            active_class="text-teal-700 bg-teal-50"
        >
            {label}
        </A>
    }
}
