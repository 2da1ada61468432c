//! Home Page
//!
//! Hero, services teaser and customer reviews. First-time visitors also get
//! the welcome modal.

use leptos::*;
use leptos_router::*;

use crate::components::{Reviews, WelcomeModal};
use crate::pages::services::SERVICES;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="space-y-16">
            <section class="rounded-3xl bg-gradient-to-br from-teal-600 to-teal-800 text-white px-8 py-16 text-center">
                <h1 class="text-4xl md:text-5xl font-bold">"Find the right helper for your family"</h1>
                <p class="mt-4 text-lg text-teal-100 max-w-2xl mx-auto">
                    "Screened, experienced domestic helpers, matched to your household by people who care."
                </p>
                <div class="mt-8 flex justify-center space-x-4">
                    <A href="/maids" class="px-6 py-3 rounded-lg bg-white text-teal-700 font-semibold hover:bg-teal-50">
                        "Browse helpers"
                    </A>
                    <A href="/contact" class="px-6 py-3 rounded-lg border border-white hover:bg-white/10">
                        "Contact us"
                    </A>
                </div>
            </section>

            <section>
                <h2 class="text-3xl font-bold text-center text-slate-800 mb-8">"How we help"</h2>
                <div class="grid gap-6 md:grid-cols-4">
                    {SERVICES.iter().map(|service| view! {
                        <div class="bg-white rounded-xl shadow p-5 text-center">
                            <div class="text-4xl mb-2">{service.icon}</div>
                            <h3 class="font-semibold text-slate-800">{service.title}</h3>
                        </div>
                    }).collect_view()}
                </div>
                <div class="text-center mt-6">
                    <A href="/services" class="text-teal-700 hover:underline">"See all services"</A>
                </div>
            </section>

            <Reviews />

            <WelcomeModal />
        </div>
    }
}
