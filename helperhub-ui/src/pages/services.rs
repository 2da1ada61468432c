//! Services Page

use leptos::*;
use leptos_router::*;

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
}

pub const SERVICES: [Service; 4] = [
    Service {
        icon: "🧹",
        title: "Helper Placement",
        summary: "Shortlist from screened profiles and interview candidates online or in person.",
    },
    Service {
        icon: "📄",
        title: "Work Permit Processing",
        summary: "We prepare and submit the application, medical checks and insurance for you.",
    },
    Service {
        icon: "🔁",
        title: "Transfers",
        summary: "Helpers already in the country who can start quickly after a transfer.",
    },
    Service {
        icon: "🎓",
        title: "Training & Support",
        summary: "Orientation for new helpers and follow-up support for the first months.",
    },
];

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <div class="space-y-10">
            <div class="text-center max-w-2xl mx-auto">
                <h1 class="text-4xl font-bold text-slate-800">"Our Services"</h1>
                <p class="text-slate-500 mt-3">
                    "From the first shortlist to the helper's first day, we take care of every step."
                </p>
            </div>

            <div class="grid gap-6 md:grid-cols-2">
                {SERVICES.iter().map(|service| view! {
                    <div class="bg-white rounded-xl shadow p-6 flex space-x-4">
                        <div class="text-4xl">{service.icon}</div>
                        <div>
                            <h2 class="text-xl font-semibold text-slate-800">{service.title}</h2>
                            <p class="text-slate-600 mt-1">{service.summary}</p>
                        </div>
                    </div>
                }).collect_view()}
            </div>

            <div class="text-center">
                <A href="/contact" class="px-6 py-3 rounded-lg bg-teal-600 text-white hover:bg-teal-700">
                    "Talk to a consultant"
                </A>
            </div>
        </div>
    }
}
