//! About Page

use leptos::*;

#[component]
pub fn About() -> impl IntoView {
    let values = [
        ("Screened", "Every helper is interviewed and reference-checked before her profile goes live."),
        ("Transparent", "Salaries, loans and fees are shown up front on every profile."),
        ("Supported", "Our consultants stay in touch with employer and helper after placement."),
    ];

    view! {
        <div class="max-w-3xl mx-auto space-y-10">
            <div>
                <h1 class="text-4xl font-bold text-slate-800">"About HelperHub"</h1>
                <p class="text-slate-600 mt-4 leading-relaxed">
                    "HelperHub is a licensed employment agency placing domestic helpers with \
                     families. We started with a simple idea: choosing someone to live in your \
                     home should be an informed decision, not a gamble."
                </p>
            </div>

            <div class="grid gap-6 md:grid-cols-3">
                {values.into_iter().map(|(title, text)| view! {
                    <div class="bg-white rounded-xl shadow p-5">
                        <h2 class="font-semibold text-teal-700">{title}</h2>
                        <p class="text-sm text-slate-600 mt-2">{text}</p>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}
