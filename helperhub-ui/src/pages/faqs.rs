//! FAQs Page
//!
//! Expandable question list; one answer open at a time.

use leptos::*;

static FAQS: [(&str, &str); 6] = [
    (
        "How long does it take to hire a helper?",
        "A transfer helper can usually start within two weeks. A new helper from overseas \
         takes four to eight weeks including the work permit.",
    ),
    (
        "Why do I need an account to save favorites?",
        "Favorites are stored with your account so your consultant can see your shortlist.",
    ),
    (
        "What is the loan shown on a profile?",
        "Some helpers repay placement costs over their first months of salary. The amount \
         outstanding is shown so there are no surprises.",
    ),
    (
        "Can I interview a helper before deciding?",
        "Yes. We arrange video or in-person interviews for every shortlisted helper.",
    ),
    (
        "What if the placement does not work out?",
        "We offer a free replacement within the guarantee period stated in your contract.",
    ),
    (
        "Which documents do I need?",
        "Your identity document, proof of address and income documents. Our consultant \
         will send you a checklist.",
    ),
];

#[component]
pub fn Faqs() -> impl IntoView {
    let (open, set_open) = create_signal(None::<usize>);

    view! {
        <div class="max-w-3xl mx-auto space-y-6">
            <h1 class="text-4xl font-bold text-slate-800">"Frequently Asked Questions"</h1>
            <div class="space-y-3">
                {FAQS.iter().copied().enumerate().map(|(index, (question, answer))| {
                    let toggle = move |_| {
                        set_open.update(|current| {
                            *current = if *current == Some(index) { None } else { Some(index) };
                        })
                    };
                    view! {
                        <div class="bg-white rounded-xl shadow">
                            <button
                                class="w-full text-left px-5 py-4 flex justify-between items-center font-medium"
                                on:click=toggle
                            >
                                <span>{question}</span>
                                <span class="text-teal-600">
                                    {move || if open.get() == Some(index) { "−" } else { "+" }}
                                </span>
                            </button>
                            {move || (open.get() == Some(index)).then(|| view! {
                                <p class="px-5 pb-4 text-slate-600">{answer}</p>
                            })}
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
