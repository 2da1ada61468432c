//! Form inputs with inline validation messages

use leptos::*;

use helperhub::forms::FormErrors;

/// Labelled text input bound to a string signal
#[component]
pub fn TextField(
    label: &'static str,
    /// Key used for this field's message in [`FormErrors`]
    name: &'static str,
    value: RwSignal<String>,
    errors: RwSignal<FormErrors>,
    #[prop(default = "text")]
    kind: &'static str,
    #[prop(default = false)]
    multiline: bool,
    #[prop(optional)]
    placeholder: &'static str,
) -> impl IntoView {
    let message = move || errors.with(|e| e.get(name).map(str::to_string));
    let border = move || {
        if message().is_some() {
            "border-rose-400 focus:ring-rose-300"
        } else {
            "border-slate-300 focus:ring-teal-300"
        }
    };

    let input = if multiline {
        view! {
            <textarea
                name=name
                rows="5"
                placeholder=placeholder
                class=move || format!("w-full rounded-lg border px-3 py-2 focus:outline-none focus:ring {}", border())
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
        .into_view()
    } else {
        view! {
            <input
                type=kind
                name=name
                placeholder=placeholder
                class=move || format!("w-full rounded-lg border px-3 py-2 focus:outline-none focus:ring {}", border())
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
        .into_view()
    };

    view! {
        <label class="block space-y-1">
            <span class="text-sm font-medium text-slate-700">{label}</span>
            {input}
            {move || message().map(|m| view! { <span class="text-xs text-rose-600">{m}</span> })}
        </label>
    }
}

/// Checkbox bound to a bool signal
#[component]
pub fn CheckField(label: &'static str, value: RwSignal<bool>) -> impl IntoView {
    view! {
        <label class="flex items-center space-x-2 text-sm text-slate-700">
            <input
                type="checkbox"
                prop:checked=move || value.get()
                on:change=move |ev| value.set(event_target_checked(&ev))
            />
            <span>{label}</span>
        </label>
    }
}
