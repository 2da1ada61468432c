//! Contact Page

use leptos::*;

use helperhub::forms::{ContactForm, FormErrors};

use crate::api;
use crate::components::TextField;
use crate::state::GlobalState;

#[component]
pub fn Contact() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let phone = create_rw_signal(String::new());
    let message = create_rw_signal(String::new());
    let errors = create_rw_signal(FormErrors::new());
    let (sending, set_sending) = create_signal(false);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }

        let form = ContactForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            message: message.get_untracked(),
        };
        let body = match form.validate() {
            Ok(body) => body,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FormErrors::new());
        set_sending.set(true);

        spawn_local(async move {
            match api::submit_contact(&body).await {
                Ok(()) => {
                    state.show_success("Thanks! We'll get back to you within one working day.");
                    name.set(String::new());
                    email.set(String::new());
                    phone.set(String::new());
                    message.set(String::new());
                }
                Err(e) => state.show_error(&e.user_message()),
            }
            set_sending.set(false);
        });
    };

    view! {
        <div class="max-w-2xl mx-auto space-y-6">
            <div>
                <h1 class="text-4xl font-bold text-slate-800">"Contact Us"</h1>
                <p class="text-slate-500 mt-2">
                    "Tell us about your household and we'll suggest suitable helpers."
                </p>
            </div>

            <form class="bg-white rounded-xl shadow p-6 space-y-4" on:submit=submit>
                <TextField label="Name" name="name" value=name errors=errors />
                <TextField label="Email" name="email" kind="email" value=email errors=errors />
                <TextField label="Phone (optional)" name="phone" kind="tel" value=phone errors=errors />
                <TextField label="Message" name="message" multiline=true value=message errors=errors />
                <button
                    type="submit"
                    class="w-full py-3 rounded-lg bg-teal-600 text-white font-medium hover:bg-teal-700 disabled:opacity-60"
                    disabled=move || sending.get()
                >
                    {move || if sending.get() { "Sending..." } else { "Send message" }}
                </button>
            </form>
        </div>
    }
}
