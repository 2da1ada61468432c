//! HelperHub Web
//!
//! The agency's public site and helper catalogue, rendered in the browser
//! with Leptos. Visitors browse services and FAQs; signed-in families filter
//! helper profiles, keep favorites and open full profiles; admins edit them.
//!
//! Every request carries the browser's session cookie. The backend URL
//! defaults to the agency API and can be overridden through localStorage
//! (see [`api::get_api_base`]).

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;
mod storage;

fn main() {
    console_error_panic_hook::set_once();

    web_sys::console::info_1(&format!("HelperHub using API at {}", api::get_api_base()).into());
    mount_to_body(app::App);
}
