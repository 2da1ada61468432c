//! Pages
//!
//! Top-level page components for each route.

pub mod about;
pub mod admin_edit;
pub mod catalogue;
pub mod contact;
pub mod faqs;
pub mod home;
pub mod login;
pub mod services;
pub mod showcase;

pub use about::About;
pub use admin_edit::AdminEdit;
pub use catalogue::Catalogue;
pub use contact::Contact;
pub use faqs::Faqs;
pub use home::Home;
pub use login::{AuthCallback, Login};
pub use services::Services;
pub use showcase::Showcase;
