//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod detail_popup;
pub mod favorite_button;
pub mod form_field;
pub mod loading;
pub mod login_prompt;
pub mod maid_card;
pub mod nav;
pub mod reviews;
pub mod toast;
pub mod welcome_modal;

pub use detail_popup::DetailPopup;
pub use favorite_button::FavoriteButton;
pub use form_field::{CheckField, TextField};
pub use loading::{CardGridSkeleton, Loading};
pub use login_prompt::LoginPrompt;
pub use maid_card::MaidCard;
pub use nav::Nav;
pub use reviews::Reviews;
pub use toast::Toast;
pub use welcome_modal::WelcomeModal;
