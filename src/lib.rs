//! # HelperHub
//!
//! Client library for a domestic-helper placement agency: the profile
//! catalogue, favorites, sign-in session and the forms that feed the agency
//! backend.
//!
//! ## Modules
//!
//! - [`models`]: Helper profiles and session users as the backend sends them
//! - [`helpers`]: Age, image URL and flag lookups used by every view
//! - [`favorites`]: Optimistic favorite toggle with rollback
//! - [`session`]: Authentication context
//! - [`detail`]: Detail popup fetch with one anonymous retry
//! - [`catalogue`] and [`cards`]: Filtering and card view models
//! - [`forms`]: Login, signup, contact and admin profile forms
//! - [`api`]: REST client for the agency backend
//!
//! Everything except the HTTP client, the local store, configuration and
//! logging is plain data and compiles for the browser with default features
//! off.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use helperhub::api::{AgencyApi, HttpAgencyApi, HttpApiConfig};
//! use helperhub::favorites::{toggle, FavoriteToggle};
//! use helperhub::session::AuthContext;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = Arc::new(HttpAgencyApi::new(HttpApiConfig::default())?);
//!     let auth = AuthContext::new(api.clone());
//!
//!     auth.login("kim@example.com", "secret").await?;
//!
//!     let maids = api.list_maids().await?;
//!     if let Some(first) = maids.first() {
//!         let mut state = FavoriteToggle::new(first.id.clone(), false);
//!         let outcome = toggle(&mut state, &auth, api.as_ref()).await;
//!         println!("{:?}", outcome);
//!     }
//!     Ok(())
//! }
//! ```

pub mod cards;
pub mod catalogue;
pub mod detail;
pub mod favorites;
pub mod forms;
pub mod helpers;
pub mod models;
pub mod reviews;
pub mod session;
pub mod store;

pub mod api;

#[cfg(feature = "client")]
pub mod config;
#[cfg(feature = "client")]
pub mod logging;

// Re-export top-level types for convenience
pub use models::{
    Availability, EmploymentRecord, HelperProfile, ProfileId, Role, SessionUser, UserPatch,
};

pub use cards::{CardModel, CardVariant};
pub use catalogue::{facets, CatalogueFilter, Facets, SortOrder};
pub use detail::{Credentials, DetailAttempt, DetailSource, DetailView};
pub use favorites::{FavoriteAction, FavoriteRequest, FavoriteToggle, ToggleOutcome, ToggleStart};
pub use forms::{ContactForm, FormErrors, LoginForm, ProfileDraft, SignupForm};
pub use reviews::{Review, ReviewSummary};
pub use session::SessionState;

pub use api::{ApiError, ApiResult, Endpoints};

#[cfg(feature = "client")]
pub use api::{AgencyApi, HttpAgencyApi, HttpApiConfig};

#[cfg(feature = "client")]
pub use session::AuthContext;

#[cfg(feature = "client")]
pub use config::{Config, ConfigError, LoggingConfig};

#[cfg(feature = "client")]
pub use store::{LocalStore, Preferences, StoreError};
