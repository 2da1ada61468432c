//! Agency REST API
//!
//! Client side of the agency backend. Every call goes out with the session
//! cookie unless a detail fetch explicitly asks for an anonymous request.
//!
//! # Endpoints
//!
//! ## Auth
//! - `POST auth/login`, `POST auth/signup`, `POST auth/logout`
//! - `GET auth/profile` - current session
//! - `GET auth/simple-callback?token=` - finish a redirect sign-in
//!
//! ## Catalogue
//! - `GET maids`, `POST maids`
//! - `GET maids/:id`, `PUT maids/:id`
//! - `POST user-favorites/:id`, `DELETE user-favorites/:id`
//!
//! ## User
//! - `GET user/favorites`
//!
//! ## Site
//! - `POST contact`

pub mod dto;
pub mod endpoints;
pub mod error;

#[cfg(feature = "client")]
mod client;
#[cfg(all(test, feature = "client"))]
pub(crate) mod mock;

pub use endpoints::{join_url, Endpoints};
pub use error::{ApiError, ApiResult, ErrorBody};

#[cfg(feature = "client")]
pub use client::{HttpAgencyApi, HttpApiConfig};

#[cfg(feature = "client")]
use crate::{
    detail::Credentials,
    forms::{ContactMessage, ProfilePayload},
    models::{HelperProfile, ProfileId, SessionUser},
};

/// Operations the application needs from the agency backend
#[cfg(feature = "client")]
#[async_trait::async_trait]
pub trait AgencyApi: Send + Sync {
    async fn login(&self, request: &dto::LoginRequest) -> ApiResult<SessionUser>;

    async fn signup(&self, request: &dto::SignupRequest) -> ApiResult<SessionUser>;

    async fn logout(&self) -> ApiResult<()>;

    /// Current session user; `Unauthorized` when signed out
    async fn fetch_profile(&self) -> ApiResult<SessionUser>;

    async fn simple_callback(&self, token: &str) -> ApiResult<SessionUser>;

    async fn list_maids(&self) -> ApiResult<Vec<HelperProfile>>;

    async fn get_maid(&self, id: &str, credentials: Credentials) -> ApiResult<HelperProfile>;

    async fn add_favorite(&self, id: &str) -> ApiResult<()>;

    async fn remove_favorite(&self, id: &str) -> ApiResult<()>;

    async fn list_favorites(&self) -> ApiResult<Vec<ProfileId>>;

    async fn create_maid(&self, payload: &ProfilePayload) -> ApiResult<HelperProfile>;

    async fn update_maid(&self, id: &str, payload: &ProfilePayload) -> ApiResult<HelperProfile>;

    async fn submit_contact(&self, message: &ContactMessage) -> ApiResult<()>;
}
