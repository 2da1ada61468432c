//! In-memory [`AgencyApi`] for tests

use std::collections::VecDeque;
use std::sync::Mutex;

use super::dto::{LoginRequest, SignupRequest};
use super::{AgencyApi, ApiError, ApiResult};
use crate::detail::Credentials;
use crate::forms::{ContactMessage, ProfilePayload};
use crate::models::{HelperProfile, ProfileId, SessionUser};

/// Records every call; answers come from the fields set up by the test
pub struct MockAgencyApi {
    pub user: Mutex<Option<SessionUser>>,
    pub maids: Mutex<Vec<HelperProfile>>,
    pub favorites: Mutex<Vec<ProfileId>>,
    /// Queued answers for `get_maid`, falling back to a lookup in `maids`
    pub detail_results: Mutex<VecDeque<ApiResult<HelperProfile>>>,
    /// Queued answers for favorite add/remove, `Ok` once empty
    pub favorite_results: Mutex<VecDeque<ApiResult<()>>>,
    pub logout_error: Mutex<Option<ApiError>>,
    pub calls: Mutex<Vec<String>>,
}

impl MockAgencyApi {
    pub fn new() -> Self {
        Self {
            user: Mutex::new(None),
            maids: Mutex::new(Vec::new()),
            favorites: Mutex::new(Vec::new()),
            detail_results: Mutex::new(VecDeque::new()),
            favorite_results: Mutex::new(VecDeque::new()),
            logout_error: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_user(self, user: SessionUser) -> Self {
        *self.user.lock().unwrap() = Some(user);
        self
    }

    pub fn with_maids(self, maids: Vec<HelperProfile>) -> Self {
        *self.maids.lock().unwrap() = maids;
        self
    }

    pub fn push_favorite_result(&self, result: ApiResult<()>) {
        self.favorite_results.lock().unwrap().push_back(result);
    }

    pub fn push_detail_result(&self, result: ApiResult<HelperProfile>) {
        self.detail_results.lock().unwrap().push_back(result);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    fn current_user(&self) -> ApiResult<SessionUser> {
        self.user.lock().unwrap().clone().ok_or(ApiError::Unauthorized)
    }

    fn next_favorite_result(&self) -> ApiResult<()> {
        self.favorite_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()))
    }
}

#[async_trait::async_trait]
impl AgencyApi for MockAgencyApi {
    async fn login(&self, request: &LoginRequest) -> ApiResult<SessionUser> {
        self.record(format!("login {}", request.email));
        self.current_user()
    }

    async fn signup(&self, request: &SignupRequest) -> ApiResult<SessionUser> {
        self.record(format!("signup {}", request.email));
        self.current_user()
    }

    async fn logout(&self) -> ApiResult<()> {
        self.record("logout");
        match self.logout_error.lock().unwrap().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn fetch_profile(&self) -> ApiResult<SessionUser> {
        self.record("profile");
        self.current_user()
    }

    async fn simple_callback(&self, token: &str) -> ApiResult<SessionUser> {
        self.record(format!("callback {}", token));
        self.current_user()
    }

    async fn list_maids(&self) -> ApiResult<Vec<HelperProfile>> {
        self.record("list");
        Ok(self.maids.lock().unwrap().clone())
    }

    async fn get_maid(&self, id: &str, credentials: Credentials) -> ApiResult<HelperProfile> {
        self.record(format!("get {} {:?}", id, credentials));
        if let Some(result) = self.detail_results.lock().unwrap().pop_front() {
            return result;
        }
        self.maids
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("Maid {} not found", id)))
    }

    async fn add_favorite(&self, id: &str) -> ApiResult<()> {
        self.record(format!("favorite {}", id));
        self.next_favorite_result()
    }

    async fn remove_favorite(&self, id: &str) -> ApiResult<()> {
        self.record(format!("unfavorite {}", id));
        self.next_favorite_result()
    }

    async fn list_favorites(&self) -> ApiResult<Vec<ProfileId>> {
        self.record("favorites");
        self.current_user()?;
        Ok(self.favorites.lock().unwrap().clone())
    }

    async fn create_maid(&self, payload: &ProfilePayload) -> ApiResult<HelperProfile> {
        self.record(format!("create {}", payload.name));
        Ok(HelperProfile::new("new", payload.name.clone()))
    }

    async fn update_maid(&self, id: &str, payload: &ProfilePayload) -> ApiResult<HelperProfile> {
        self.record(format!("update {}", id));
        Ok(HelperProfile::new(id, payload.name.clone()))
    }

    async fn submit_contact(&self, message: &ContactMessage) -> ApiResult<()> {
        self.record(format!("contact {}", message.email));
        Ok(())
    }
}
