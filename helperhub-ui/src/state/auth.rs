//! Authentication context
//!
//! Session state for the whole tree. The cookie itself is HttpOnly; the
//! browser only ever knows who is signed in by asking `auth/profile`.

use leptos::*;

use helperhub::api::dto::{LoginRequest, SignupRequest};
use helperhub::api::ApiResult;
use helperhub::models::SessionUser;
use helperhub::session::SessionState;

use crate::api;
use crate::storage;

#[derive(Clone, Copy)]
pub struct AuthState {
    pub session: RwSignal<SessionState>,
}

/// Provide the auth context and start the initial session check
pub fn provide_auth() -> AuthState {
    let auth = AuthState {
        session: create_rw_signal(SessionState::Unknown),
    };
    provide_context(auth);
    auth.initialize();
    auth
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.with(SessionState::is_authenticated)
    }

    pub fn is_loading(&self) -> bool {
        self.session
            .with(|s| matches!(s, SessionState::Unknown | SessionState::Loading))
    }

    pub fn is_admin(&self) -> bool {
        self.session.with(SessionState::is_admin)
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.session.with(|s| s.user().cloned())
    }

    /// Display fields from the last session, shown before the check returns
    pub fn cached_user(&self) -> Option<SessionUser> {
        storage::get_json(storage::CACHED_USER_KEY)
    }

    /// Ask the backend who is signed in
    pub fn initialize(&self) {
        let auth = *self;
        spawn_local(async move {
            auth.fetch_user_profile().await;
        });
    }

    pub async fn fetch_user_profile(&self) {
        self.session.set(SessionState::Loading);
        let result = api::fetch_profile().await;
        if let Err(err) = &result {
            if !err.is_unauthorized() {
                web_sys::console::warn_1(&format!("Session check failed: {}", err).into());
            }
        }
        self.apply(SessionState::after_sign_in(result.as_ref()));
    }

    pub async fn login(&self, request: &LoginRequest) -> ApiResult<SessionUser> {
        self.settle_sign_in(api::login(request).await)
    }

    pub async fn signup(&self, request: &SignupRequest) -> ApiResult<SessionUser> {
        self.settle_sign_in(api::signup(request).await)
    }

    pub async fn simple_callback(&self, token: &str) -> ApiResult<SessionUser> {
        self.settle_sign_in(api::simple_callback(token).await)
    }

    /// Local sign-out happens even when the request fails
    pub async fn logout(&self) {
        if let Err(err) = api::logout().await {
            web_sys::console::warn_1(&format!("Logout request failed: {}", err).into());
        }
        self.apply(SessionState::Anonymous);
    }

    /// Drop the session after the server rejected the cookie
    pub fn invalidate(&self) {
        if self.session.with_untracked(|s| *s != SessionState::Anonymous) {
            self.apply(SessionState::Anonymous);
        }
    }

    /// Pass a result through, invalidating the session on a 401
    pub fn guard<T>(&self, result: ApiResult<T>) -> ApiResult<T> {
        if let Err(err) = &result {
            if let Some(next) = self.session.with_untracked(|s| s.after_failure(err)) {
                self.apply(next);
            }
        }
        result
    }

    fn settle_sign_in(&self, result: ApiResult<SessionUser>) -> ApiResult<SessionUser> {
        self.apply(SessionState::after_sign_in(result.as_ref()));
        result
    }

    fn apply(&self, next: SessionState) {
        match next.user() {
            Some(user) => storage::set_json(storage::CACHED_USER_KEY, user),
            None => storage::remove(storage::CACHED_USER_KEY),
        }
        self.session.set(next);
    }
}
