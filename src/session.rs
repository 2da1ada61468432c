//! Authentication context
//!
//! Single owner of "is there a valid session and who is the user". The
//! session itself is an HttpOnly cookie issued by the backend; nothing here
//! holds a token. Any component that sees a 401 calls
//! [`AuthContext::invalidate`] so every consumer observes the same state.

use serde::{Deserialize, Serialize};

use crate::api::ApiError;
use crate::models::SessionUser;

/// Where the session currently stands
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "status", content = "user", rename_all = "lowercase")]
pub enum SessionState {
    /// Nothing checked yet
    #[default]
    Unknown,
    /// A profile or login request is in flight
    Loading,
    Authenticated(SessionUser),
    Anonymous,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Unknown | SessionState::Loading)
    }

    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.user().map(SessionUser::is_admin).unwrap_or(false)
    }

    /// State once a login, signup, callback or profile check settled.
    /// Any failure leaves the visitor signed out.
    pub fn after_sign_in(result: Result<&SessionUser, &ApiError>) -> SessionState {
        match result {
            Ok(user) => SessionState::Authenticated(user.clone()),
            Err(_) => SessionState::Anonymous,
        }
    }

    /// State after some other request failed, or `None` if it stands.
    /// Only a 401 ends the session.
    pub fn after_failure(&self, err: &ApiError) -> Option<SessionState> {
        if err.is_unauthorized() && *self != SessionState::Anonymous {
            Some(SessionState::Anonymous)
        } else {
            None
        }
    }
}

#[cfg(feature = "client")]
pub use context::AuthContext;

#[cfg(feature = "client")]
mod context {
    use std::sync::Arc;
    use tokio::sync::RwLock;

    use super::SessionState;
    use crate::api::dto::{LoginRequest, SignupRequest};
    use crate::api::{AgencyApi, ApiResult};
    use crate::models::{SessionUser, UserPatch};
    use crate::store::{LocalStore, CACHED_USER_KEY};

    pub struct AuthContext {
        api: Arc<dyn AgencyApi>,
        state: RwLock<SessionState>,
        store: Option<Arc<LocalStore>>,
    }

    impl AuthContext {
        pub fn new(api: Arc<dyn AgencyApi>) -> Self {
            Self {
                api,
                state: RwLock::new(SessionState::Unknown),
                store: None,
            }
        }

        /// Persist the user's display fields between runs
        pub fn with_store(mut self, store: Arc<LocalStore>) -> Self {
            self.store = Some(store);
            self
        }

        pub fn api(&self) -> &Arc<dyn AgencyApi> {
            &self.api
        }

        pub async fn state(&self) -> SessionState {
            self.state.read().await.clone()
        }

        pub async fn is_authenticated(&self) -> bool {
            self.state.read().await.is_authenticated()
        }

        pub async fn current_user(&self) -> Option<SessionUser> {
            self.state.read().await.user().cloned()
        }

        /// Display fields from the previous run, if any
        pub fn cached_user(&self) -> Option<SessionUser> {
            let store = self.store.as_ref()?;
            match store.get_json(CACHED_USER_KEY) {
                Ok(user) => user,
                Err(e) => {
                    tracing::warn!(error = %e, "Discarding unreadable cached user");
                    None
                }
            }
        }

        /// Check the session once at startup
        pub async fn initialize(&self) -> SessionState {
            self.fetch_user_profile().await
        }

        /// Ask the backend who owns the session cookie. Any failure means
        /// signed out.
        pub async fn fetch_user_profile(&self) -> SessionState {
            self.set_state(SessionState::Loading).await;
            match self.api.fetch_profile().await {
                Ok(user) => self.authenticate(user).await,
                Err(e) => {
                    if !e.is_unauthorized() {
                        tracing::warn!(error = %e, "Profile check failed");
                    }
                    self.sign_out_locally().await;
                }
            }
            self.state().await
        }

        pub async fn login(&self, email: &str, password: &str) -> ApiResult<SessionUser> {
            let request = LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            };
            self.set_state(SessionState::Loading).await;
            let result = self.api.login(&request).await;
            self.complete_sign_in(result, "login").await
        }

        pub async fn signup(&self, name: &str, email: &str, password: &str) -> ApiResult<SessionUser> {
            let request = SignupRequest {
                name: name.to_string(),
                email: email.to_string(),
                password: password.to_string(),
            };
            self.set_state(SessionState::Loading).await;
            let result = self.api.signup(&request).await;
            self.complete_sign_in(result, "signup").await
        }

        /// Finish a redirect-based sign-in
        pub async fn simple_callback(&self, token: &str) -> ApiResult<SessionUser> {
            self.set_state(SessionState::Loading).await;
            let result = self.api.simple_callback(token).await;
            self.complete_sign_in(result, "callback").await
        }

        async fn complete_sign_in(
            &self,
            result: ApiResult<SessionUser>,
            method: &str,
        ) -> ApiResult<SessionUser> {
            match &result {
                Ok(user) => tracing::info!(user_id = %user.id, method, "Signed in"),
                Err(e) => tracing::warn!(error = %e, method, "Sign-in failed"),
            }
            let next = SessionState::after_sign_in(result.as_ref());
            self.cache_user(next.user());
            self.set_state(next).await;
            result
        }

        /// Best-effort server logout; local state is cleared regardless
        pub async fn logout(&self) {
            if let Err(e) = self.api.logout().await {
                tracing::warn!(error = %e, "Logout request failed");
            }
            self.sign_out_locally().await;
            tracing::info!("Signed out");
        }

        /// Merge edited display fields into the local user record
        pub async fn update_user(&self, patch: &UserPatch) -> Option<SessionUser> {
            let mut state = self.state.write().await;
            let SessionState::Authenticated(user) = &mut *state else {
                return None;
            };
            user.apply(patch);
            let user = user.clone();
            drop(state);
            self.cache_user(Some(&user));
            Some(user)
        }

        /// Drop the session after the backend answered 401
        pub async fn invalidate(&self) {
            if self.is_authenticated().await {
                tracing::info!("Session expired");
            }
            self.sign_out_locally().await;
        }

        /// Pass `result` through, invalidating the session on a 401
        pub async fn guard<T>(&self, result: ApiResult<T>) -> ApiResult<T> {
            if let Err(err) = &result {
                if self.state().await.after_failure(err).is_some() {
                    self.invalidate().await;
                }
            }
            result
        }

        async fn authenticate(&self, user: SessionUser) {
            self.cache_user(Some(&user));
            self.set_state(SessionState::Authenticated(user)).await;
        }

        async fn sign_out_locally(&self) {
            self.cache_user(None);
            self.set_state(SessionState::Anonymous).await;
        }

        async fn set_state(&self, next: SessionState) {
            *self.state.write().await = next;
        }

        fn cache_user(&self, user: Option<&SessionUser>) {
            let Some(store) = &self.store else {
                return;
            };
            let result = match user {
                Some(user) => store.set_json(CACHED_USER_KEY, user),
                None => store.remove(CACHED_USER_KEY).map(|_| ()),
            };
            if let Err(e) = result {
                tracing::warn!(error = %e, "Failed to update cached user");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn kim() -> SessionUser {
        SessionUser {
            id: "u1".into(),
            name: "Kim".into(),
            email: Some("kim@example.com".into()),
            role: Role::Admin,
        }
    }

    #[test]
    fn test_state_queries() {
        assert!(SessionState::Unknown.is_loading());
        assert!(!SessionState::Anonymous.is_authenticated());
        assert!(SessionState::Authenticated(kim()).is_admin());
        assert_eq!(SessionState::Anonymous.user(), None);
    }

    #[test]
    fn test_failed_sign_in_signs_out() {
        let signed_in = SessionState::after_sign_in(Ok(&kim()));
        assert_eq!(signed_in, SessionState::Authenticated(kim()));

        let rejected = SessionState::after_sign_in(Err(&ApiError::Unauthorized));
        assert_eq!(rejected, SessionState::Anonymous);

        let offline = SessionState::after_sign_in(Err(&ApiError::Network("offline".into())));
        assert_eq!(offline, SessionState::Anonymous);
    }

    #[test]
    fn test_only_401_ends_session() {
        let state = SessionState::Authenticated(kim());
        assert_eq!(state.after_failure(&ApiError::Unauthorized), Some(SessionState::Anonymous));
        assert_eq!(state.after_failure(&ApiError::Timeout), None);
        assert_eq!(state.after_failure(&ApiError::from_status(500, "boom")), None);
        assert_eq!(SessionState::Loading.after_failure(&ApiError::Unauthorized), Some(SessionState::Anonymous));
        assert_eq!(SessionState::Anonymous.after_failure(&ApiError::Unauthorized), None);
    }

    #[cfg(feature = "client")]
    mod context {
        use super::*;
        use crate::api::mock::MockAgencyApi;
        use crate::api::ApiError;
        use crate::models::UserPatch;
        use crate::store::{LocalStore, CACHED_USER_KEY};
        use std::sync::Arc;

        fn context(api: MockAgencyApi) -> (AuthContext, Arc<MockAgencyApi>, Arc<LocalStore>) {
            let api = Arc::new(api);
            let store = Arc::new(LocalStore::in_memory().unwrap());
            let auth = AuthContext::new(api.clone()).with_store(store.clone());
            (auth, api, store)
        }

        #[tokio::test]
        async fn test_initialize_signed_out() {
            let (auth, api, _) = context(MockAgencyApi::new());
            assert_eq!(auth.initialize().await, SessionState::Anonymous);
            assert_eq!(api.calls(), vec!["profile"]);
        }

        #[tokio::test]
        async fn test_initialize_signed_in_caches_user() {
            let (auth, _, store) = context(MockAgencyApi::new().with_user(kim()));
            assert_eq!(auth.initialize().await, SessionState::Authenticated(kim()));

            let cached: SessionUser = store.get_json(CACHED_USER_KEY).unwrap().unwrap();
            assert_eq!(cached.name, "Kim");
            assert_eq!(auth.cached_user(), Some(kim()));
        }

        #[tokio::test]
        async fn test_failed_login_returns_error() {
            let (auth, _, _) = context(MockAgencyApi::new());
            let err = auth.login("kim@example.com", "nope").await.unwrap_err();
            assert_eq!(err, ApiError::Unauthorized);
            assert_eq!(auth.state().await, SessionState::Anonymous);
        }

        #[tokio::test]
        async fn test_logout_clears_even_when_request_fails() {
            let (auth, api, store) = context(MockAgencyApi::new().with_user(kim()));
            auth.login("kim@example.com", "secret").await.unwrap();
            *api.logout_error.lock().unwrap() = Some(ApiError::Network("offline".into()));

            auth.logout().await;
            assert_eq!(auth.state().await, SessionState::Anonymous);
            assert_eq!(store.get(CACHED_USER_KEY).unwrap(), None);
        }

        #[tokio::test]
        async fn test_update_user_merges_fields() {
            let (auth, _, _) = context(MockAgencyApi::new().with_user(kim()));
            let patch = UserPatch {
                name: Some("Kim Lee".into()),
                email: None,
            };
            assert_eq!(auth.update_user(&patch).await, None);

            auth.initialize().await;
            let user = auth.update_user(&patch).await.unwrap();
            assert_eq!(user.name, "Kim Lee");
            assert_eq!(auth.cached_user().unwrap().name, "Kim Lee");
        }

        #[tokio::test]
        async fn test_guard_invalidates_on_401() {
            let (auth, _, _) = context(MockAgencyApi::new().with_user(kim()));
            auth.initialize().await;

            let ok: Result<(), ApiError> = auth.guard(Err(ApiError::Timeout)).await;
            assert!(ok.is_err());
            assert!(auth.is_authenticated().await);

            let _ = auth.guard::<()>(Err(ApiError::Unauthorized)).await;
            assert!(!auth.is_authenticated().await);
        }

        #[tokio::test]
        async fn test_simple_callback_signs_in() {
            let (auth, api, _) = context(MockAgencyApi::new().with_user(kim()));
            auth.simple_callback("tok").await.unwrap();
            assert!(auth.is_authenticated().await);
            assert_eq!(api.calls(), vec!["callback tok"]);
        }
    }
}
