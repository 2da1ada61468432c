//! Optimistic favorite toggle
//!
//! Each card owns one [`FavoriteToggle`]. A click flips the displayed state
//! immediately, the server call runs, and the flip is undone if the call
//! fails. State space: `{not favorited, favorited} × {idle, pending}`.
//!
//! ```text
//!            click (signed out)
//!   idle ───────────────────────────> LoginRequired   (no request)
//!    │ click (signed in)
//!    v
//!  pending ── success ──> idle, keeps flipped state
//!    │
//!    └── failure ──> idle, previous state restored
//!                    (401 also asks for login)
//! ```
//!
//! Clicks that arrive while a request is pending are ignored.

use serde::{Deserialize, Serialize};

use crate::api::ApiError;
use crate::models::ProfileId;

/// Server-side change a toggle asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FavoriteAction {
    /// `POST user-favorites/:id`
    Add,
    /// `DELETE user-favorites/:id`
    Remove,
}

/// A request issued by [`FavoriteToggle::begin`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteRequest {
    pub profile_id: ProfileId,
    pub action: FavoriteAction,
    /// Displayed state before the click
    pub previous: bool,
}

/// What a click turned into
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleStart {
    /// Signed out: show the login prompt, send nothing
    LoginRequired,
    /// A request for this card is already in flight
    Busy,
    /// Displayed state was flipped; send this request
    Send(FavoriteRequest),
}

/// Final state of a toggle after the server answered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Signed out; nothing was sent
    LoginRequired,
    /// Ignored because a request was already pending
    Busy,
    /// The server accepted the change
    Confirmed { favorited: bool },
    /// The server rejected the change and the flip was undone
    RolledBack { favorited: bool, login_required: bool },
}

impl ToggleOutcome {
    /// Whether the login prompt should be shown
    pub fn needs_login(&self) -> bool {
        matches!(
            self,
            ToggleOutcome::LoginRequired
                | ToggleOutcome::RolledBack {
                    login_required: true,
                    ..
                }
        )
    }
}

/// What the page does once a toggle settled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleFeedback {
    /// Record the confirmed state in the shared favorites set
    Record { favorited: bool },
    /// Show the login prompt, dropping the session first after a 401
    PromptLogin { invalidate: bool },
    /// Show an error toast
    Error(String),
    Ignore,
}

impl ToggleOutcome {
    /// Feedback for this outcome; `error` is the failure behind a rollback
    pub fn feedback(&self, error: Option<&ApiError>) -> ToggleFeedback {
        match self {
            ToggleOutcome::Confirmed { favorited } => ToggleFeedback::Record {
                favorited: *favorited,
            },
            ToggleOutcome::RolledBack {
                login_required: true,
                ..
            } => ToggleFeedback::PromptLogin { invalidate: true },
            ToggleOutcome::RolledBack { .. } => ToggleFeedback::Error(
                error
                    .map(ApiError::user_message)
                    .unwrap_or_else(|| "Could not update favorites".to_string()),
            ),
            ToggleOutcome::LoginRequired => ToggleFeedback::PromptLogin { invalidate: false },
            ToggleOutcome::Busy => ToggleFeedback::Ignore,
        }
    }
}

/// Favorite state of one card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteToggle {
    profile_id: ProfileId,
    favorited: bool,
    pending: bool,
}

impl FavoriteToggle {
    pub fn new(profile_id: impl Into<ProfileId>, favorited: bool) -> Self {
        Self {
            profile_id: profile_id.into(),
            favorited,
            pending: false,
        }
    }

    pub fn profile_id(&self) -> &str {
        &self.profile_id
    }

    /// Displayed state, including an unconfirmed flip
    pub fn is_favorited(&self) -> bool {
        self.favorited
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Replace the displayed state with server truth (e.g. after the
    /// favorites list loads). Ignored while a request is pending.
    pub fn sync(&mut self, favorited: bool) {
        if !self.pending {
            self.favorited = favorited;
        }
    }

    /// Handle a click
    pub fn begin(&mut self, authenticated: bool) -> ToggleStart {
        if !authenticated {
            return ToggleStart::LoginRequired;
        }
        if self.pending {
            return ToggleStart::Busy;
        }

        let previous = self.favorited;
        self.favorited = !previous;
        self.pending = true;

        ToggleStart::Send(FavoriteRequest {
            profile_id: self.profile_id.clone(),
            action: if previous {
                FavoriteAction::Remove
            } else {
                FavoriteAction::Add
            },
            previous,
        })
    }

    /// Apply the server's answer to a request from [`begin`](Self::begin)
    pub fn settle(&mut self, request: &FavoriteRequest, result: Result<(), &ApiError>) -> ToggleOutcome {
        self.pending = false;

        match result {
            Ok(()) => ToggleOutcome::Confirmed {
                favorited: self.favorited,
            },
            Err(err) => {
                self.favorited = request.previous;
                ToggleOutcome::RolledBack {
                    favorited: self.favorited,
                    login_required: err.is_unauthorized(),
                }
            }
        }
    }
}

#[cfg(feature = "client")]
pub use driver::toggle;

#[cfg(feature = "client")]
mod driver {
    use super::*;
    use crate::api::AgencyApi;
    use crate::session::AuthContext;

    /// Run one click through the whole protocol against the API.
    ///
    /// A 401 also invalidates the session.
    pub async fn toggle(
        state: &mut FavoriteToggle,
        session: &AuthContext,
        api: &dyn AgencyApi,
    ) -> ToggleOutcome {
        let request = match state.begin(session.is_authenticated().await) {
            ToggleStart::LoginRequired => return ToggleOutcome::LoginRequired,
            ToggleStart::Busy => return ToggleOutcome::Busy,
            ToggleStart::Send(request) => request,
        };

        let result = match request.action {
            FavoriteAction::Add => api.add_favorite(&request.profile_id).await,
            FavoriteAction::Remove => api.remove_favorite(&request.profile_id).await,
        };

        if let Err(err) = &result {
            tracing::warn!(
                profile_id = %request.profile_id,
                action = ?request.action,
                error = %err,
                "Favorite update failed, rolling back"
            );
            if err.is_unauthorized() {
                session.invalidate().await;
            }
        }

        state.settle(&request, result.as_ref().map(|_| ()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback() {
        let confirmed = ToggleOutcome::Confirmed { favorited: true };
        assert_eq!(confirmed.feedback(None), ToggleFeedback::Record { favorited: true });

        let expired = ToggleOutcome::RolledBack {
            favorited: false,
            login_required: true,
        };
        assert_eq!(
            expired.feedback(Some(&ApiError::Unauthorized)),
            ToggleFeedback::PromptLogin { invalidate: true }
        );

        let failed = ToggleOutcome::RolledBack {
            favorited: false,
            login_required: false,
        };
        assert_eq!(
            failed.feedback(Some(&ApiError::Timeout)),
            ToggleFeedback::Error("Unable to reach the server. Check your connection.".into())
        );
        assert_eq!(
            failed.feedback(None),
            ToggleFeedback::Error("Could not update favorites".into())
        );

        assert_eq!(
            ToggleOutcome::LoginRequired.feedback(None),
            ToggleFeedback::PromptLogin { invalidate: false }
        );
        assert_eq!(ToggleOutcome::Busy.feedback(None), ToggleFeedback::Ignore);
    }

    #[test]
    fn test_rollback_after_server_error_feeds_back_an_error() {
        let mut toggle = FavoriteToggle::new("m1", true);
        let ToggleStart::Send(request) = toggle.begin(true) else {
            panic!("expected a request");
        };
        assert!(!toggle.is_favorited());

        let err = ApiError::from_status(500, "Database unavailable");
        let outcome = toggle.settle(&request, Err(&err));
        assert!(toggle.is_favorited());
        assert_eq!(
            outcome.feedback(Some(&err)),
            ToggleFeedback::Error("Database unavailable".into())
        );
    }

    #[test]
    fn test_signed_out_click_sends_nothing() {
        let mut toggle = FavoriteToggle::new("m1", false);

        assert_eq!(toggle.begin(false), ToggleStart::LoginRequired);
        assert!(!toggle.is_favorited());
        assert!(!toggle.is_pending());
    }

    #[test]
    fn test_click_flips_immediately() {
        let mut toggle = FavoriteToggle::new("m1", false);

        let start = toggle.begin(true);
        assert_eq!(
            start,
            ToggleStart::Send(FavoriteRequest {
                profile_id: "m1".into(),
                action: FavoriteAction::Add,
                previous: false,
            })
        );
        assert!(toggle.is_favorited());
        assert!(toggle.is_pending());
    }

    #[test]
    fn test_success_keeps_requested_state() {
        for initial in [false, true] {
            let mut toggle = FavoriteToggle::new("m1", initial);
            let ToggleStart::Send(request) = toggle.begin(true) else {
                panic!("expected a request");
            };

            let outcome = toggle.settle(&request, Ok(()));
            assert_eq!(outcome, ToggleOutcome::Confirmed { favorited: !initial });
            assert_eq!(toggle.is_favorited(), !initial);
            assert!(!toggle.is_pending());
        }
    }

    #[test]
    fn test_failure_rolls_back() {
        for initial in [false, true] {
            let mut toggle = FavoriteToggle::new("m1", initial);
            let ToggleStart::Send(request) = toggle.begin(true) else {
                panic!("expected a request");
            };

            let err = ApiError::Network("connection reset".into());
            let outcome = toggle.settle(&request, Err(&err));
            assert_eq!(
                outcome,
                ToggleOutcome::RolledBack {
                    favorited: initial,
                    login_required: false
                }
            );
            assert_eq!(toggle.is_favorited(), initial);
        }
    }

    #[test]
    fn test_unauthorized_rolls_back_and_asks_for_login() {
        let mut toggle = FavoriteToggle::new("m1", true);
        let ToggleStart::Send(request) = toggle.begin(true) else {
            panic!("expected a request");
        };
        assert_eq!(request.action, FavoriteAction::Remove);

        let outcome = toggle.settle(&request, Err(&ApiError::Unauthorized));
        assert!(outcome.needs_login());
        assert!(toggle.is_favorited());
    }

    #[test]
    fn test_double_click_is_guarded() {
        let mut toggle = FavoriteToggle::new("m1", false);
        let first = toggle.begin(true);
        assert!(matches!(first, ToggleStart::Send(_)));

        assert_eq!(toggle.begin(true), ToggleStart::Busy);
        assert!(toggle.is_favorited());
    }

    #[test]
    fn test_sync_ignored_while_pending() {
        let mut toggle = FavoriteToggle::new("m1", false);
        toggle.sync(true);
        assert!(toggle.is_favorited());

        let _ = toggle.begin(true);
        toggle.sync(true);
        assert!(!toggle.is_favorited());
    }
}

#[cfg(all(test, feature = "client"))]
mod driver_tests {
    use super::*;
    use crate::api::mock::MockAgencyApi;
    use crate::models::{Role, SessionUser};
    use crate::session::AuthContext;
    use std::sync::Arc;

    async fn signed_in(api: &Arc<MockAgencyApi>) -> AuthContext {
        let auth = AuthContext::new(api.clone());
        auth.initialize().await;
        auth
    }

    fn mock() -> Arc<MockAgencyApi> {
        Arc::new(MockAgencyApi::new().with_user(SessionUser {
            id: "u1".into(),
            name: "Kim".into(),
            email: None,
            role: Role::User,
        }))
    }

    #[tokio::test]
    async fn test_signed_out_never_calls_api() {
        let api = Arc::new(MockAgencyApi::new());
        let auth = AuthContext::new(api.clone());
        auth.initialize().await;

        let mut state = FavoriteToggle::new("m1", false);
        let outcome = toggle(&mut state, &auth, api.as_ref()).await;

        assert_eq!(outcome, ToggleOutcome::LoginRequired);
        assert_eq!(api.calls(), vec!["profile"]);
    }

    #[tokio::test]
    async fn test_add_then_remove() {
        let api = mock();
        let auth = signed_in(&api).await;
        let mut state = FavoriteToggle::new("m1", false);

        let outcome = toggle(&mut state, &auth, api.as_ref()).await;
        assert_eq!(outcome, ToggleOutcome::Confirmed { favorited: true });

        let outcome = toggle(&mut state, &auth, api.as_ref()).await;
        assert_eq!(outcome, ToggleOutcome::Confirmed { favorited: false });

        assert_eq!(api.calls()[1..], ["favorite m1", "unfavorite m1"]);
    }

    #[tokio::test]
    async fn test_server_error_rolls_back() {
        let api = mock();
        let auth = signed_in(&api).await;
        api.push_favorite_result(Err(ApiError::from_status(500, "Internal Server Error")));

        let mut state = FavoriteToggle::new("m1", true);
        let outcome = toggle(&mut state, &auth, api.as_ref()).await;

        assert!(matches!(
            outcome,
            ToggleOutcome::RolledBack { favorited: true, login_required: false }
        ));
        assert!(state.is_favorited());
        assert!(auth.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_expired_session_invalidates() {
        let api = mock();
        let auth = signed_in(&api).await;
        api.push_favorite_result(Err(ApiError::Unauthorized));

        let mut state = FavoriteToggle::new("m1", false);
        let outcome = toggle(&mut state, &auth, api.as_ref()).await;

        assert!(outcome.needs_login());
        assert!(!state.is_favorited());
        assert!(!auth.is_authenticated().await);
    }
}
