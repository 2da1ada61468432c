//! Detail popup data fetch
//!
//! Opening a profile fetches the full record. The plan is short and fixed:
//!
//! 1. fetch with the session cookie;
//! 2. on a 401 only, fetch once more without credentials;
//! 3. otherwise, or if the retry fails, show the summary already in memory.

use crate::api::ApiError;
use crate::models::HelperProfile;

/// Whether a request carries the session cookie
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credentials {
    Include,
    Omit,
}

/// One step of the detail fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailAttempt {
    Authenticated,
    Anonymous,
}

impl DetailAttempt {
    pub fn first() -> Self {
        DetailAttempt::Authenticated
    }

    pub fn credentials(&self) -> Credentials {
        match self {
            DetailAttempt::Authenticated => Credentials::Include,
            DetailAttempt::Anonymous => Credentials::Omit,
        }
    }

    /// Next attempt after this one failed, or `None` to fall back
    pub fn next_after_failure(&self, err: &ApiError) -> Option<DetailAttempt> {
        match self {
            DetailAttempt::Authenticated if err.is_unauthorized() => Some(DetailAttempt::Anonymous),
            _ => None,
        }
    }

    fn source(&self) -> DetailSource {
        match self {
            DetailAttempt::Authenticated => DetailSource::Authenticated,
            DetailAttempt::Anonymous => DetailSource::Anonymous,
        }
    }
}

/// Where the record shown in the popup came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailSource {
    Authenticated,
    Anonymous,
    /// Both fetches failed; the catalogue summary is shown
    Summary,
}

/// Record to render in the detail popup
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub profile: HelperProfile,
    pub source: DetailSource,
}

impl DetailView {
    pub fn is_fallback(&self) -> bool {
        self.source == DetailSource::Summary
    }

    /// Note shown above a summary-only popup
    pub fn notice(&self, signed_in: bool) -> Option<&'static str> {
        match (self.source, signed_in) {
            (DetailSource::Summary, false) => {
                Some("Showing summary details only. Sign in to see the full profile.")
            }
            (DetailSource::Summary, true) => {
                Some("Showing summary details only. The full profile could not be loaded.")
            }
            _ => None,
        }
    }
}

/// Drive the plan with any fetch function
pub async fn resolve_detail<F, Fut>(summary: &HelperProfile, mut fetch: F) -> DetailView
where
    F: FnMut(DetailAttempt) -> Fut,
    Fut: std::future::Future<Output = Result<HelperProfile, ApiError>>,
{
    let mut attempt = DetailAttempt::first();

    loop {
        match fetch(attempt).await {
            Ok(profile) => {
                return DetailView {
                    profile,
                    source: attempt.source(),
                }
            }
            Err(err) => {
                tracing::warn!(
                    profile_id = %summary.id,
                    attempt = ?attempt,
                    error = %err,
                    "Detail fetch failed"
                );
                match attempt.next_after_failure(&err) {
                    Some(next) => attempt = next,
                    None => {
                        return DetailView {
                            profile: summary.clone(),
                            source: DetailSource::Summary,
                        }
                    }
                }
            }
        }
    }
}

#[cfg(feature = "client")]
/// Fetch the detailed record for a summary through the agency API
pub async fn load_detail(api: &dyn crate::api::AgencyApi, summary: &HelperProfile) -> DetailView {
    resolve_detail(summary, |attempt| {
        api.get_maid(&summary.id, attempt.credentials())
    })
    .await
}

#[cfg(feature = "client")]
/// Open a profile by id.
///
/// The summary comes from the catalogue list when it loads. A failed list
/// call leaves a bare summary and the detail fetch still runs.
pub async fn open_by_id(api: &dyn crate::api::AgencyApi, id: &str) -> DetailView {
    let summary = match api.list_maids().await {
        Ok(profiles) => profiles.into_iter().find(|p| p.id == id),
        Err(err) => {
            tracing::warn!(profile_id = %id, error = %err, "Catalogue list failed");
            None
        }
    }
    .unwrap_or_else(|| HelperProfile::new(id, String::new()));

    load_detail(api, &summary).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn summary() -> HelperProfile {
        HelperProfile::new("m1", "Anna")
    }

    fn detailed() -> HelperProfile {
        let mut profile = HelperProfile::new("m1", "Anna");
        profile.description = Some("Ten years of infant care".into());
        profile
    }

    #[test]
    fn test_plan() {
        let first = DetailAttempt::first();
        assert_eq!(first.credentials(), Credentials::Include);
        assert_eq!(
            first.next_after_failure(&ApiError::Unauthorized),
            Some(DetailAttempt::Anonymous)
        );
        assert_eq!(first.next_after_failure(&ApiError::Timeout), None);
        assert_eq!(
            DetailAttempt::Anonymous.next_after_failure(&ApiError::Unauthorized),
            None
        );
    }

    #[test]
    fn test_notice_depends_on_sign_in() {
        let fallback = DetailView {
            profile: summary(),
            source: DetailSource::Summary,
        };
        assert!(fallback.notice(false).unwrap().contains("Sign in"));
        assert!(!fallback.notice(true).unwrap().contains("Sign in"));

        let full = DetailView {
            profile: detailed(),
            source: DetailSource::Anonymous,
        };
        assert_eq!(full.notice(false), None);
        assert_eq!(full.notice(true), None);
    }

    #[tokio::test]
    async fn test_authenticated_success() {
        let calls = RefCell::new(Vec::new());
        let view = resolve_detail(&summary(), |attempt| {
            calls.borrow_mut().push(attempt);
            async { Ok(detailed()) }
        })
        .await;

        assert_eq!(view.source, DetailSource::Authenticated);
        assert_eq!(view.profile, detailed());
        assert_eq!(calls.into_inner(), vec![DetailAttempt::Authenticated]);
    }

    #[tokio::test]
    async fn test_unauthorized_retries_once_without_credentials() {
        let calls = RefCell::new(Vec::new());
        let view = resolve_detail(&summary(), |attempt| {
            calls.borrow_mut().push(attempt);
            async { Err(ApiError::Unauthorized) }
        })
        .await;

        assert_eq!(view.source, DetailSource::Summary);
        assert_eq!(view.profile, summary());
        assert_eq!(
            calls.into_inner(),
            vec![DetailAttempt::Authenticated, DetailAttempt::Anonymous]
        );
    }

    #[tokio::test]
    async fn test_anonymous_retry_can_succeed() {
        let view = resolve_detail(&summary(), |attempt| async move {
            match attempt {
                DetailAttempt::Authenticated => Err(ApiError::Unauthorized),
                DetailAttempt::Anonymous => Ok(detailed()),
            }
        })
        .await;

        assert_eq!(view.source, DetailSource::Anonymous);
        assert!(!view.is_fallback());
    }

    #[tokio::test]
    async fn test_other_failures_fall_back_without_retry() {
        let calls = RefCell::new(0);
        let view = resolve_detail(&summary(), |_| {
            *calls.borrow_mut() += 1;
            async { Err(ApiError::from_status(500, "boom")) }
        })
        .await;

        assert!(view.is_fallback());
        assert_eq!(calls.into_inner(), 1);
    }
}

#[cfg(all(test, feature = "client"))]
mod api_tests {
    use super::*;
    use crate::api::mock::MockAgencyApi;

    fn summary() -> HelperProfile {
        HelperProfile::new("m1", "Anna")
    }

    #[tokio::test]
    async fn test_retry_once_without_credentials() {
        let api = MockAgencyApi::new();
        api.push_detail_result(Err(ApiError::Unauthorized));
        api.push_detail_result(Err(ApiError::Unauthorized));

        let view = load_detail(&api, &summary()).await;
        assert_eq!(view.source, DetailSource::Summary);
        assert_eq!(api.calls(), vec!["get m1 Include", "get m1 Omit"]);
    }

    #[tokio::test]
    async fn test_full_record_when_signed_in() {
        let mut full = summary();
        full.description = Some("Ten years of childcare".into());
        let api = MockAgencyApi::new().with_maids(vec![full.clone()]);

        let view = load_detail(&api, &summary()).await;
        assert_eq!(view.source, DetailSource::Authenticated);
        assert_eq!(view.profile, full);
    }

    #[tokio::test]
    async fn test_open_by_id_falls_back_to_listed_summary() {
        let api = MockAgencyApi::new().with_maids(vec![summary()]);
        api.push_detail_result(Err(ApiError::from_status(500, "boom")));

        let view = open_by_id(&api, "m1").await;
        assert!(view.is_fallback());
        assert_eq!(view.profile.name, "Anna");
        assert_eq!(api.calls(), vec!["list", "get m1 Include"]);
    }
}
