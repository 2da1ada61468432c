//! Customer reviews shown on the home page
//!
//! Reviews come from a third-party feed and change rarely, so the last good
//! copy is cached in the local store for a day and served stale when the
//! feed is down.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::future::Future;

use crate::api::ApiResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub author: String,
    pub rating: u8,
    #[serde(default)]
    pub text: String,
    /// Already humanised by the feed, e.g. "2 weeks ago"
    #[serde(default)]
    pub relative_time: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    /// Average rating out of 5
    pub rating: f32,
    /// Total number of reviews, not just those included
    pub total: u32,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl ReviewSummary {
    /// Five-character star bar for a rating, rounded to the nearest star
    pub fn stars(rating: f32) -> String {
        let full = rating.clamp(0.0, 5.0).round() as usize;
        format!("{}{}", "★".repeat(full), "☆".repeat(5 - full))
    }
}

/// Cached copy with the time it was fetched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedReviews {
    pub fetched_at: DateTime<Utc>,
    pub summary: ReviewSummary,
}

impl CachedReviews {
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now.signed_duration_since(self.fetched_at) < ttl
    }
}

/// Where a served summary came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewSource {
    Cache,
    Feed,
    /// The feed failed; an expired copy was served
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewLoad {
    pub summary: ReviewSummary,
    pub source: ReviewSource,
}

impl ReviewLoad {
    /// Entry to write back; only a fresh feed answer is cached
    pub fn cache_entry(&self, now: DateTime<Utc>) -> Option<CachedReviews> {
        (self.source == ReviewSource::Feed).then(|| CachedReviews {
            fetched_at: now,
            summary: self.summary.clone(),
        })
    }
}

/// Fresh cache, else the feed, else whatever stale copy is left
pub async fn resolve_reviews<F, Fut>(
    cached: Option<CachedReviews>,
    now: DateTime<Utc>,
    ttl: Duration,
    fetch: F,
) -> ApiResult<ReviewLoad>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = ApiResult<ReviewSummary>>,
{
    if let Some(cached) = &cached {
        if cached.is_fresh(now, ttl) {
            tracing::debug!("Serving cached reviews");
            return Ok(ReviewLoad {
                summary: cached.summary.clone(),
                source: ReviewSource::Cache,
            });
        }
    }

    match fetch().await {
        Ok(summary) => Ok(ReviewLoad {
            summary,
            source: ReviewSource::Feed,
        }),
        Err(e) => match cached {
            Some(stale) => {
                tracing::warn!(error = %e, "Reviews feed failed, serving stale copy");
                Ok(ReviewLoad {
                    summary: stale.summary,
                    source: ReviewSource::Stale,
                })
            }
            None => Err(e),
        },
    }
}

#[cfg(feature = "client")]
pub use cache::ReviewCache;

#[cfg(feature = "client")]
mod cache {
    use std::sync::Arc;

    use super::*;
    use crate::api::{ApiError, ErrorBody};
    use crate::store::{LocalStore, REVIEWS_CACHE_KEY};

    pub struct ReviewCache {
        http: reqwest::Client,
        url: String,
        ttl: Duration,
        store: Arc<LocalStore>,
    }

    impl ReviewCache {
        pub fn new(url: impl Into<String>, ttl: Duration, store: Arc<LocalStore>) -> ApiResult<Self> {
            let http = reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .map_err(|e| ApiError::Network(format!("Failed to create HTTP client: {}", e)))?;
            Ok(Self {
                http,
                url: url.into(),
                ttl,
                store,
            })
        }

        pub async fn get(&self) -> ApiResult<ReviewSummary> {
            self.get_at(Utc::now()).await
        }

        /// Fresh cache, else the feed, else whatever stale copy we have
        pub async fn get_at(&self, now: DateTime<Utc>) -> ApiResult<ReviewSummary> {
            let load = resolve_reviews(self.cached(), now, self.ttl, || self.fetch()).await?;
            if let Some(entry) = load.cache_entry(now) {
                if let Err(e) = self.store.set_json(REVIEWS_CACHE_KEY, &entry) {
                    tracing::warn!(error = %e, "Failed to cache reviews");
                }
            }
            Ok(load.summary)
        }

        fn cached(&self) -> Option<CachedReviews> {
            self.store.get_json(REVIEWS_CACHE_KEY).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Ignoring unreadable reviews cache");
                None
            })
        }

        async fn fetch(&self) -> ApiResult<ReviewSummary> {
            let response = self.http.get(&self.url).send().await?;
            let status = response.status();
            let text = response.text().await?;
            if !status.is_success() {
                return Err(ApiError::from_status(
                    status.as_u16(),
                    ErrorBody::message_from(&text),
                ));
            }
            serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
        }
    }
}
