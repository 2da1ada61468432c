//! Customer Reviews
//!
//! Rating summary and the latest reviews, cached in localStorage for a day.

use chrono::{Duration, Utc};
use leptos::*;

use helperhub::api::ApiResult;
use helperhub::reviews::{resolve_reviews, ReviewSource, ReviewSummary};

use crate::api;
use crate::components::Loading;
use crate::storage;

const REVIEWS_TTL_HOURS: i64 = 24;

async fn load_reviews() -> ApiResult<ReviewSummary> {
    let now = Utc::now();
    let cached = storage::get_json(storage::REVIEWS_CACHE_KEY);

    let load = resolve_reviews(cached, now, Duration::hours(REVIEWS_TTL_HOURS), api::fetch_reviews).await?;
    if load.source == ReviewSource::Stale {
        web_sys::console::warn_1(&"Reviews feed failed, using cached copy".into());
    }
    if let Some(entry) = load.cache_entry(now) {
        storage::set_json(storage::REVIEWS_CACHE_KEY, &entry);
    }
    Ok(load.summary)
}

#[component]
pub fn Reviews() -> impl IntoView {
    let reviews = create_local_resource(|| (), |_| load_reviews());

    view! {
        <section class="py-12">
            <h2 class="text-3xl font-bold text-center text-slate-800 mb-8">"What families say"</h2>
            {move || match reviews.get() {
                None => view! { <Loading /> }.into_view(),
                Some(Err(_)) => view! {}.into_view(),
                Some(Ok(summary)) => view! { <ReviewList summary=summary /> }.into_view(),
            }}
        </section>
    }
}

#[component]
fn ReviewList(summary: ReviewSummary) -> impl IntoView {
    view! {
        <div class="text-center mb-8">
            <div class="text-3xl text-amber-400">{ReviewSummary::stars(summary.rating)}</div>
            <p class="text-slate-500 mt-1">
                {format!("{:.1} out of 5 from {} reviews", summary.rating, summary.total)}
            </p>
        </div>
        <div class="grid gap-6 md:grid-cols-3">
            {summary.reviews.into_iter().take(6).map(|review| view! {
                <article class="bg-white rounded-xl shadow p-5 space-y-2">
                    <div class="text-amber-400">{ReviewSummary::stars(review.rating as f32)}</div>
                    <p class="text-sm text-slate-600">{review.text}</p>
                    <p class="text-xs text-slate-400">
                        {format!("{} · {}", review.author, review.relative_time)}
                    </p>
                </article>
            }).collect_view()}
        </div>
    }
}
