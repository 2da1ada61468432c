//! HTTP API Client
//!
//! Functions for communicating with the agency REST API. Every request is
//! sent with `credentials: include` so the HttpOnly session cookie travels
//! with it; only the anonymous detail retry omits it.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use web_sys::RequestCredentials;

use helperhub::api::dto::{
    FavoritesEnvelope, LoginRequest, ProfileEnvelope, ProfileListEnvelope, SignupRequest,
    UserEnvelope,
};
use helperhub::api::{join_url, ApiError, ApiResult, Endpoints, ErrorBody};
use helperhub::detail::Credentials;
use helperhub::forms::{ContactMessage, ProfilePayload};
use helperhub::models::{HelperProfile, ProfileId, SessionUser};
use helperhub::reviews::ReviewSummary;

use crate::storage;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    storage::get(storage::API_URL_KEY)
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
        .trim_end_matches('/')
        .to_string()
}

/// Base for relative image paths: the API origin without its `/api` suffix
pub fn image_base() -> String {
    image_base_for(&get_api_base())
}

fn image_base_for(api_base: &str) -> String {
    let base = api_base.trim_end_matches('/');
    base.strip_suffix("/api").unwrap_or(base).to_string()
}

fn endpoints() -> Endpoints {
    Endpoints::default()
}

fn url(path: &str) -> String {
    join_url(&get_api_base(), path)
}

fn with_credentials(builder: RequestBuilder, credentials: Credentials) -> RequestBuilder {
    builder.credentials(match credentials {
        Credentials::Include => RequestCredentials::Include,
        Credentials::Omit => RequestCredentials::Omit,
    })
}

fn get(path: &str) -> RequestBuilder {
    with_credentials(Request::get(&url(path)), Credentials::Include)
}

fn build_json<B: Serialize>(builder: RequestBuilder, body: &B) -> ApiResult<Request> {
    builder
        .json(body)
        .map_err(|e| ApiError::Decode(format!("Request build error: {}", e)))
}

fn build(builder: RequestBuilder) -> ApiResult<Request> {
    builder
        .build()
        .map_err(|e| ApiError::Network(format!("Request build error: {}", e)))
}

async fn send(request: Request) -> ApiResult<Response> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if response.ok() {
        Ok(response)
    } else {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        Err(ApiError::from_status(status, ErrorBody::message_from(&text)))
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

// ============ Auth ============

pub async fn login(request: &LoginRequest) -> ApiResult<SessionUser> {
    let builder = with_credentials(Request::post(&url(&endpoints().login)), Credentials::Include);
    let response = send(build_json(builder, request)?).await?;
    Ok(decode::<UserEnvelope>(response).await?.into_user())
}

pub async fn signup(request: &SignupRequest) -> ApiResult<SessionUser> {
    let builder = with_credentials(Request::post(&url(&endpoints().signup)), Credentials::Include);
    let response = send(build_json(builder, request)?).await?;
    Ok(decode::<UserEnvelope>(response).await?.into_user())
}

pub async fn logout() -> ApiResult<()> {
    let builder = with_credentials(Request::post(&url(&endpoints().logout)), Credentials::Include);
    send(build(builder)?).await?;
    Ok(())
}

pub async fn fetch_profile() -> ApiResult<SessionUser> {
    let response = send(build(get(&endpoints().profile))?).await?;
    Ok(decode::<UserEnvelope>(response).await?.into_user())
}

pub async fn simple_callback(token: &str) -> ApiResult<SessionUser> {
    let path = format!(
        "{}?token={}",
        endpoints().simple_callback,
        urlencoding::encode(token)
    );
    let response = send(build(get(&path))?).await?;
    Ok(decode::<UserEnvelope>(response).await?.into_user())
}

// ============ Catalogue ============

pub async fn list_maids() -> ApiResult<Vec<HelperProfile>> {
    let response = send(build(get(&endpoints().maids))?).await?;
    Ok(decode::<ProfileListEnvelope>(response).await?.into_profiles())
}

pub async fn get_maid(id: &str, credentials: Credentials) -> ApiResult<HelperProfile> {
    let builder = with_credentials(
        Request::get(&url(&endpoints().maid_path(id))),
        credentials,
    );
    let response = send(build(builder)?).await?;
    Ok(decode::<ProfileEnvelope>(response).await?.into_profile())
}

pub async fn create_maid(payload: &ProfilePayload) -> ApiResult<HelperProfile> {
    let builder = with_credentials(Request::post(&url(&endpoints().maids)), Credentials::Include);
    let response = send(build_json(builder, payload)?).await?;
    Ok(decode::<ProfileEnvelope>(response).await?.into_profile())
}

pub async fn update_maid(id: &str, payload: &ProfilePayload) -> ApiResult<HelperProfile> {
    let builder = with_credentials(
        Request::put(&url(&endpoints().maid_path(id))),
        Credentials::Include,
    );
    let response = send(build_json(builder, payload)?).await?;
    Ok(decode::<ProfileEnvelope>(response).await?.into_profile())
}

// ============ Favorites ============

pub async fn add_favorite(id: &str) -> ApiResult<()> {
    let builder = with_credentials(
        Request::post(&url(&endpoints().user_favorite_path(id))),
        Credentials::Include,
    );
    send(build(builder)?).await?;
    Ok(())
}

pub async fn remove_favorite(id: &str) -> ApiResult<()> {
    let builder = with_credentials(
        Request::delete(&url(&endpoints().user_favorite_path(id))),
        Credentials::Include,
    );
    send(build(builder)?).await?;
    Ok(())
}

pub async fn list_favorites() -> ApiResult<Vec<ProfileId>> {
    let response = send(build(get(&endpoints().favorites))?).await?;
    Ok(decode::<FavoritesEnvelope>(response).await?.into_ids())
}

// ============ Site ============

pub async fn submit_contact(message: &ContactMessage) -> ApiResult<()> {
    let builder = with_credentials(Request::post(&url(&endpoints().contact)), Credentials::Include);
    send(build_json(builder, message)?).await?;
    Ok(())
}

/// Reviews feed proxied by the backend
pub async fn fetch_reviews() -> ApiResult<ReviewSummary> {
    let builder = with_credentials(Request::get(&url("reviews")), Credentials::Omit);
    let response = send(build(builder)?).await?;
    decode(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_base_for() {
        assert_eq!(image_base_for("http://localhost:5000/api"), "http://localhost:5000");
        assert_eq!(image_base_for("https://agency.example.com/api/"), "https://agency.example.com");
        assert_eq!(image_base_for("https://cdn.example.com"), "https://cdn.example.com");
    }
}
