//! Agency REST API Client
//!
//! HTTP client for the agency backend, built on reqwest. The main client
//! keeps a cookie store so the HttpOnly session cookie set by login is sent
//! on every later call; a second, cookie-less client serves anonymous
//! requests.

use reqwest::{Client, Method, Response};
use serde::{de::DeserializeOwned, Serialize};
use std::time::{Duration, Instant};

use super::dto::{
    FavoritesEnvelope, LoginRequest, ProfileEnvelope, ProfileListEnvelope, SignupRequest,
    UserEnvelope,
};
use super::{join_url, AgencyApi, ApiError, ApiResult, Endpoints, ErrorBody};
use crate::detail::Credentials;
use crate::forms::{ContactMessage, ProfilePayload};
use crate::models::{HelperProfile, ProfileId, SessionUser};

/// Header carrying a per-request id for log correlation
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpApiConfig {
    /// Base URL of the API (e.g., "http://localhost:5000/api")
    pub base_url: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
    /// Endpoint paths
    pub endpoints: Endpoints,
}

impl Default for HttpApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api".to_string(),
            request_timeout_ms: 10_000,
            endpoints: Endpoints::default(),
        }
    }
}

/// reqwest-backed [`AgencyApi`]
pub struct HttpAgencyApi {
    client: Client,
    anonymous: Client,
    config: HttpApiConfig,
}

impl HttpAgencyApi {
    pub fn new(config: HttpApiConfig) -> ApiResult<Self> {
        let timeout = Duration::from_millis(config.request_timeout_ms);

        let client = Client::builder()
            .cookie_store(true)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(format!("Failed to create HTTP client: {}", e)))?;

        let anonymous = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            anonymous,
            config,
        })
    }

    pub fn config(&self) -> &HttpApiConfig {
        &self.config
    }

    fn endpoints(&self) -> &Endpoints {
        &self.config.endpoints
    }

    /// Send a request and turn non-2xx answers into errors
    async fn send<B>(
        &self,
        credentials: Credentials,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<Response>
    where
        B: Serialize + ?Sized,
    {
        let client = match credentials {
            Credentials::Include => &self.client,
            Credentials::Omit => &self.anonymous,
        };
        let url = join_url(&self.config.base_url, path);
        let request_id = uuid::Uuid::new_v4().to_string();

        let mut builder = client
            .request(method.clone(), &url)
            .header(REQUEST_ID_HEADER, &request_id);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let started = Instant::now();
        let response = builder.send().await.map_err(|e| {
            tracing::warn!(
                request_id = %request_id,
                method = %method,
                path,
                error = %e,
                "API request failed"
            );
            ApiError::from(e)
        })?;

        let status = response.status();
        tracing::debug!(
            request_id = %request_id,
            method = %method,
            path,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "API request"
        );

        if status.is_success() {
            Ok(response)
        } else {
            let text = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(
                status.as_u16(),
                ErrorBody::message_from(&text),
            ))
        }
    }

    async fn send_empty(&self, method: Method, path: &str) -> ApiResult<Response> {
        self.send::<()>(Credentials::Include, method, path, None).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait::async_trait]
impl AgencyApi for HttpAgencyApi {
    async fn login(&self, request: &LoginRequest) -> ApiResult<SessionUser> {
        let path = self.endpoints().login.clone();
        let response = self
            .send(Credentials::Include, Method::POST, &path, Some(request))
            .await?;
        Ok(Self::decode::<UserEnvelope>(response).await?.into_user())
    }

    async fn signup(&self, request: &SignupRequest) -> ApiResult<SessionUser> {
        let path = self.endpoints().signup.clone();
        let response = self
            .send(Credentials::Include, Method::POST, &path, Some(request))
            .await?;
        Ok(Self::decode::<UserEnvelope>(response).await?.into_user())
    }

    async fn logout(&self) -> ApiResult<()> {
        let path = self.endpoints().logout.clone();
        self.send_empty(Method::POST, &path).await?;
        Ok(())
    }

    async fn fetch_profile(&self) -> ApiResult<SessionUser> {
        let path = self.endpoints().profile.clone();
        let response = self.send_empty(Method::GET, &path).await?;
        Ok(Self::decode::<UserEnvelope>(response).await?.into_user())
    }

    async fn simple_callback(&self, token: &str) -> ApiResult<SessionUser> {
        let path = format!(
            "{}?token={}",
            self.endpoints().simple_callback,
            urlencoding::encode(token)
        );
        let response = self.send_empty(Method::GET, &path).await?;
        Ok(Self::decode::<UserEnvelope>(response).await?.into_user())
    }

    async fn list_maids(&self) -> ApiResult<Vec<HelperProfile>> {
        let path = self.endpoints().maids.clone();
        let response = self.send_empty(Method::GET, &path).await?;
        Ok(Self::decode::<ProfileListEnvelope>(response)
            .await?
            .into_profiles())
    }

    async fn get_maid(&self, id: &str, credentials: Credentials) -> ApiResult<HelperProfile> {
        let path = self.endpoints().maid_path(id);
        let response = self
            .send::<()>(credentials, Method::GET, &path, None)
            .await?;
        Ok(Self::decode::<ProfileEnvelope>(response).await?.into_profile())
    }

    async fn add_favorite(&self, id: &str) -> ApiResult<()> {
        let path = self.endpoints().user_favorite_path(id);
        self.send_empty(Method::POST, &path).await?;
        Ok(())
    }

    async fn remove_favorite(&self, id: &str) -> ApiResult<()> {
        let path = self.endpoints().user_favorite_path(id);
        self.send_empty(Method::DELETE, &path).await?;
        Ok(())
    }

    async fn list_favorites(&self) -> ApiResult<Vec<ProfileId>> {
        let path = self.endpoints().favorites.clone();
        let response = self.send_empty(Method::GET, &path).await?;
        Ok(Self::decode::<FavoritesEnvelope>(response).await?.into_ids())
    }

    async fn create_maid(&self, payload: &ProfilePayload) -> ApiResult<HelperProfile> {
        let path = self.endpoints().maids.clone();
        let response = self
            .send(Credentials::Include, Method::POST, &path, Some(payload))
            .await?;
        Ok(Self::decode::<ProfileEnvelope>(response).await?.into_profile())
    }

    async fn update_maid(&self, id: &str, payload: &ProfilePayload) -> ApiResult<HelperProfile> {
        let path = self.endpoints().maid_path(id);
        let response = self
            .send(Credentials::Include, Method::PUT, &path, Some(payload))
            .await?;
        Ok(Self::decode::<ProfileEnvelope>(response).await?.into_profile())
    }

    async fn submit_contact(&self, message: &ContactMessage) -> ApiResult<()> {
        let path = self.endpoints().contact.clone();
        self.send(Credentials::Include, Method::POST, &path, Some(message))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::Path,
        http::{header, HeaderMap, StatusCode},
        response::{IntoResponse, Response as AxumResponse},
        routing::{get, post},
        Json, Router,
    };
    use serde_json::{json, Value};

    const SESSION_COOKIE: &str = "session=abc123";

    fn has_session(headers: &HeaderMap) -> bool {
        headers
            .get(header::COOKIE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.contains(SESSION_COOKIE))
            .unwrap_or(false)
    }

    fn unauthorized() -> AxumResponse {
        (StatusCode::UNAUTHORIZED, Json(json!({"message": "Not authenticated"}))).into_response()
    }

    async fn login(headers: HeaderMap, Json(body): Json<Value>) -> AxumResponse {
        if !headers.contains_key(REQUEST_ID_HEADER) {
            return StatusCode::BAD_REQUEST.into_response();
        }
        if body["email"] == "kim@example.com" && body["password"] == "secret" {
            (
                [(header::SET_COOKIE, format!("{}; Path=/; HttpOnly", SESSION_COOKIE))],
                Json(json!({"user": {"_id": "u1", "name": "Kim", "role": "admin"}})),
            )
                .into_response()
        } else {
            (StatusCode::UNAUTHORIZED, Json(json!({"message": "Invalid credentials"}))).into_response()
        }
    }

    async fn profile(headers: HeaderMap) -> AxumResponse {
        if has_session(&headers) {
            Json(json!({"id": "u1", "name": "Kim", "role": "admin"})).into_response()
        } else {
            unauthorized()
        }
    }

    async fn list_maids() -> Json<Value> {
        Json(json!([
            {"_id": "m1", "name": "Anna", "country": "Philippines"},
            {"_id": "m2", "name": "Siti", "country": "Indonesia"}
        ]))
    }

    async fn get_maid(headers: HeaderMap, Path(id): Path<String>) -> AxumResponse {
        if !has_session(&headers) {
            return unauthorized();
        }
        if id == "missing" {
            return (StatusCode::NOT_FOUND, Json(json!({"message": "Maid not found"}))).into_response();
        }
        Json(json!({"maid": {"_id": id, "name": "Anna", "description": "Full record"}})).into_response()
    }

    async fn favorite(headers: HeaderMap, Path(_id): Path<String>) -> AxumResponse {
        if has_session(&headers) {
            StatusCode::NO_CONTENT.into_response()
        } else {
            unauthorized()
        }
    }

    async fn favorites(headers: HeaderMap) -> AxumResponse {
        if has_session(&headers) {
            Json(json!({"favorites": [{"_id": "m2", "name": "Siti"}]})).into_response()
        } else {
            unauthorized()
        }
    }

    async fn spawn_backend() -> HttpAgencyApi {
        let router = Router::new()
            .route("/api/auth/login", post(login))
            .route("/api/auth/profile", get(profile))
            .route("/api/maids", get(list_maids))
            .route("/api/maids/:id", get(get_maid))
            .route("/api/user-favorites/:id", post(favorite).delete(favorite))
            .route("/api/user/favorites", get(favorites));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        HttpAgencyApi::new(HttpApiConfig {
            base_url: format!("http://{}/api", addr),
            ..Default::default()
        })
        .unwrap()
    }

    fn credentials() -> LoginRequest {
        LoginRequest {
            email: "kim@example.com".into(),
            password: "secret".into(),
        }
    }

    #[tokio::test]
    async fn test_profile_requires_session() {
        let api = spawn_backend().await;
        assert_eq!(api.fetch_profile().await, Err(ApiError::Unauthorized));
    }

    #[tokio::test]
    async fn test_login_cookie_is_reused() {
        let api = spawn_backend().await;

        let user = api.login(&credentials()).await.unwrap();
        assert_eq!(user.id, "u1");
        assert!(user.is_admin());

        let again = api.fetch_profile().await.unwrap();
        assert_eq!(again.name, "Kim");
    }

    #[tokio::test]
    async fn test_bad_login_carries_server_message() {
        let api = spawn_backend().await;
        let err = api
            .login(&LoginRequest {
                email: "kim@example.com".into(),
                password: "wrong".into(),
            })
            .await
            .unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[tokio::test]
    async fn test_list_maids() {
        let api = spawn_backend().await;
        let maids = api.list_maids().await.unwrap();
        assert_eq!(maids.len(), 2);
        assert_eq!(maids[1].country, "Indonesia");
    }

    #[tokio::test]
    async fn test_anonymous_detail_skips_cookie() {
        let api = spawn_backend().await;
        api.login(&credentials()).await.unwrap();

        let full = api.get_maid("m1", Credentials::Include).await.unwrap();
        assert_eq!(full.description.as_deref(), Some("Full record"));

        let anon = api.get_maid("m1", Credentials::Omit).await;
        assert_eq!(anon, Err(ApiError::Unauthorized));
    }

    #[tokio::test]
    async fn test_not_found_message() {
        let api = spawn_backend().await;
        api.login(&credentials()).await.unwrap();

        let err = api.get_maid("missing", Credentials::Include).await.unwrap_err();
        assert_eq!(err, ApiError::NotFound("Maid not found".into()));
    }

    #[tokio::test]
    async fn test_favorites_round() {
        let api = spawn_backend().await;
        assert_eq!(api.add_favorite("m1").await, Err(ApiError::Unauthorized));

        api.login(&credentials()).await.unwrap();
        api.add_favorite("m1").await.unwrap();
        api.remove_favorite("m1").await.unwrap();
        assert_eq!(api.list_favorites().await.unwrap(), vec!["m2".to_string()]);
    }

    /// Backend whose session has expired: the list and any request carrying
    /// the cookie answer 401, while anonymous detail reads are public
    async fn spawn_expired_backend() -> HttpAgencyApi {
        async fn public_maid(headers: HeaderMap, Path(id): Path<String>) -> AxumResponse {
            if headers.contains_key(header::COOKIE) {
                return unauthorized();
            }
            Json(json!({"_id": id, "id": id, "name": "Anna", "skills": null})).into_response()
        }

        let router = Router::new()
            .route("/api/auth/login", post(login))
            .route("/api/maids", get(|| async { unauthorized() }))
            .route("/api/maids/:id", get(public_maid));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        HttpAgencyApi::new(HttpApiConfig {
            base_url: format!("http://{}/api", addr),
            ..Default::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_open_by_id_survives_expired_session() {
        use crate::detail::{open_by_id, DetailSource};

        let api = spawn_expired_backend().await;
        api.login(&credentials()).await.unwrap();
        assert_eq!(api.list_maids().await, Err(ApiError::Unauthorized));

        let view = open_by_id(&api, "m1").await;
        assert_eq!(view.source, DetailSource::Anonymous);
        assert_eq!(view.profile.id, "m1");
        assert_eq!(view.profile.name, "Anna");
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let api = HttpAgencyApi::new(HttpApiConfig {
            base_url: format!("http://{}/api", addr),
            request_timeout_ms: 2_000,
            ..Default::default()
        })
        .unwrap();

        assert!(matches!(api.list_maids().await, Err(ApiError::Network(_))));
    }
}
