//! Backend API client.
//!
//! Plain JSON-over-HTTP bindings for the MediKart backend. One request per
//! call site, no retry, no deduplication, no cancellation: a view that goes
//! away while a request is in flight simply drops the future. The client is
//! cheaply cloneable (`Arc` inner) and carries an optional bearer token set
//! after login or OTP verification.
//!
//! # Endpoint groups
//!
//! - [`auth`] - register, login, send/verify OTP
//! - [`medicines`] - catalog list, search, detail (detail is cached)
//! - [`orders`] - order placement and history
//! - [`user_medicines`] - tracked-medicine CRUD
//! - [`vendor`] - vendor onboarding

pub mod auth;
pub mod medicines;
pub mod orders;
pub mod user_medicines;
pub mod vendor;

use std::sync::{Arc, RwLock};
use std::time::Duration;

use moka::future::Cache;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use crate::config::StorefrontConfig;
use crate::models::Medicine;

/// Medicine-detail cache TTL.
const DETAIL_CACHE_TTL: Duration = Duration::from_secs(300);
const DETAIL_CACHE_CAPACITY: u64 = 1000;

/// Errors that can occur when calling the backend API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport failed (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend rejected the request.
    #[error("Backend returned {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Message from the backend's error envelope, or the status reason.
        message: String,
    },

    /// Response body was not the expected JSON shape.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Resource does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Missing or expired bearer token.
    #[error("Unauthorized")]
    Unauthorized,

    /// Rate limited by the backend.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),
}

/// Client for the MediKart backend API.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: Url,
    token: RwLock<Option<SecretString>>,
    medicine_cache: Cache<String, Medicine>,
}

impl ApiClient {
    /// Create a new API client from configuration.
    #[must_use]
    pub fn new(config: &StorefrontConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()
            .unwrap_or_default();

        let medicine_cache = Cache::builder()
            .max_capacity(DETAIL_CACHE_CAPACITY)
            .time_to_live(DETAIL_CACHE_TTL)
            .build();

        Self {
            inner: Arc::new(ApiClientInner {
                client,
                base_url: config.api_base_url.clone(),
                token: RwLock::new(None),
                medicine_cache,
            }),
        }
    }

    /// Install the bearer token used for authenticated endpoints.
    pub fn set_token(&self, token: SecretString) {
        if let Ok(mut slot) = self.inner.token.write() {
            *slot = Some(token);
        }
    }

    /// Drop the bearer token (logout).
    pub fn clear_token(&self) {
        if let Ok(mut slot) = self.inner.token.write() {
            *slot = None;
        }
    }

    /// Whether a bearer token is currently installed.
    #[must_use]
    pub fn has_token(&self) -> bool {
        self.inner
            .token
            .read()
            .map(|slot| slot.is_some())
            .unwrap_or(false)
    }

    /// Build the absolute URL for an API path.
    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.inner.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn bearer(&self) -> Option<String> {
        self.inner
            .token
            .read()
            .ok()
            .and_then(|slot| slot.as_ref().map(|t| t.expose_secret().to_owned()))
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.bearer() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let request = self
            .inner
            .client
            .get(self.endpoint(path))
            .query(query);
        let response = self.apply_auth(request).send().await?;
        Self::decode(path, response).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.inner.client.post(self.endpoint(path)).json(body);
        let response = self.apply_auth(request).send().await?;
        Self::decode(path, response).await
    }

    async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.inner.client.put(self.endpoint(path)).json(body);
        let response = self.apply_auth(request).send().await?;
        Self::decode(path, response).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = self.inner.client.delete(self.endpoint(path));
        let response = self.apply_auth(request).send().await?;

        Self::header_status_error(path, &response)?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(Self::status_error(status, &body))
    }

    /// Map the response status and decode the JSON body.
    async fn decode<T: DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        Self::header_status_error(path, &response)?;

        // Read as text first for better parse-error diagnostics.
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Self::status_error(status, &body));
        }

        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::error!(
                    path,
                    error = %e,
                    body = %body.chars().take(500).collect::<String>(),
                    "Failed to parse backend response"
                );
                Err(ApiError::Parse(e))
            }
        }
    }

    /// Status errors decidable without consuming the body.
    fn header_status_error(path: &str, response: &reqwest::Response) -> Result<(), ApiError> {
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(1);
            return Err(ApiError::RateLimited(retry_after));
        }
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(path.to_owned()));
        }
        Ok(())
    }

    /// Build a `Status` error, preferring the backend's `{"message": …}`
    /// envelope over the bare status reason.
    fn status_error(status: reqwest::StatusCode, body: &str) -> ApiError {
        #[derive(serde::Deserialize)]
        struct ErrorEnvelope {
            message: String,
        }

        let message = serde_json::from_str::<ErrorEnvelope>(body)
            .map(|envelope| envelope.message)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_owned()
            });

        ApiError::Status {
            status: status.as_u16(),
            message,
        }
    }

    fn medicine_cache(&self) -> &Cache<String, Medicine> {
        &self.inner.medicine_cache
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}
