//! Authenticated JSON client for the Workboard REST API
//!
//! Every request carries `Content-Type: application/json` and, when the
//! credential slot holds a token, `Authorization: Bearer <token>`. A 401
//! response clears the slot and signals the login boundary once per call.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument, warn};
use workboard_core::{CredentialStore, LoginBoundary};
use workboard_domain::ApiConfig;

use super::errors::ApiError;
use crate::http::HttpClient;

/// Configuration for API client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClientConfig {
    /// Base URL including the API prefix, e.g. `http://localhost:8000/api`
    pub base_url: String,
    /// Timeout for a single call, retries included
    pub timeout: Duration,
    /// Total attempts per request; 1 disables retry
    pub max_attempts: usize,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self::from(&ApiConfig::default())
    }
}

impl From<&ApiConfig> for ApiClientConfig {
    fn from(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
            max_attempts: config.max_attempts,
        }
    }
}

/// API client bound to a credential slot and a login boundary
pub struct ApiClient {
    http_client: HttpClient,
    config: ApiClientConfig,
    credentials: Arc<dyn CredentialStore>,
    login: Arc<dyn LoginBoundary>,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the base URL is not absolute or the
    /// HTTP client cannot be built.
    pub fn new(
        config: ApiClientConfig,
        credentials: Arc<dyn CredentialStore>,
        login: Arc<dyn LoginBoundary>,
    ) -> Result<Self, ApiError> {
        url::Url::parse(&config.base_url)
            .map_err(|e| ApiError::Config(format!("invalid base URL '{}': {e}", config.base_url)))?;

        let http_client = HttpClient::new(config.timeout, config.max_attempts)?;

        Ok(Self { http_client, config, credentials, login })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    #[instrument(skip(self), fields(path = %path))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(Method::GET, path, None).await
    }

    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let body = encode_body(body)?;
        self.execute(Method::POST, path, Some(body)).await
    }

    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn put<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let body = encode_body(body)?;
        self.execute(Method::PUT, path, Some(body)).await
    }

    #[instrument(skip(self), fields(path = %path))]
    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.execute(Method::DELETE, path, None).await
    }

    async fn execute<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<R, ApiError> {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);
        debug!(%method, url = %url, "API request");

        let mut request =
            self.http_client.request(method.clone(), &url).header(CONTENT_TYPE, "application/json");
        match self.credentials.load() {
            Ok(Some(token)) => request = request.bearer_auth(token),
            Ok(None) => {}
            Err(err) => warn!(error = %err, "credential slot unreadable; sending without token"),
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = self.http_client.send(request).await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            self.invalidate_session();
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::map_status_error(status, body));
        }

        // 204/205 and empty 2xx bodies decode as JSON null (unit for `()`)
        let text = if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT {
            String::new()
        } else {
            response.text().await.map_err(|e| ApiError::Network(e.to_string()))?
        };
        let decoded = if text.trim().is_empty() {
            serde_json::from_value(serde_json::Value::Null)
        } else {
            serde_json::from_str(&text)
        };

        debug!(%method, %status, "API request successful");
        decoded.map_err(|e| ApiError::Decode(format!("{method} {path}: {e}")))
    }

    fn invalidate_session(&self) {
        warn!("credential rejected by backend; clearing session");
        if let Err(err) = self.credentials.clear() {
            warn!(error = %err, "failed to clear credential slot");
        }
        self.login.redirect_to_login();
    }

    fn map_status_error(status: StatusCode, body: String) -> ApiError {
        ApiError::Status {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            body,
        }
    }
}

fn encode_body<B: Serialize + ?Sized>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Config(format!("Failed to serialize body: {e}")))
}
