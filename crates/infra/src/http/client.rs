//! HTTP transport with a per-call deadline and optional retry
//!
//! The deadline covers every attempt and backoff of one call. Server errors
//! and connection failures are retried until the attempt count is used up;
//! any other status is handed back as a response.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response};
use tracing::debug;
use workboard_domain::WorkboardError;

use crate::api::ApiError;
use crate::errors::InfraError;

const USER_AGENT: &str = concat!("workboard/", env!("CARGO_PKG_VERSION"));
const BASE_BACKOFF: Duration = Duration::from_millis(200);

#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    deadline: Duration,
    max_attempts: usize,
}

impl HttpClient {
    /// Client whose calls give up after `deadline`, making at most
    /// `max_attempts` tries (at least one).
    pub fn new(deadline: Duration, max_attempts: usize) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .no_proxy()
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client, deadline, max_attempts: max_attempts.max(1) })
    }

    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    pub fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client.request(method, url)
    }

    /// Send `builder`, retrying per the attempt count, within the deadline.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        tokio::time::timeout(self.deadline, self.send_with_retry(builder))
            .await
            .map_err(|_| ApiError::Timeout(self.deadline))?
    }

    async fn send_with_retry(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        for attempt in 1..=self.max_attempts {
            // JSON bodies are buffered, so cloning only fails for streams
            let request = builder
                .try_clone()
                .ok_or_else(|| ApiError::Config("request body cannot be replayed".to_string()))?;
            let last = attempt == self.max_attempts;

            match request.send().await {
                Ok(response) if response.status().is_server_error() && !last => {
                    debug!(attempt, status = %response.status(), "server error; retrying");
                }
                Ok(response) => return Ok(response),
                Err(err) if !last && is_retryable(&err) => {
                    debug!(attempt, error = %err, "transport failure; retrying");
                }
                Err(err) => return Err(ApiError::from(WorkboardError::from(InfraError::from(err)))),
            }

            tokio::time::sleep(backoff(attempt)).await;
        }

        Err(ApiError::Network("no attempt was made".to_string()))
    }
}

/// Delay after the `attempt`-th try: 200ms, 400ms, 800ms, ...
fn backoff(attempt: usize) -> Duration {
    #[allow(clippy::cast_possible_truncation)]
    let shift = attempt.saturating_sub(1).min(8) as u32;
    BASE_BACKOFF.saturating_mul(1 << shift)
}

fn is_retryable(err: &reqwest::Error) -> bool {
    err.is_connect() || err.is_timeout()
}
