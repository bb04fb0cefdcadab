//! Thin client for the records API.
//!
//! The container treats the API as an opaque collaborator: a request
//! either returns a decoded payload or fails with an [`ApiError`].
//! Consumers fetch payloads here and dispatch the results; the store
//! itself never performs network IO.

use serde::de::DeserializeOwned;

use crate::config;
use crate::models::UserProfile;

/// Errors from the records API client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Cannot reach records API at {0}")]
    Connection(String),
    #[error("Request timed out after {0}s")]
    Timeout(u64),
    #[error("API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to decode API response: {0}")]
    Decode(String),
}

/// Source of fresh user profiles. The bootstrap reconciles the
/// optimistically restored session against this.
pub trait ProfileApi {
    fn fetch_profile(
        &self,
        token: &str,
    ) -> impl std::future::Future<Output = Result<UserProfile, ApiError>> + Send;
}

/// HTTP client for the records API with bearer-token auth.
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
    timeout_secs: u64,
}

impl ApiClient {
    /// Create a client for the given base URL.
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout_secs,
        }
    }

    /// Client for the default local API with a 30-second timeout.
    pub fn default_local() -> Self {
        Self::new(config::DEFAULT_API_BASE_URL, 30)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` with the bearer token and decode the JSON body.
    ///
    /// Payload types must mirror the state sub-tree field names; serde
    /// rejects mismatched shapes instead of silently storing them.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &str,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn map_transport_error(&self, e: reqwest::Error) -> ApiError {
        if e.is_connect() {
            ApiError::Connection(self.base_url.clone())
        } else if e.is_timeout() {
            ApiError::Timeout(self.timeout_secs)
        } else {
            ApiError::Decode(e.to_string())
        }
    }
}

impl ProfileApi for ApiClient {
    async fn fetch_profile(&self, token: &str) -> Result<UserProfile, ApiError> {
        self.get_json("/api/v1/auth/me", token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:8000/", 30);
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn default_local_points_at_configured_url() {
        let client = ApiClient::default_local();
        assert_eq!(client.base_url(), config::DEFAULT_API_BASE_URL);
    }

    #[test]
    fn error_messages_name_the_failure() {
        assert!(ApiError::Connection("http://x".into())
            .to_string()
            .contains("http://x"));
        assert!(ApiError::Status {
            status: 401,
            body: "expired".into()
        }
        .to_string()
        .contains("401"));
        assert!(ApiError::Timeout(30).to_string().contains("30"));
    }
}
