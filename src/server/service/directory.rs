//! Access to the user/coach directory owned by the auth service.
//!
//! Services depend on the `UserDirectory` trait rather than on an HTTP client, so the
//! directory is injected through `AppState` and replaced by a stub in tests. Lookups never
//! fail the caller: errors, timeouts and misses all degrade to `None` (or an empty list) and
//! are logged at `warn`.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

use crate::server::model::directory::UserProfile;

#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Looks up a user that holds the coach role
    async fn get_coach(&self, coach_id: &str) -> Option<UserProfile>;

    /// Looks up any user
    async fn get_user(&self, user_id: &str) -> Option<UserProfile>;

    /// Lists every coach
    async fn get_all_coaches(&self) -> Vec<UserProfile>;
}

/// Directory backed by the auth service's HTTP API.
pub struct HttpUserDirectory {
    client: reqwest::Client,
    base_url: Url,
    timeout: Duration,
}

impl HttpUserDirectory {
    /// Creates a directory client.
    ///
    /// # Arguments
    /// - `client` - Shared HTTP client
    /// - `base_url` - Base URL of the auth service API, ending in `/`
    /// - `timeout` - Upper bound for a single lookup
    pub fn new(client: reqwest::Client, base_url: Url, timeout: Duration) -> Self {
        Self {
            client,
            base_url,
            timeout,
        }
    }

    /// Fetches and decodes `path` relative to the base URL.
    ///
    /// # Returns
    /// - `Some(T)` - Successful response body
    /// - `None` - 404, any other failure, or the lookup exceeded the timeout
    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Option<T> {
        let url = match self.base_url.join(path) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!("Invalid directory path {}: {}", path, e);
                return None;
            }
        };

        let request = async {
            let response = self.client.get(url.clone()).send().await?;

            if response.status() == reqwest::StatusCode::NOT_FOUND {
                return Ok(None);
            }

            let body = response.error_for_status()?.json::<T>().await?;

            Ok::<Option<T>, reqwest::Error>(Some(body))
        };

        match tokio::time::timeout(self.timeout, request).await {
            Ok(Ok(Some(body))) => Some(body),
            Ok(Ok(None)) => {
                tracing::warn!("Directory lookup {} returned not found", url);
                None
            }
            Ok(Err(e)) => {
                tracing::warn!("Directory lookup {} failed: {}", url, e);
                None
            }
            Err(_) => {
                tracing::warn!(
                    "Directory lookup {} timed out after {} ms",
                    url,
                    self.timeout.as_millis()
                );
                None
            }
        }
    }
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn get_coach(&self, coach_id: &str) -> Option<UserProfile> {
        self.fetch(&format!("coaches/{}", coach_id)).await
    }

    async fn get_user(&self, user_id: &str) -> Option<UserProfile> {
        self.fetch(&format!("users/{}", user_id)).await
    }

    async fn get_all_coaches(&self) -> Vec<UserProfile> {
        self.fetch("coaches").await.unwrap_or_default()
    }
}
