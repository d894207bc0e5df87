//! Common utilities for the ARM API client
//!
//! Provides the authenticated HTTP wrapper shared by all resource modules.

use crate::error::ArmError;
use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

/// HTTP client wrapper with bearer-token authentication
///
/// Every request carries an `x-ms-correlation-request-id` so a whole
/// provisioning pass can be traced in the Azure activity log.
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: String,
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // token deliberately omitted
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Create a new HTTP client wrapper
    pub fn new(client: Client, base_url: String, token: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a resource by its ARM id path (e.g. `/subscriptions/.../virtualNetworks/x`)
    pub async fn get<T: DeserializeOwned>(
        &self,
        id_path: &str,
        api_version: &str,
    ) -> Result<T, ArmError> {
        let url = format!("{}{}?api-version={}", self.base_url, id_path, api_version);
        debug!("GET {}", id_path);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .header("Accept", "application/json")
            .header("x-ms-correlation-request-id", uuid::Uuid::new_v4().to_string())
            .send()
            .await?;

        self.decode(id_path, response).await
    }

    /// PUT (create-or-update) a resource at its ARM id path
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        id_path: &str,
        api_version: &str,
        body: &B,
    ) -> Result<T, ArmError> {
        let url = format!("{}{}?api-version={}", self.base_url, id_path, api_version);
        debug!("PUT {}", id_path);

        let response = self
            .client
            .put(&url)
            .bearer_auth(&self.token)
            .header("Accept", "application/json")
            .header("x-ms-correlation-request-id", uuid::Uuid::new_v4().to_string())
            .json(body)
            .send()
            .await?;

        self.decode(id_path, response).await
    }

    /// Map an ARM response to a typed result, with a readable error body excerpt
    async fn decode<T: DeserializeOwned>(
        &self,
        id_path: &str,
        response: reqwest::Response,
    ) -> Result<T, ArmError> {
        let status = response.status();

        if status == 404 {
            return Err(ArmError::NotFound(format!("{} not found", id_path)));
        }
        if status == 401 || status == 403 {
            let body = response.text().await.unwrap_or_default();
            return Err(ArmError::Authentication(format!("{} - {}", status, body)));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ArmError::Api(format!(
                "{} failed: {} - {}",
                id_path, status, body
            )));
        }

        // Capture the body so decode failures carry a useful excerpt
        let response_text = response.text().await?;
        serde_json::from_str(&response_text).map_err(|e| {
            ArmError::Api(format!(
                "error decoding response body: {} - Response (first 500 chars): {}",
                e,
                response_text.chars().take(500).collect::<String>()
            ))
        })
    }
}
