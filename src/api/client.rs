use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;
use tokio::time::timeout;

use crate::api::record::CharacterRecord;
use crate::config::ApiConfig;

/// Errors that can occur while fetching a character.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Failed to reach the API at all.
    #[error("request for character {id} failed: {source}")]
    Request {
        id: u16,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured total timeout.
    #[error("request for character {id} timed out after {duration}s")]
    Timeout { id: u16, duration: u64 },

    /// The API answered with a non-success status.
    #[error("character {id} request returned status {status}")]
    Status { id: u16, status: StatusCode },

    /// The response body was not JSON.
    #[error("character {id} response was not valid JSON: {source}")]
    Decode {
        id: u16,
        #[source]
        source: reqwest::Error,
    },
}

/// HTTP client for the character endpoint.
///
/// Request URLs are `{base_url}{id}`, matching the upstream API layout.
pub struct CharacterClient {
    client: Client,
    base_url: String,
    request_timeout: Duration,
}

impl CharacterClient {
    pub fn new(config: &ApiConfig) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .build()
            .expect("Failed to build API client");

        Self {
            client,
            base_url: config.base_url.clone(),
            request_timeout: Duration::from_secs(u64::from(config.timeout_seconds)),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a single character by id.
    pub async fn get_character(&self, id: u16) -> Result<CharacterRecord, ApiError> {
        let url = format!("{}{}", self.base_url, id);
        let result = timeout(self.request_timeout, self.do_get(id, &url)).await;

        match result {
            Ok(record) => record,
            Err(_) => Err(ApiError::Timeout {
                id,
                duration: self.request_timeout.as_secs(),
            }),
        }
    }

    async fn do_get(&self, id: u16, url: &str) -> Result<CharacterRecord, ApiError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ApiError::Request { id, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { id, status });
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|source| ApiError::Decode { id, source })?;

        Ok(CharacterRecord::from_value(payload))
    }
}
