use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::debug;

use crate::api::error::ApiError;
use crate::config::ApiConfig;

/// JSON-over-HTTP access used by the orchestrator.
///
/// Paths are relative to the API base URL (e.g. `/charities`).
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, path: &str) -> Result<Value, ApiError>;

    async fn post(&self, path: &str, body: Value) -> Result<Value, ApiError>;
}

/// [`HttpClient`] backed by `reqwest`.
pub struct ReqwestClient {
    client: Client,
    base_url: String,
}

impl ReqwestClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ApiError::InvalidUrl(config.base_url.clone()));
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .build()
            .map_err(|e| ApiError::Connection {
                url: base_url.clone(),
                source: e,
            })?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn read_json(url: &str, resp: Response) -> Result<Value, ApiError> {
        let status = resp.status();
        let bytes = resp.bytes().await.map_err(|e| map_send_error(url, e))?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}

fn map_send_error(url: &str, err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout {
            url: url.to_string(),
        }
    } else {
        ApiError::Connection {
            url: url.to_string(),
            source: err,
        }
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.url(path);
        debug!(%url, "GET");
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| map_send_error(&url, e))?;
        Self::read_json(&url, resp).await
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        let url = self.url(path);
        debug!(%url, "POST");
        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| map_send_error(&url, e))?;
        Self::read_json(&url, resp).await
    }
}
