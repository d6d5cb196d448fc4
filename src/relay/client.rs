use super::types::BackendReply;
use crate::{Error, Result};
use async_trait::async_trait;
use axum::http::StatusCode;
use serde_json::Value;
use tracing::debug;

/// Outbound leg of the relay.
#[async_trait]
pub trait BackendTransport: Send + Sync {
    async fn post_json(&self, url: &str, body: &Value) -> Result<BackendReply>;

    async fn get_json(&self, url: &str) -> Result<BackendReply>;
}

/// reqwest-backed transport. No timeout and no retries: a hung backend
/// hangs the call.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    async fn read_reply(response: reqwest::Response) -> Result<BackendReply> {
        let status = StatusCode::from_u16(response.status().as_u16())
            .map_err(|e| Error::relay(format!("Invalid backend status: {}", e)))?;

        let body: Value = response
            .json()
            .await
            .map_err(|e| Error::relay(format!("Failed to parse backend response: {}", e)))?;

        debug!("Backend replied with status {}", status);

        Ok(BackendReply { status, body })
    }
}

#[async_trait]
impl BackendTransport for HttpTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<BackendReply> {
        debug!("POST {}", url);

        // `json` sets `Content-Type: application/json`.
        let response = self.client.post(url).json(body).send().await?;

        Self::read_reply(response).await
    }

    async fn get_json(&self, url: &str) -> Result<BackendReply> {
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        Self::read_reply(response).await
    }
}
