// file: src/poller/client.rs
// description: HTTP client for the traffic controller status endpoint
// reference: https://docs.rs/reqwest

use crate::config::PollerConfig;
use crate::error::{MonitorError, Result};
use crate::models::StatusPayload;
use reqwest::Client;
use std::future::Future;
use tracing::debug;

/// Anything that can produce the controller's current status.
pub trait StatusSource: Send + Sync {
    fn fetch(&self) -> impl Future<Output = Result<StatusPayload>> + Send;
}

pub struct StatusClient {
    client: Client,
    endpoint: String,
}

impl StatusClient {
    pub fn new(config: &PollerConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| MonitorError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn fetch_status(&self) -> Result<StatusPayload> {
        let response = self
            .client
            .get(&self.endpoint)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                MonitorError::UpdateFailed(format!("Failed to send status request: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(MonitorError::UpdateFailed(format!(
                "Status request failed with status {}: {}",
                status, error_text
            )));
        }

        let body = response.text().await.map_err(|e| {
            MonitorError::UpdateFailed(format!("Failed to read status response: {}", e))
        })?;

        let payload: StatusPayload = serde_json::from_str(&body).map_err(|e| {
            MonitorError::UpdateFailed(format!("Failed to parse status response: {}", e))
        })?;

        debug!(
            "Received status step={} with {} lanes",
            payload.current_step,
            payload.lanes.len()
        );

        Ok(payload)
    }
}

impl StatusSource for StatusClient {
    async fn fetch(&self) -> Result<StatusPayload> {
        self.fetch_status().await
    }
}
