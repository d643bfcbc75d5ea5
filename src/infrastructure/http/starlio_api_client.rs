//! HTTP client for the Starlio wallpaper API

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::config::UpstreamConfig;
use crate::domain::wallpaper::{
    UpstreamResponse, WallpaperError, WallpaperQuery, WallpaperSource,
};

pub struct StarlioApiClient {
    http_client: reqwest::Client,
    base_url: String,
    timeout_secs: u64,
}

impl StarlioApiClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, WallpaperError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                WallpaperError::Unreachable(format!("failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout_secs: config.timeout_secs,
        })
    }

    fn url_for(&self, query: &WallpaperQuery) -> String {
        format!("{}{}", self.base_url, query.upstream_path())
    }

    fn map_transport_error(&self, e: reqwest::Error) -> WallpaperError {
        if e.is_timeout() {
            WallpaperError::Timeout(self.timeout_secs)
        } else {
            WallpaperError::Unreachable(e.to_string())
        }
    }
}

#[async_trait]
impl WallpaperSource for StarlioApiClient {
    async fn fetch(&self, query: &WallpaperQuery) -> Result<UpstreamResponse, WallpaperError> {
        let url = self.url_for(query);
        debug!(%url, "GET wallpaper API");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        // Error pages are classified by status alone, whatever their body is.
        let body = if status.is_client_error() || status.is_server_error() {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        } else {
            serde_json::from_slice(&bytes).map_err(|e| {
                WallpaperError::InvalidPayload(format!("{url} returned {status}: {e}"))
            })?
        };

        Ok(UpstreamResponse::new(status.as_u16(), body))
    }
}
