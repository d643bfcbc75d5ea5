//! HTTP client for a Plausible-compatible events endpoint

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderValue, USER_AGENT};

use crate::config::AnalyticsConfig;
use crate::domain::analytics::{AnalyticsError, AnalyticsEvent, EventSink};

pub struct PlausibleClient {
    http_client: reqwest::Client,
    endpoint: String,
    authorization: HeaderValue,
}

impl PlausibleClient {
    pub fn new(config: &AnalyticsConfig) -> Result<Self, AnalyticsError> {
        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", config.token))
            .map_err(|e| AnalyticsError::InvalidHeader(format!("invalid token: {e}")))?;
        authorization.set_sensitive(true);

        // No request timeout: delivery runs detached from the response.
        let http_client = reqwest::Client::builder()
            .build()
            .map_err(|e| AnalyticsError::Client(e.to_string()))?;

        Ok(Self {
            http_client,
            endpoint: config.endpoint.clone(),
            authorization,
        })
    }
}

#[async_trait]
impl EventSink for PlausibleClient {
    async fn send(&self, event: &AnalyticsEvent, user_agent: &str) -> Result<(), AnalyticsError> {
        let user_agent = HeaderValue::from_str(user_agent)
            .map_err(|e| AnalyticsError::InvalidHeader(format!("invalid user agent: {e}")))?;

        let response = self
            .http_client
            .post(&self.endpoint)
            .header(AUTHORIZATION, self.authorization.clone())
            .header(USER_AGENT, user_agent)
            .json(event)
            .send()
            .await
            .map_err(|e| AnalyticsError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown".to_string());
            Err(AnalyticsError::Rejected {
                status: status.as_u16(),
                body,
            })
        }
    }
}
