use super::{AnalyticsError, AnalyticsEvent};
use async_trait::async_trait;

/// Destination for analytics events.
#[async_trait]
pub trait EventSink: Send + Sync {
    /// Deliver one event. `user_agent` is the visitor's own agent string and
    /// is sent as the outbound `User-Agent`.
    async fn send(&self, event: &AnalyticsEvent, user_agent: &str) -> Result<(), AnalyticsError>;
}
