use crate::domain::analytics::{
    AnalyticsError, AnalyticsEvent, EventSink, RequestSummary, build_event, should_report,
};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

const FALLBACK_USER_AGENT: &str = "unknown";

/// Report completed requests to the analytics collector.
#[derive(Clone)]
pub struct ReportRequestUseCase {
    sink: Arc<dyn EventSink>,
    domain: String,
}

impl ReportRequestUseCase {
    pub fn new(sink: Arc<dyn EventSink>, domain: impl Into<String>) -> Self {
        Self {
            sink,
            domain: domain.into(),
        }
    }

    /// Derive the event for a finished request and deliver it in the background.
    ///
    /// Returns `None` when the response is a client error and nothing is sent.
    pub fn report(&self, request: RequestSummary, status: u16) -> Option<JoinHandle<()>> {
        if !should_report(status) {
            debug!(path = %request.path, status, "Skipping analytics for client error");
            return None;
        }

        let event = build_event(&self.domain, &request, status);
        let user_agent = request
            .user_agent
            .unwrap_or_else(|| FALLBACK_USER_AGENT.to_string());
        let this = self.clone();

        Some(tokio::spawn(async move {
            let _ = this.deliver(&event, &user_agent).await;
        }))
    }

    /// Send one event. Failures are logged and handed back, never retried.
    pub async fn deliver(
        &self,
        event: &AnalyticsEvent,
        user_agent: &str,
    ) -> Result<(), AnalyticsError> {
        match self.sink.send(event, user_agent).await {
            Ok(()) => {
                debug!(name = %event.name, status = event.props.status_code, "Analytics event sent");
                Ok(())
            }
            Err(e) => {
                warn!(name = %event.name, error = %e, "Error sending analytics event");
                Err(e)
            }
        }
    }
}
