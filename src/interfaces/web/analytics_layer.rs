use crate::application::use_cases::ReportRequestUseCase;
use crate::domain::analytics::RequestSummary;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Reports every finished request to the analytics collector.
pub struct AnalyticsReporter {
    use_case: ReportRequestUseCase,
    scheme: &'static str,
    /// Used for the event URL when the request carries no `Host`.
    default_authority: String,
}

impl AnalyticsReporter {
    pub fn new(
        use_case: ReportRequestUseCase,
        scheme: &'static str,
        default_authority: impl Into<String>,
    ) -> Self {
        Self {
            use_case,
            scheme,
            default_authority: default_authority.into(),
        }
    }

    fn summarize(&self, request: &Request) -> RequestSummary {
        let headers = request.headers();
        let header_str = |name: header::HeaderName| {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
        };

        let uri = request.uri();
        let authority = header_str(header::HOST)
            .or_else(|| uri.authority().map(|a| a.to_string()))
            .unwrap_or_else(|| self.default_authority.clone());
        let path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");

        RequestSummary {
            method: request.method().to_string(),
            path: uri.path().to_string(),
            url: format!("{}://{}{}", self.scheme, authority, path_and_query),
            user_agent: header_str(header::USER_AGENT),
            referer: header_str(header::REFERER),
        }
    }
}

/// Middleware body: run the rest of the stack, then hand the outcome to the
/// reporter without waiting for delivery.
pub async fn report_analytics(
    State(reporter): State<Arc<AnalyticsReporter>>,
    request: Request,
    next: Next,
) -> Response {
    let summary = reporter.summarize(&request);
    let response = next.run(request).await;
    reporter
        .use_case
        .report(summary, response.status().as_u16());
    response
}
