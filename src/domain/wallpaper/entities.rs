use super::value_objects::UpstreamBody;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Status and decoded body returned by the wallpaper API.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: UpstreamBody,
}

impl UpstreamResponse {
    pub fn new(status: u16, body: impl Into<UpstreamBody>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 4xx or 5xx.
    pub fn is_error_status(&self) -> bool {
        (400..=599).contains(&self.status)
    }
}

/// Data bound into the wallpaper template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderContext {
    pub info: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundReason {
    /// Upstream answered with a 4xx/5xx status.
    UpstreamStatus(u16),
    /// Per-day lookup returned an empty list.
    EmptyResult,
    /// Per-day lookup returned something that is neither an object nor a list.
    UnexpectedShape,
}

impl fmt::Display for NotFoundReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotFoundReason::UpstreamStatus(status) => write!(f, "upstream status {status}"),
            NotFoundReason::EmptyResult => f.write_str("empty result"),
            NotFoundReason::UnexpectedShape => f.write_str("unexpected body shape"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderResult {
    Rendered(RenderContext),
    NotFound(NotFoundReason),
}

impl RenderResult {
    pub fn is_rendered(&self) -> bool {
        matches!(self, RenderResult::Rendered(_))
    }
}
