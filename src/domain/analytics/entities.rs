use serde::{Deserialize, Serialize};

/// The parts of an incoming request the reporter needs once the response is done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSummary {
    pub method: String,
    pub path: String,
    pub url: String,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
}

/// Event payload posted to the analytics collector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub domain: String,
    pub name: String,
    pub url: String,
    pub props: EventProps,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventProps {
    pub method: String,
    pub status_code: u16,
    pub browser: String,
    pub os: String,
    pub source: String,
}
