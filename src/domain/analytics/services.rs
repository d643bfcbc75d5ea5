use super::{AnalyticsEvent, ClientAgent, EventProps, RequestSummary, TrafficSource};

/// Event name used when the request path is empty.
pub const NOT_FOUND_EVENT_NAME: &str = "404 - Not Found";

/// Client errors are never reported. Everything else, 5xx included, is.
pub fn should_report(status: u16) -> bool {
    !(400..=499).contains(&status)
}

pub fn event_name(path: &str) -> String {
    if path.is_empty() {
        NOT_FOUND_EVENT_NAME.to_string()
    } else {
        path.to_string()
    }
}

pub fn build_event(domain: &str, request: &RequestSummary, status: u16) -> AnalyticsEvent {
    let agent = request
        .user_agent
        .as_deref()
        .map(ClientAgent::parse)
        .unwrap_or_else(ClientAgent::unknown);

    AnalyticsEvent {
        domain: domain.to_string(),
        name: event_name(&request.path),
        url: request.url.clone(),
        props: EventProps {
            method: request.method.clone(),
            status_code: status,
            browser: agent.browser,
            os: agent.os,
            source: TrafficSource::from_header(request.referer.as_deref()).to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(path: &str, referer: Option<&str>) -> RequestSummary {
        RequestSummary {
            method: "GET".to_string(),
            path: path.to_string(),
            url: format!("https://starlio.space{path}"),
            user_agent: None,
            referer: referer.map(str::to_string),
        }
    }

    #[test]
    fn test_client_errors_are_skipped() {
        for status in [400, 401, 403, 404, 429, 499] {
            assert!(!should_report(status), "{status}");
        }
        for status in [200, 204, 301, 302, 304, 500, 502, 503, 599] {
            assert!(should_report(status), "{status}");
        }
    }

    #[test]
    fn test_event_name_fallback() {
        assert_eq!(event_name("/wallpaper/today"), "/wallpaper/today");
        assert_eq!(event_name(""), NOT_FOUND_EVENT_NAME);
    }

    #[test]
    fn test_build_event() {
        let event = build_event(
            "starlio.space",
            &request("/wallpaper/42", Some("https://t.co/")),
            503,
        );

        assert_eq!(event.domain, "starlio.space");
        assert_eq!(event.name, "/wallpaper/42");
        assert_eq!(event.url, "https://starlio.space/wallpaper/42");
        assert_eq!(event.props.method, "GET");
        assert_eq!(event.props.status_code, 503);
        assert_eq!(event.props.source, "https://t.co/");
        assert_eq!(event.props.browser, "Other");
        assert_eq!(event.props.os, "Other");
    }

    #[test]
    fn test_missing_referer_is_direct() {
        let event = build_event("starlio.space", &request("/", None), 200);
        assert_eq!(event.props.source, "direct");
    }

    #[test]
    fn test_empty_referer_is_kept() {
        let event = build_event("starlio.space", &request("/", Some("")), 200);
        assert_eq!(event.props.source, "");
    }
}
