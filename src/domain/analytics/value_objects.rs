use serde::{Deserialize, Serialize};
use std::fmt;
use woothee::parser::Parser;

const UNKNOWN_FAMILY: &str = "Other";

/// Browser and OS derived from a `User-Agent` header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientAgent {
    /// Browser family and version, e.g. `Chrome 120.0.0.0`
    pub browser: String,
    /// OS family and version
    pub os: String,
}

impl ClientAgent {
    pub fn parse(user_agent: &str) -> Self {
        match Parser::new().parse(user_agent) {
            Some(result) => Self {
                browser: describe(&*result.name, &*result.version),
                os: describe(&*result.os, &*result.os_version),
            },
            None => Self::unknown(),
        }
    }

    pub fn unknown() -> Self {
        Self {
            browser: UNKNOWN_FAMILY.to_string(),
            os: UNKNOWN_FAMILY.to_string(),
        }
    }
}

fn describe(family: &str, version: &str) -> String {
    let family = known(family).unwrap_or(UNKNOWN_FAMILY);
    match known(version) {
        Some(version) => format!("{family} {version}"),
        None => family.to_string(),
    }
}

fn known(value: &str) -> Option<&str> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("unknown") {
        None
    } else {
        Some(value)
    }
}

/// Where the visitor came from: the `Referer` header as sent, or a direct
/// visit when the header is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrafficSource {
    Referrer(String),
    Direct,
}

impl TrafficSource {
    pub fn from_header(referer: Option<&str>) -> Self {
        match referer {
            Some(value) => TrafficSource::Referrer(value.to_string()),
            None => TrafficSource::Direct,
        }
    }
}

impl fmt::Display for TrafficSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrafficSource::Referrer(value) => f.write_str(value),
            TrafficSource::Direct => f.write_str("direct"),
        }
    }
}
