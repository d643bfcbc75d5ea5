use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Opaque day identifier taken verbatim from the request path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayToken(String);

impl DayToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DayToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which wallpaper a request asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WallpaperQuery {
    Today,
    Day(DayToken),
}

impl WallpaperQuery {
    pub fn day(value: impl Into<String>) -> Self {
        Self::Day(DayToken::new(value))
    }

    /// Upstream path for this query, relative to the API base URL.
    pub fn upstream_path(&self) -> String {
        match self {
            WallpaperQuery::Today => "/last".to_string(),
            WallpaperQuery::Day(day) => {
                format!("/wallpaper/{}", urlencoding::encode(day.as_str()))
            }
        }
    }

    /// Only the per-day query treats an empty list as "nothing found".
    pub fn rejects_empty_result(&self) -> bool {
        matches!(self, WallpaperQuery::Day(_))
    }
}

impl fmt::Display for WallpaperQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WallpaperQuery::Today => f.write_str("today"),
            WallpaperQuery::Day(day) => write!(f, "day {day}"),
        }
    }
}

/// Shape of a decoded upstream document.
#[derive(Debug, Clone, PartialEq)]
pub enum UpstreamBody {
    Object(Map<String, Value>),
    Array(Vec<Value>),
    /// String, number, bool or null.
    Scalar(Value),
}

impl UpstreamBody {
    pub fn kind(&self) -> &'static str {
        match self {
            UpstreamBody::Object(_) => "object",
            UpstreamBody::Array(_) => "array",
            UpstreamBody::Scalar(_) => "scalar",
        }
    }

    /// `true` only for an array with no elements.
    pub fn is_empty_array(&self) -> bool {
        matches!(self, UpstreamBody::Array(items) if items.is_empty())
    }

    pub fn into_value(self) -> Value {
        match self {
            UpstreamBody::Object(map) => Value::Object(map),
            UpstreamBody::Array(items) => Value::Array(items),
            UpstreamBody::Scalar(value) => value,
        }
    }
}

impl From<Value> for UpstreamBody {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => UpstreamBody::Object(map),
            Value::Array(items) => UpstreamBody::Array(items),
            scalar => UpstreamBody::Scalar(scalar),
        }
    }
}
