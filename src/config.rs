//! アプリケーション設定
//!
//! 起動時に TOML ファイルから一度だけ読み込まれ、その後は不変のまま
//! `Arc` 経由で各コンポーネントに注入されます。

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// アプリケーション全体の設定
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub analytics: AnalyticsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory served verbatim under `/.well-known/`
    pub well_known_dir: PathBuf,
    pub tls: TlsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            well_known_dir: PathBuf::from(".well-known"),
            tls: TlsConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TlsConfig {
    pub enabled: bool,
    pub privkey: PathBuf,
    pub cert: PathBuf,
}

impl Default for TlsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            privkey: PathBuf::from("privkey.pem"),
            cert: PathBuf::from("cert.pem"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.starlio.space".to_string(),
            timeout_secs: 3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub domain: String,
    pub endpoint: String,
    /// Bearer token for the events endpoint. Empty disables reporting.
    pub token: String,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            domain: "starlio.space".to_string(),
            endpoint: "https://plausible.io/api/event".to_string(),
            token: String::new(),
        }
    }
}

impl AnalyticsConfig {
    pub fn is_enabled(&self) -> bool {
        !self.token.trim().is_empty()
    }
}

impl AppConfig {
    /// 設定ファイルを読み込む
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// 設定ファイルが存在すれば読み込み、無ければデフォルト値を使う
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            let config = Self::default();
            config.validate()?;
            Ok(config)
        }
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Invalid("server.port must be non-zero".to_string()));
        }

        let tls = &self.server.tls;
        if tls.enabled && (tls.privkey.as_os_str().is_empty() || tls.cert.as_os_str().is_empty())
        {
            return Err(ConfigError::Invalid(
                "server.tls.privkey and server.tls.cert are required when TLS is enabled"
                    .to_string(),
            ));
        }

        if !is_http_url(&self.upstream.base_url) {
            return Err(ConfigError::Invalid(format!(
                "upstream.base_url must be an absolute http(s) URL: {}",
                self.upstream.base_url
            )));
        }

        if self.upstream.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "upstream.timeout_secs must be non-zero".to_string(),
            ));
        }

        if self.analytics.is_enabled() && !is_http_url(&self.analytics.endpoint) {
            return Err(ConfigError::Invalid(format!(
                "analytics.endpoint must be an absolute http(s) URL: {}",
                self.analytics.endpoint
            )));
        }

        Ok(())
    }

    /// ログ出力用にトークンを伏せたコピーを返す
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        if config.analytics.is_enabled() {
            config.analytics.token = "********".to_string();
        }
        config
    }

    /// Scheme the server is reachable under.
    pub fn scheme(&self) -> &'static str {
        if self.server.tls.enabled { "https" } else { "http" }
    }
}

fn is_http_url(value: &str) -> bool {
    reqwest::Url::parse(value)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
        .unwrap_or(false)
}
