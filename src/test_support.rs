//! テスト用のヘルパー
//!
//! 外部APIの代わりに使うインメモリ実装

use crate::domain::analytics::{AnalyticsError, AnalyticsEvent, EventSink};
use crate::domain::wallpaper::{
    UpstreamResponse, WallpaperError, WallpaperQuery, WallpaperSource,
};
use async_trait::async_trait;
use std::sync::Mutex;
use tokio::sync::Notify;

type ErrorFactory = Box<dyn Fn() -> WallpaperError + Send + Sync>;

/// Answers every query with the same canned response and records what was asked.
pub struct StubWallpaperSource {
    response: Option<UpstreamResponse>,
    error: Option<ErrorFactory>,
    queries: Mutex<Vec<WallpaperQuery>>,
}

impl StubWallpaperSource {
    pub fn new(response: UpstreamResponse) -> Self {
        Self {
            response: Some(response),
            error: None,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: impl Fn() -> WallpaperError + Send + Sync + 'static) -> Self {
        Self {
            response: None,
            error: Some(Box::new(error)),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<WallpaperQuery> {
        self.queries.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }
}

#[async_trait]
impl WallpaperSource for StubWallpaperSource {
    async fn fetch(&self, query: &WallpaperQuery) -> Result<UpstreamResponse, WallpaperError> {
        self.queries.lock().unwrap().push(query.clone());
        match (&self.response, &self.error) {
            (_, Some(error)) => Err(error()),
            (Some(response), None) => Ok(response.clone()),
            (None, None) => Err(WallpaperError::Unreachable("no stub response".to_string())),
        }
    }
}

/// Keeps every delivered event, optionally failing each delivery.
pub struct RecordingSink {
    fail: bool,
    events: Mutex<Vec<(AnalyticsEvent, String)>>,
    delivered: Notify,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            fail: false,
            events: Mutex::new(Vec::new()),
            delivered: Notify::new(),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub fn events(&self) -> Vec<(AnalyticsEvent, String)> {
        self.events.lock().unwrap().clone()
    }

    /// Wait until at least one delivery attempt has been made.
    pub async fn wait_for_delivery(&self) {
        let notified = self.delivered.notified();
        if !self.events.lock().unwrap().is_empty() {
            return;
        }
        notified.await;
    }
}

#[async_trait]
impl EventSink for RecordingSink {
    async fn send(&self, event: &AnalyticsEvent, user_agent: &str) -> Result<(), AnalyticsError> {
        self.events
            .lock()
            .unwrap()
            .push((event.clone(), user_agent.to_string()));
        self.delivered.notify_waiters();
        if self.fail {
            Err(AnalyticsError::Transport("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

/// Serve `router` on an ephemeral localhost port and return its base URL.
pub async fn spawn_server(router: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}
