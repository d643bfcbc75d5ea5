use super::{
    AnalyticsReporter, AppState, PageRenderer, app_ads_txt, index, not_found, report_analytics,
    robots_txt, static_asset, wallpaper_by_day, wallpaper_today,
};
use crate::application::use_cases::{FetchWallpaperUseCase, ReportRequestUseCase};
use crate::config::AppConfig;
use crate::infrastructure::http::{PlausibleClient, StarlioApiClient};
use axum::{Router, handler::HandlerWithoutStateExt, middleware, routing::get};
use axum_server::{Handle, tls_rustls::RustlsConfig};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;

/// Assemble the router. The analytics layer is only present when a reporter is given.
pub fn build_router(
    state: Arc<AppState>,
    reporter: Option<Arc<AnalyticsReporter>>,
    well_known_dir: &Path,
) -> Router {
    let well_known =
        ServeDir::new(well_known_dir).not_found_service(not_found.into_service());

    let router = Router::new()
        .route("/", get(index))
        .route("/wallpaper/today", get(wallpaper_today))
        .route("/wallpaper/{day}", get(wallpaper_by_day))
        .route("/app-ads.txt", get(app_ads_txt))
        .route("/robots.txt", get(robots_txt))
        .route("/static/{*path}", get(static_asset))
        .nest_service("/.well-known", well_known)
        .fallback(not_found)
        .with_state(state);

    let router = match reporter {
        Some(reporter) => router.layer(middleware::from_fn_with_state(reporter, report_analytics)),
        None => router,
    };

    router.layer(TraceLayer::new_for_http())
}

/// Wire the production clients from configuration.
pub fn build_app(config: &AppConfig) -> anyhow::Result<Router> {
    let wallpapers = FetchWallpaperUseCase::new(Arc::new(StarlioApiClient::new(&config.upstream)?));
    let state = Arc::new(AppState::new(PageRenderer::new()?, wallpapers));

    let reporter = if config.analytics.is_enabled() {
        let sink = Arc::new(PlausibleClient::new(&config.analytics)?);
        let use_case = ReportRequestUseCase::new(sink, config.analytics.domain.clone());
        info!(endpoint = %config.analytics.endpoint, "Analytics reporting enabled");
        Some(Arc::new(AnalyticsReporter::new(
            use_case,
            config.scheme(),
            format!("{}:{}", config.server.host, config.server.port),
        )))
    } else {
        info!("Analytics token not set, reporting disabled");
        None
    };

    Ok(build_router(state, reporter, &config.server.well_known_dir))
}

pub async fn create_server(config: AppConfig) -> anyhow::Result<()> {
    info!("Starting Starlio web server...");

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let app = build_app(&config)?;

    if config.server.tls.enabled {
        let _ = rustls::crypto::ring::default_provider().install_default();
        let tls = RustlsConfig::from_pem_file(&config.server.tls.cert, &config.server.tls.privkey)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to load TLS certificate: {}", e))?;

        let handle = Handle::new();
        let shutdown = handle.clone();
        tokio::spawn(async move {
            shutdown_signal().await;
            shutdown.graceful_shutdown(Some(Duration::from_secs(10)));
        });

        info!(%addr, "Listening with TLS");
        println!("🌐 Web server started: https://{addr}");
        axum_server::bind_rustls(addr, tls)
            .handle(handle)
            .serve(app.into_make_service())
            .await
            .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;
    } else {
        let listener = TcpListener::bind(&addr).await?;

        info!(%addr, "Listening");
        println!("🌐 Web server started: http://{addr}");
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;
    }

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::wallpaper::{UpstreamResponse, WallpaperError};
    use crate::test_support::{RecordingSink, StubWallpaperSource, spawn_server};
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
        routing::post,
    };
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;

    struct TestApp {
        router: Router,
        source: Arc<StubWallpaperSource>,
    }

    fn test_app(source: StubWallpaperSource, sink: Option<Arc<RecordingSink>>) -> TestApp {
        let source = Arc::new(source);
        let state = Arc::new(AppState::new(
            PageRenderer::new().unwrap(),
            FetchWallpaperUseCase::new(source.clone()),
        ));
        let reporter = sink.map(|sink| {
            Arc::new(AnalyticsReporter::new(
                ReportRequestUseCase::new(sink, "starlio.space"),
                "https",
                "localhost:8000",
            ))
        });
        let well_known = Path::new(env!("CARGO_MANIFEST_DIR")).join(".well-known");

        TestApp {
            router: build_router(state, reporter, &well_known),
            source,
        }
    }

    fn upstream(status: u16, body: serde_json::Value) -> StubWallpaperSource {
        StubWallpaperSource::new(UpstreamResponse::new(status, body))
    }

    async fn get(router: &Router, uri: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .uri(uri)
            .header(header::HOST, "starlio.space")
            .header(header::USER_AGENT, "curl/8.0")
            .body(Body::empty())
            .unwrap();
        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    async fn wait_for(sink: &RecordingSink) {
        tokio::time::timeout(Duration::from_secs(2), sink.wait_for_delivery())
            .await
            .expect("no analytics event was delivered");
    }

    async fn settle() {
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    #[tokio::test]
    async fn test_today_renders_upstream_info() {
        let app = test_app(upstream(200, json!({"id": 7})), None);

        let (status, body) = get(&app.router, "/wallpaper/today").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"{"id":7}"#), "{body}");
    }

    #[tokio::test]
    async fn test_today_upstream_error_is_not_found() {
        let app = test_app(upstream(503, json!(null)), None);

        let (status, body) = get(&app.router, "/wallpaper/today").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("404 - Not Found"));
    }

    #[tokio::test]
    async fn test_day_empty_list_is_not_found() {
        let app = test_app(upstream(200, json!([])), None);

        let (status, _) = get(&app.router, "/wallpaper/42").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            app.source.queries(),
            vec![crate::domain::wallpaper::WallpaperQuery::day("42")]
        );
    }

    #[tokio::test]
    async fn test_today_empty_list_still_renders() {
        let app = test_app(upstream(200, json!([])), None);

        let (status, body) = get(&app.router, "/wallpaper/today").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("[]"));
    }

    #[tokio::test]
    async fn test_repeated_requests_are_not_cached() {
        let app = test_app(upstream(200, json!({"id": 1})), None);

        get(&app.router, "/wallpaper/today").await;
        get(&app.router, "/wallpaper/today").await;
        get(&app.router, "/wallpaper/5").await;
        assert_eq!(app.source.call_count(), 3);
    }

    #[tokio::test]
    async fn test_transport_failure_is_bad_gateway() {
        let app = test_app(
            StubWallpaperSource::failing(|| WallpaperError::Unreachable("refused".to_string())),
            None,
        );

        let (status, body) = get(&app.router, "/wallpaper/today").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body.contains("502"));
    }

    #[tokio::test]
    async fn test_fixed_pages() {
        let app = test_app(upstream(200, json!({})), None);

        let (status, body) = get(&app.router, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<h1>Starlio</h1>"));

        let (status, body) = get(&app.router, "/robots.txt").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with("User-agent: *"));

        let (status, _) = get(&app.router, "/app-ads.txt").await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = get(&app.router, "/static/script/placeholder.js").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("data-src"));

        let (status, body) = get(&app.router, "/.well-known/security.txt").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with("Contact:"));
        assert_eq!(app.source.call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_files_and_unknown_routes_are_not_found() {
        let app = test_app(upstream(200, json!({})), None);

        for uri in [
            "/does-not-exist",
            "/static/missing.css",
            "/.well-known/missing.txt",
            "/wallpaper",
        ] {
            let (status, body) = get(&app.router, uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
            assert!(body.contains("404 - Not Found"), "{uri}");
        }
    }

    #[tokio::test]
    async fn test_successful_request_is_reported_once() {
        let sink = Arc::new(RecordingSink::new());
        let app = test_app(upstream(200, json!({"id": 7})), Some(sink.clone()));

        let (status, _) = get(&app.router, "/wallpaper/today").await;
        assert_eq!(status, StatusCode::OK);
        wait_for(&sink).await;
        settle().await;

        let events = sink.events();
        assert_eq!(events.len(), 1);
        let (event, user_agent) = &events[0];
        assert_eq!(event.domain, "starlio.space");
        assert_eq!(event.name, "/wallpaper/today");
        assert_eq!(event.url, "https://starlio.space/wallpaper/today");
        assert_eq!(event.props.method, "GET");
        assert_eq!(event.props.status_code, 200);
        assert_eq!(event.props.source, "direct");
        assert_eq!(user_agent, "curl/8.0");
    }

    #[tokio::test]
    async fn test_server_error_is_reported() {
        let sink = Arc::new(RecordingSink::new());
        let app = test_app(
            StubWallpaperSource::failing(|| WallpaperError::Timeout(3)),
            Some(sink.clone()),
        );

        let (status, _) = get(&app.router, "/wallpaper/today").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        wait_for(&sink).await;
        assert_eq!(sink.events()[0].0.props.status_code, 502);
    }

    #[tokio::test]
    async fn test_client_errors_are_not_reported() {
        let sink = Arc::new(RecordingSink::new());
        let app = test_app(upstream(503, json!(null)), Some(sink.clone()));

        let (status, _) = get(&app.router, "/does-not-exist").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = get(&app.router, "/wallpaper/today").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        settle().await;
        assert!(sink.events().is_empty());
    }

    #[tokio::test]
    async fn test_referer_becomes_source() {
        let sink = Arc::new(RecordingSink::new());
        let app = test_app(upstream(200, json!({})), Some(sink.clone()));

        let request = Request::builder()
            .uri("/")
            .header(header::REFERER, "https://news.example/")
            .body(Body::empty())
            .unwrap();
        app.router.clone().oneshot(request).await.unwrap();
        wait_for(&sink).await;

        let (event, user_agent) = &sink.events()[0];
        assert_eq!(event.props.source, "https://news.example/");
        assert_eq!(event.url, "https://localhost:8000/");
        assert_eq!(user_agent, "unknown");
    }

    #[tokio::test]
    async fn test_delivery_failure_does_not_touch_response() {
        let sink = Arc::new(RecordingSink::failing());
        let app = test_app(upstream(200, json!({"id": 7})), Some(sink.clone()));
        let baseline = test_app(upstream(200, json!({"id": 7})), None);

        let reported = get(&app.router, "/wallpaper/today").await;
        let plain = get(&baseline.router, "/wallpaper/today").await;
        wait_for(&sink).await;

        assert_eq!(reported, plain);
    }

    async fn collector() -> (String, Arc<AtomicUsize>) {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let router = Router::new().route(
            "/api/event",
            post(move || {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    StatusCode::ACCEPTED
                }
            }),
        );
        (spawn_server(router).await, hits)
    }

    fn config(collector: &str, token: &str) -> AppConfig {
        let mut config = AppConfig::default();
        config.analytics.endpoint = format!("{collector}/api/event");
        config.analytics.token = token.to_string();
        config.server.well_known_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join(".well-known");
        config
    }

    #[tokio::test]
    async fn test_build_app_without_token_sends_nothing() {
        let (base, hits) = collector().await;
        let router = build_app(&config(&base, "")).unwrap();

        for _ in 0..3 {
            let (status, _) = get(&router, "/").await;
            assert_eq!(status, StatusCode::OK);
        }

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_build_app_with_token_posts_events() {
        let (base, hits) = collector().await;
        let router = build_app(&config(&base, "secret")).unwrap();

        let (status, _) = get(&router, "/").await;
        assert_eq!(status, StatusCode::OK);

        let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
        while hits.load(Ordering::SeqCst) == 0 && tokio::time::Instant::now() < deadline {
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
