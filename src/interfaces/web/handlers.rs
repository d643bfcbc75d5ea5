use super::embedded_assets::{INDEX_PAGE, asset_response};
use super::error_response::ErrorPage;
use super::pages::PageRenderer;
use crate::application::use_cases::FetchWallpaperUseCase;
use crate::domain::wallpaper::RenderResult;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{debug, error};

/// Shared, read-only state for the page handlers.
pub struct AppState {
    pub pages: PageRenderer,
    pub wallpapers: FetchWallpaperUseCase,
}

impl AppState {
    pub fn new(pages: PageRenderer, wallpapers: FetchWallpaperUseCase) -> Self {
        Self { pages, wallpapers }
    }
}

/// Landing page
pub async fn index() -> Result<Response, ErrorPage> {
    embedded(INDEX_PAGE)
}

pub async fn robots_txt() -> Result<Response, ErrorPage> {
    embedded("robots.txt")
}

pub async fn app_ads_txt() -> Result<Response, ErrorPage> {
    embedded("app-ads.txt")
}

/// Files under `/static/`
pub async fn static_asset(Path(path): Path<String>) -> Result<Response, ErrorPage> {
    asset_response(&format!("static/{path}"), StatusCode::OK).ok_or(ErrorPage::NotFound)
}

/// Wallpaper of the day
pub async fn wallpaper_today(State(state): State<Arc<AppState>>) -> Result<Html<String>, ErrorPage> {
    let result = state.wallpapers.fetch_today().await?;
    render_wallpaper(&state, result)
}

/// Wallpaper for a given day
pub async fn wallpaper_by_day(
    State(state): State<Arc<AppState>>,
    Path(day): Path<String>,
) -> Result<Html<String>, ErrorPage> {
    let result = state.wallpapers.fetch_by_day(&day).await?;
    render_wallpaper(&state, result)
}

/// Anything no route matched
pub async fn not_found() -> impl IntoResponse {
    ErrorPage::NotFound
}

fn render_wallpaper(state: &AppState, result: RenderResult) -> Result<Html<String>, ErrorPage> {
    match result {
        RenderResult::Rendered(context) => state
            .pages
            .render_wallpaper(&context)
            .map(Html)
            .map_err(|e| {
                error!(error = %e, "Failed to render wallpaper template");
                ErrorPage::Internal
            }),
        RenderResult::NotFound(reason) => {
            debug!(%reason, "Serving not-found page for wallpaper");
            Err(ErrorPage::NotFound)
        }
    }
}

fn embedded(path: &str) -> Result<Response, ErrorPage> {
    asset_response(path, StatusCode::OK).ok_or_else(|| {
        error!(path, "Embedded page is missing");
        ErrorPage::Internal
    })
}
