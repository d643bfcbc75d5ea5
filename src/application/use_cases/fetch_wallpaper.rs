use crate::domain::wallpaper::{
    RenderResult, WallpaperError, WallpaperQuery, WallpaperSource, classify,
};
use crate::measure_time;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Fetch a wallpaper from upstream and decide how it is presented.
pub struct FetchWallpaperUseCase {
    source: Arc<dyn WallpaperSource>,
}

impl FetchWallpaperUseCase {
    pub fn new(source: Arc<dyn WallpaperSource>) -> Self {
        Self { source }
    }

    pub async fn fetch_today(&self) -> Result<RenderResult, WallpaperError> {
        self.execute(WallpaperQuery::Today).await
    }

    pub async fn fetch_by_day(&self, day: &str) -> Result<RenderResult, WallpaperError> {
        self.execute(WallpaperQuery::day(day)).await
    }

    pub async fn execute(&self, query: WallpaperQuery) -> Result<RenderResult, WallpaperError> {
        debug!(%query, "Fetching wallpaper");

        let response = measure_time!("wallpaper_fetch", { self.source.fetch(&query).await })
            .inspect_err(|e| {
                warn!(%query, error = %e, transient = e.is_transient(), "Wallpaper API call failed")
            })?;

        let status = response.status;
        let result = classify(&query, response);
        match &result {
            RenderResult::Rendered(_) => info!(%query, status, "Wallpaper fetched"),
            RenderResult::NotFound(reason) => {
                info!(%query, status, %reason, "Wallpaper not found")
            }
        }

        Ok(result)
    }
}
