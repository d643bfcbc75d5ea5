use super::{UpstreamResponse, WallpaperError, WallpaperQuery};
use async_trait::async_trait;

/// Source of wallpaper metadata. Every call goes to the source; nothing is cached.
#[async_trait]
pub trait WallpaperSource: Send + Sync {
    async fn fetch(&self, query: &WallpaperQuery) -> Result<UpstreamResponse, WallpaperError>;
}
