use thiserror::Error;

/// Failures talking to the wallpaper API itself, as opposed to a
/// well-formed "nothing here" answer.
#[derive(Error, Debug)]
pub enum WallpaperError {
    #[error("Wallpaper API did not respond within {0} seconds")]
    Timeout(u64),

    #[error("Wallpaper API unreachable: {0}")]
    Unreachable(String),

    #[error("Wallpaper API returned an invalid payload: {0}")]
    InvalidPayload(String),
}

impl WallpaperError {
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            WallpaperError::Timeout(_) | WallpaperError::Unreachable(_)
        )
    }
}
