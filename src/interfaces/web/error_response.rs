use super::embedded_assets::{
    BAD_GATEWAY_PAGE, INTERNAL_ERROR_PAGE, NOT_FOUND_PAGE, asset_response,
};
use crate::domain::wallpaper::WallpaperError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

/// Fixed error documents shown to visitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPage {
    NotFound,
    BadGateway,
    Internal,
}

impl ErrorPage {
    pub fn status(&self) -> StatusCode {
        match self {
            ErrorPage::NotFound => StatusCode::NOT_FOUND,
            ErrorPage::BadGateway => StatusCode::BAD_GATEWAY,
            ErrorPage::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn document(&self) -> &'static str {
        match self {
            ErrorPage::NotFound => NOT_FOUND_PAGE,
            ErrorPage::BadGateway => BAD_GATEWAY_PAGE,
            ErrorPage::Internal => INTERNAL_ERROR_PAGE,
        }
    }
}

impl From<WallpaperError> for ErrorPage {
    fn from(_: WallpaperError) -> Self {
        ErrorPage::BadGateway
    }
}

impl IntoResponse for ErrorPage {
    fn into_response(self) -> Response {
        let status = self.status();
        match asset_response(self.document(), status) {
            Some(response) => response,
            None => {
                error!(document = self.document(), "Error document is not embedded");
                (
                    status,
                    status.canonical_reason().unwrap_or("Unknown Error"),
                )
                    .into_response()
            }
        }
    }
}
