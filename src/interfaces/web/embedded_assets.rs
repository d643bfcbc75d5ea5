use axum::{
    body::Body,
    http::{StatusCode, header},
    response::Response,
};
use rust_embed::Embed;

/// ページ、テンプレート、静的アセットを埋め込む
#[derive(Embed)]
#[folder = "web/"]
#[include = "*"]
#[include = "**/*"]
pub struct WebAssets;

pub const INDEX_PAGE: &str = "html/index.html";
pub const WALLPAPER_TEMPLATE: &str = "html/wallpaper.html";
pub const NOT_FOUND_PAGE: &str = "html/error/404.html";
pub const BAD_GATEWAY_PAGE: &str = "html/error/502.html";
pub const INTERNAL_ERROR_PAGE: &str = "html/error/500.html";

/// Serve an embedded file verbatim with a content type guessed from its name.
pub fn asset_response(path: &str, status: StatusCode) -> Option<Response> {
    if path.split('/').any(|segment| segment == "..") {
        return None;
    }

    let content = WebAssets::get(path)?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    let mut response = Response::new(Body::from(content.data.into_owned()));
    *response.status_mut() = status;
    if let Ok(value) = header::HeaderValue::from_str(mime.as_ref()) {
        response.headers_mut().insert(header::CONTENT_TYPE, value);
    }
    Some(response)
}
