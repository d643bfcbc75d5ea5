use super::{
    NotFoundReason, RenderContext, RenderResult, UpstreamBody, UpstreamResponse, WallpaperQuery,
};
use tracing::warn;

/// Decide whether an upstream answer is rendered or turned into a 404.
///
/// Any 4xx/5xx status is "not found" for both queries. The per-day query
/// additionally rejects an empty list, and a scalar body that cannot describe
/// a wallpaper. "Today" renders whatever a successful status carries.
pub fn classify(query: &WallpaperQuery, response: UpstreamResponse) -> RenderResult {
    if response.is_error_status() {
        return RenderResult::NotFound(NotFoundReason::UpstreamStatus(response.status));
    }

    if query.rejects_empty_result() {
        if response.body.is_empty_array() {
            return RenderResult::NotFound(NotFoundReason::EmptyResult);
        }
        if let UpstreamBody::Scalar(value) = &response.body {
            warn!(%query, kind = response.body.kind(), body = %value, "Wallpaper API returned an unexpected body");
            return RenderResult::NotFound(NotFoundReason::UnexpectedShape);
        }
    }

    RenderResult::Rendered(RenderContext {
        info: response.body.into_value(),
    })
}
