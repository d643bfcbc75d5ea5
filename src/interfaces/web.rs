//! Web インターフェース
//!
//! ランディングページ、壁紙ページ、静的ファイルの配信と、
//! 全リクエストを対象としたアクセス解析ミドルウェアを提供します。

mod analytics_layer;
mod embedded_assets;
mod error_response;
mod handlers;
mod pages;

pub mod server;

// 内部使用のため、必要な型のみを再エクスポート
pub use analytics_layer::AnalyticsReporter;
pub use handlers::AppState;
pub use pages::PageRenderer;

pub(crate) use analytics_layer::report_analytics;
pub(crate) use handlers::{
    app_ads_txt, index, not_found, robots_txt, static_asset, wallpaper_by_day, wallpaper_today,
};
