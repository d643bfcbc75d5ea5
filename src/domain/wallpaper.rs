//! 壁紙ドメイン
//!
//! 外部の壁紙APIから返ってきたレスポンスを「描画する」か「見つからない」かに
//! 分類するためのモデルを提供します。

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
pub mod value_objects;

// 主要な型の再エクスポート
pub use entities::{NotFoundReason, RenderContext, RenderResult, UpstreamResponse};
pub use errors::WallpaperError;
pub use repositories::WallpaperSource;
pub use services::classify;
pub use value_objects::{DayToken, UpstreamBody, WallpaperQuery};
