//! ドメイン層
//!
//! 壁紙の取得結果の分類と、アクセス解析イベントの導出ロジックを含む層

pub mod analytics;
pub mod wallpaper;
