//! # Starlio Web
//!
//! Starlio のウェブフロントエンド。ランディングページと静的ファイルを配信し、
//! 外部の壁紙APIから取得した「今日の壁紙」を HTML テンプレートに描画し、
//! 設定があれば各リクエストを外部のアクセス解析サービスへ報告します。
//!
//! このクレートは以下の層に分かれています：
//!
//! - **Domain Layer**: 壁紙レスポンスの分類と解析イベントの導出
//! - **Application Layer**: ユースケース
//! - **Infrastructure Layer**: 外部APIへのHTTPクライアント
//! - **Interface Layer**: HTTPルーティングとミドルウェア

pub mod application;
pub mod config;
pub mod debug;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::AppConfig;
