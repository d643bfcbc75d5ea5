//! アプリケーション層
//!
//! ドメインのロジックとインフラの実装を組み合わせたユースケースを提供します。

pub mod use_cases;
