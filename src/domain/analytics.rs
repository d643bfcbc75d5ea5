//! アクセス解析ドメイン
//!
//! 完了したレスポンスから解析イベントを導出し、外部の集計サービスへ
//! 送信するためのモデルとトレイトを提供します。

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
pub mod value_objects;

// 主要な型の再エクスポート
pub use entities::{AnalyticsEvent, EventProps, RequestSummary};
pub use errors::AnalyticsError;
pub use repositories::EventSink;
pub use services::{NOT_FOUND_EVENT_NAME, build_event, event_name, should_report};
pub use value_objects::{ClientAgent, TrafficSource};
