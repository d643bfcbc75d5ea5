mod plausible_client;
mod starlio_api_client;

// 公開APIの再エクスポート
pub use plausible_client::PlausibleClient;
pub use starlio_api_client::StarlioApiClient;
