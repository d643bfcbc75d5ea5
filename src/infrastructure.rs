//! インフラストラクチャ層
//!
//! ドメイン層で定義されたトレイトの具体的な実装を提供します。
//! 外部の壁紙APIとアクセス解析サービスへのHTTPクライアントが含まれます。

pub mod http;
