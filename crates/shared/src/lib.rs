//! # Kiban 共有ユーティリティ
//!
//! このクレートは、Kiban プロジェクト全体で使用される
//! 横断的ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - アプリケーションクレート（apps/ 配下）から依存される
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - 外部クレートへの依存は最小限に抑える

pub mod error_response;
pub mod health;
pub mod observability;
pub mod request_log;

pub use error_response::ErrorResponse;
pub use health::HealthResponse;
