//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュールで re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、リクエスト間で共有する可変状態を持たない
//!
//! ## ハンドラ一覧
//!
//! - `health`: ヘルスチェック
//! - `meta`: サービスメタデータ

pub mod health;
pub mod meta;

pub use health::health_check;
pub use meta::{MetaState, ServiceInfo, service_info};
