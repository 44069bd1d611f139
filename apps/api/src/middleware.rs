//! # ミドルウェア設定
//!
//! ルーターに適用するミドルウェアのうち、設定から組み立てるものを定義する。
//! Request ID・トレーシング関連のレイヤーは `kiban_shared::observability` と
//! `tower_http` の既製レイヤーをそのまま使用するため、ここには置かない。

use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::AppConfig;

/// CORS レイヤーを設定から組み立てる
///
/// `CORS_ALLOWED_ORIGINS` が空の場合はすべてのオリジンを許可する
/// （開発環境向けのデフォルト）。指定がある場合はそのリストのみを許可する。
/// パースできないオリジン指定は警告を出して読み飛ばす。
pub fn cors_layer(config: &AppConfig) -> CorsLayer {
    let allow_origin = if config.cors_allowed_origins.is_empty() {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_allowed_origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %origin, "不正な CORS オリジン指定を読み飛ばします");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
}
