//! # アプリケーション構築
//!
//! ルーターとミドルウェアチェーンの組み立てを担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{Router, routing::get};
use chrono::{DateTime, Local};
use kiban_shared::{
    observability::{MakeRequestUuidV7, make_request_span},
    request_log::RequestLogLayer,
};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    config::AppConfig,
    handler::{MetaState, ServiceInfo, health_check, service_info},
    middleware::cors_layer,
};

/// `START_RUN_AT` / 起動時刻の表示フォーマット
const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// アプリケーションルーターを構築する
///
/// 起動時刻は呼び出し時点で確定し、以後のレスポンスで不変となる。
pub fn build_app(config: &AppConfig) -> Router {
    build_app_at(config, Local::now())
}

/// 起動時刻を明示指定してルーターを構築する（テスト用途）
pub fn build_app_at(config: &AppConfig, started_at: DateTime<Local>) -> Router {
    // メタデータは起動時に一度だけスナップショットを取る
    let meta_state = Arc::new(MetaState {
        info: ServiceInfo {
            api_name:     config.api_name.clone(),
            api_version:  config.api_version.clone(),
            mode:         config.run_mode.clone(),
            build_at:     config.build_date.clone(),
            start_run_at: started_at.format(START_TIME_FORMAT).to_string(),
        },
    });

    // バージョン付きルートグループ
    let api_routes = Router::new()
        .route("/", get(service_info))
        .route("/healthz", get(health_check))
        .with_state(meta_state);

    let router = if config.api_version.is_empty() {
        api_routes
    } else {
        Router::new().nest(&config.api_version, api_routes)
    };

    // ミドルウェアチェーン（レイヤー順序が重要: 下に書いたものが外側）
    // 1. CorsLayer（最外）: エラーレスポンスにも CORS ヘッダーを付与
    // 2. SetRequestIdLayer: リクエスト受信時に UUID v7 を生成
    //    （またはクライアント提供値を使用）
    // 3. TraceLayer: カスタムスパンに request_id を含め、全ログに自動注入
    // 4. RequestLogLayer: リクエスト完了時に 1 行サマリログを出力（スパン内）
    // 5. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
    router
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(RequestLogLayer)
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .layer(cors_layer(config))
}
