//! # ルーティングのテスト
//!
//! `build_app` が構築するルーターの公開面を検証する。
//!
//! - `{prefix}/` — サービスメタデータ（5 フィールド、起動時に確定）
//! - `{prefix}/healthz` — 常に `{"status":"OK"}`
//! - 未定義ルート — フレームワークデフォルトの 404

use axum::{Router, body::Body};
use chrono::TimeZone;
use http::{Request, StatusCode};
use kiban_api::{
    app_builder::{build_app, build_app_at},
    config::AppConfig,
};
use pretty_assertions::assert_eq;
use tower::ServiceExt;

fn test_config() -> AppConfig {
    AppConfig {
        run_mode: "test".to_string(),
        api_name: "demo".to_string(),
        api_version: "/v1".to_string(),
        build_date: "2026-08-23T00:00:00Z".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_allowed_origins: vec![],
    }
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn test_healthzが200でstatus_okを返す() {
    let app = build_app(&test_config());

    let (status, body) = get(app, "/v1/healthz").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, serde_json::json!({ "status": "OK" }));
}

#[tokio::test]
async fn test_healthzはクエリパラメータに関係なく200を返す() {
    let app = build_app(&test_config());

    let (status, body) = get(app, "/v1/healthz?verbose=1&x=y").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, serde_json::json!({ "status": "OK" }));
}

#[tokio::test]
async fn test_メタデータが起動時の設定を5フィールドで返す() {
    let app = build_app(&test_config());

    let (status, body) = get(app, "/v1/").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["API_NAME"], "demo");
    assert_eq!(json["API_VERSION"], "/v1");
    assert_eq!(json["MODE"], "test");
    assert_eq!(json["BUILD_AT"], "2026-08-23T00:00:00Z");
    assert!(
        !json["START_RUN_AT"].as_str().unwrap().is_empty(),
        "START_RUN_AT が設定されていること"
    );
    assert_eq!(json.as_object().unwrap().len(), 5, "フィールドは 5 つのみ");
}

#[tokio::test]
async fn test_start_run_atが指定した起動時刻のフォーマットで出力される() {
    let started_at = chrono::Local
        .with_ymd_and_hms(2026, 8, 23, 12, 34, 56)
        .unwrap();
    let app = build_app_at(&test_config(), started_at);

    let (_, body) = get(app, "/v1/").await;

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["START_RUN_AT"], "2026-08-23 12:34:56");
}

#[tokio::test]
async fn test_連続リクエストでstart_run_atが変化しない() {
    let app = build_app(&test_config());

    let (_, first) = get(app.clone(), "/v1/").await;
    let (_, second) = get(app, "/v1/").await;

    let first: serde_json::Value = serde_json::from_slice(&first).unwrap();
    let second: serde_json::Value = serde_json::from_slice(&second).unwrap();
    assert_eq!(
        first["START_RUN_AT"], second["START_RUN_AT"],
        "起動時刻はプロセス起動時に固定されること"
    );
}

#[tokio::test]
async fn test_未定義ルートは404を返す() {
    let app = build_app(&test_config());

    let (status, _) = get(app, "/v1/unknown").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_プレフィックス外のパスは404を返す() {
    let app = build_app(&test_config());

    let (status, _) = get(app, "/healthz").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_カスタムプレフィックスでルートが公開される() {
    let config = AppConfig {
        api_version: "/api/v2".to_string(),
        ..test_config()
    };
    let app = build_app(&config);

    let (status, body) = get(app, "/api/v2/healthz").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, serde_json::json!({ "status": "OK" }));
}

#[tokio::test]
async fn test_空プレフィックスでルート直下に公開される() {
    let config = AppConfig {
        api_version: String::new(),
        ..test_config()
    };
    let app = build_app(&config);

    let (status, _) = get(app.clone(), "/healthz").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = get(app, "/").await;
    assert_eq!(status, StatusCode::OK);
}
