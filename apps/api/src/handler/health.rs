//! # ヘルスチェックハンドラ
//!
//! API の稼働状態を確認するためのエンドポイント。
//!
//! - `{prefix}/healthz` — Liveness Check（常に `{"status":"OK"}` を返す）
//!
//! レスポンス型は [`kiban_shared::HealthResponse`] を参照。

use axum::Json;
use kiban_shared::HealthResponse;

/// API のヘルスチェックエンドポイント
///
/// リクエストヘッダーやクエリパラメータに関係なく、
/// サーバーが応答可能であれば常に 200 を返す。
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_checkが常にokを返す() {
        let Json(body) = health_check().await;

        assert_eq!(body, HealthResponse::ok());
    }
}
