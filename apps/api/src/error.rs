//! # API エラー定義
//!
//! API で発生するエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ## 設計
//!
//! エラー種別ごとに HTTP ステータスコードを明示的に持つタグ付き列挙型とし、
//! 変換は [`IntoResponse`] で網羅的に match する
//! （実行時の型判定によるステータス推測は行わない）。
//! レスポンスボディはすべて [`ErrorResponse`] の 1 形式に統一される。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use kiban_shared::ErrorResponse;
use thiserror::Error;

/// API で発生するエラー
///
/// `IntoResponse` を実装しているため、ハンドラから `Err` で返すだけで
/// axum が自動的に HTTP レスポンスへ変換する。
#[derive(Debug, Error)]
pub enum ApiError {
    /// リソースが見つからない（404 Not Found）
    #[error("リソースが見つかりません")]
    NotFound,

    /// 不正なリクエスト（400 Bad Request）
    #[error("不正なリクエスト: {0}")]
    BadRequest(String),

    /// バリデーションエラー（422 Unprocessable Entity）
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// 内部サーバーエラー（500 Internal Server Error）
    ///
    /// detail はレスポンスに含めない（内部情報を漏らさないため）。
    #[error("内部エラーが発生しました")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// このエラーに対応する HTTP ステータスコード
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // 内部エラーの詳細はログのみ
        if let ApiError::Internal(err) = &self {
            tracing::error!("内部エラー: {:?}", err);
        }

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn status_of(error: ApiError) -> StatusCode {
        error.status_code()
    }

    #[test]
    fn test_not_foundは404を返す() {
        assert_eq!(status_of(ApiError::NotFound), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_bad_requestは400を返す() {
        assert_eq!(
            status_of(ApiError::BadRequest("x".to_string())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_validationは422を返す() {
        assert_eq!(
            status_of(ApiError::Validation("x".to_string())),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_コード未宣言の内部エラーは500にフォールバックする() {
        let error = ApiError::Internal(anyhow::anyhow!("database exploded"));
        assert_eq!(status_of(error), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_into_responseでステータスとボディ形状が設定される() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(json["status"], 0);
        assert!(json["items"].is_null());
        assert_eq!(json["error"], "リソースが見つかりません");
        assert!(!json["timestamp"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_内部エラーのレスポンスに詳細が漏れない() {
        let error = ApiError::Internal(anyhow::anyhow!("secret connection string"));
        let response = error.into_response();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        let message = json["error"].as_str().unwrap();
        assert_eq!(message, "内部エラーが発生しました");
        assert!(!message.contains("secret"));
    }
}
