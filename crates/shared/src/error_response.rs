//! # エラーレスポンス
//!
//! 全ハンドラで共通のエラーレスポンス構造体を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換はアプリケーション側の責務
//!   （shared に axum 依存を入れない）
//! - `timestamp` は生成時刻、`status` は常に `0`（失敗フラグ）、
//!   `items` は常に `null`、`error` はエラーメッセージ

use serde::{Deserialize, Serialize};

/// `timestamp` フィールドの時刻フォーマット
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H-%M-%S";

/// エラーレスポンス
///
/// すべてのハンドラ失敗時に統一された形式で返されるボディ。
/// HTTP ステータスコードはエラー種別ごとに決まるが、
/// ボディの形状はこの 1 種類のみ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// レスポンス生成時刻（`%Y-%m-%d-%H-%M-%S` 形式）
    pub timestamp: String,
    /// 失敗フラグ（常に `0`）
    pub status:    u8,
    /// 結果アイテム（エラー時は常に `null`）
    pub items:     Option<serde_json::Value>,
    /// エラーメッセージ（非空）
    pub error:     String,
}

impl ErrorResponse {
    /// 現在時刻の `timestamp` を持つエラーレスポンスを作成する
    pub fn new(error: impl Into<String>) -> Self {
        Self::with_timestamp(error, chrono::Utc::now().format(TIMESTAMP_FORMAT).to_string())
    }

    /// `timestamp` を明示指定してエラーレスポンスを作成する（テスト用途）
    pub fn with_timestamp(error: impl Into<String>, timestamp: String) -> Self {
        Self {
            timestamp,
            status: 0,
            items: None,
            error: error.into(),
        }
    }
}
