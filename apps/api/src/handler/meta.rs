//! # サービスメタデータハンドラ
//!
//! ルートグループ直下（`{prefix}/`）でサービスの識別情報を返す。
//! 値はすべて起動時に確定し、プロセス存続中は変化しない。

use std::sync::Arc;

use axum::{Json, extract::State};
use serde::Serialize;

/// サービス情報レスポンス
///
/// フィールド名は運用ツール側の互換性のため大文字スネークケースで出力する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceInfo {
    /// アプリケーション識別名
    #[serde(rename = "API_NAME")]
    pub api_name: String,
    /// ルートグループプレフィックス
    #[serde(rename = "API_VERSION")]
    pub api_version: String,
    /// 実行モード
    #[serde(rename = "MODE")]
    pub mode: String,
    /// ビルド時刻
    #[serde(rename = "BUILD_AT")]
    pub build_at: String,
    /// プロセス起動時刻（起動時に一度だけ記録される）
    #[serde(rename = "START_RUN_AT")]
    pub start_run_at: String,
}

/// メタデータハンドラ用の State
///
/// 起動時に構築された設定スナップショットを保持する。不変。
#[derive(Debug, Clone)]
pub struct MetaState {
    pub info: ServiceInfo,
}

/// サービスメタデータエンドポイント
///
/// 起動時点の設定を返す（リクエスト時点のプロセス環境は参照しない）。
pub async fn service_info(State(state): State<Arc<MetaState>>) -> Json<ServiceInfo> {
    Json(state.info.clone())
}
