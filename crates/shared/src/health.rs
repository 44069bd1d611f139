//! # ヘルスチェック共通型
//!
//! ヘルスチェックエンドポイントで使用されるレスポンス型を提供する。
//! 死活監視（liveness）のみを対象とし、依存サービスの readiness 確認は
//! このテンプレートの範囲外。

use serde::{Deserialize, Serialize};

/// ヘルスチェックレスポンス
///
/// サーバーが応答可能であれば常に `{"status":"OK"}` を返す。
///
/// ## 使用例
///
/// ```
/// use kiban_shared::HealthResponse;
///
/// let response = HealthResponse::ok();
/// assert_eq!(response.status, "OK");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// 稼働状態（常に `"OK"`）
    pub status: String,
}

impl HealthResponse {
    /// 稼働中を示すレスポンスを作成する
    pub fn ok() -> Self {
        Self {
            status: "OK".to_string(),
        }
    }
}
