//! # リクエストサマリログミドルウェア
//!
//! HTTP リクエスト完了時に、そのリクエストの重要情報を 1 行に集約した
//! サマリログを出力する tower Layer。
//!
//! ## 既存 TraceLayer との責務分離
//!
//! - TraceLayer: スパン作成（method, uri, request_id 等）。リクエストスコープのコンテキスト管理
//! - RequestLogLayer: リクエスト完了サマリ（status, latency）。1 行で全体像を提供
//!
//! TraceLayer のスパン内に配置することで、スパンフィールド（request_id 等）が
//! JSON ログに自動的に含まれる。レスポンス確定後・ネットワーク層へ返る前に
//! ちょうど 1 回出力される。

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
    time::Instant,
};

use http::{Request, Response};
use tower::{Layer, Service};

/// ヘルスチェックパスかどうかを判定する
///
/// 死活監視のポーリングでログが埋まるのを防ぐため、
/// `/healthz` で終わるパス（バージョンプレフィックス付き含む）を除外対象とする。
fn is_health_check_path(path: &str) -> bool {
    path == "/healthz" || path.ends_with("/healthz")
}

/// リクエストサマリログを出力する Layer
///
/// リクエスト完了時に INFO レベルで `log.type = "request_summary"` マーカー付きの
/// サマリログを出力する。ヘルスチェックパスは出力対象外。
///
/// ## レイヤー配置
///
/// TraceLayer の内側に配置し、スパンフィールドを活用する:
///
/// ```text
/// TraceLayer → RequestLogLayer → handler
/// ```
#[derive(Clone, Debug)]
pub struct RequestLogLayer;

impl<S> Layer<S> for RequestLogLayer {
    type Service = RequestLogService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestLogService { inner }
    }
}

/// リクエストサマリログを出力する Service
///
/// [`RequestLogLayer`] が生成する Service 実装。
#[derive(Clone, Debug)]
pub struct RequestLogService<S> {
    inner: S,
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for RequestLogService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: std::fmt::Display + 'static,
    ReqBody: Send + 'static,
    ResBody: Send + 'static,
{
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;
    type Response = S::Response;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        // clone-swap パターン: poll_ready で得た readiness を保持する inner を使う
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        let method = req.method().as_str().to_owned();
        let path = req.uri().path().to_owned();

        // ヘルスチェックはスキップ
        if is_health_check_path(&path) {
            return Box::pin(async move { inner.call(req).await });
        }

        let start = Instant::now();

        Box::pin(async move {
            let result = inner.call(req).await;
            let latency_ms = start.elapsed().as_millis() as u64;

            match &result {
                Ok(response) => {
                    let status = response.status().as_u16();
                    tracing::info!(
                        log.r#type = "request_summary",
                        http.method = %method,
                        http.path = %path,
                        http.status_code = status,
                        http.latency_ms = latency_ms,
                        "リクエスト完了"
                    );
                }
                Err(err) => {
                    tracing::error!(
                        log.r#type = "request_summary",
                        http.method = %method,
                        http.path = %path,
                        http.latency_ms = latency_ms,
                        error.message = %err,
                        "リクエスト処理エラー"
                    );
                }
            }

            result
        })
    }
}
