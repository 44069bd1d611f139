//! # Kiban API サーバー
//!
//! アプリケーションブートストラップの本体。
//! CORS・Request ID・構造化ログ・バリデーション初期化を配線し、
//! メタデータとヘルスチェックの 2 エンドポイントを公開する。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `RUN_MODE` | No | 実行モード。未設定のとき `.env` から環境変数を補完する |
//! | `API_NAME` | No | アプリケーション識別名（デフォルト: `kiban-api`） |
//! | `API_VERSION` | No | ルートグループプレフィックス（デフォルト: `/v1`） |
//! | `BUILD_DATE` | No | ビルド時刻（`{prefix}/` で表示される） |
//! | `HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `PORT` | **Yes** | ポート番号 |
//! | `CORS_ALLOWED_ORIGINS` | No | 許可オリジン（カンマ区切り。空 = すべて許可） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env ファイルを使用）
//! cargo run -p kiban-api
//!
//! # 本番環境（環境変数を直接指定）
//! RUN_MODE=production PORT=8080 cargo run -p kiban-api --release
//! ```
//!
//! ## シャットダウン
//!
//! SIGINT（Ctrl-C）または SIGTERM を受信すると新規接続の受け付けを停止し、
//! 処理中のリクエストの完了を待ってから終了する。

use std::net::SocketAddr;

use kiban_api::{app_builder::build_app, config, config::AppConfig, validation};
use kiban_shared::observability::TracingConfig;
use tokio::net::TcpListener;

/// API サーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（`RUN_MODE` 未設定時のみ `.env` ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み（以後不変）
/// 4. バリデーションレジストリの初期化（プロセスごとに一度）
/// 5. ルーターの構築
/// 6. HTTP サーバーの起動（シグナル待ちと並行）
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env 読み込みはトレーシング初期化前のため、結果は後からログに残す
    let dotenv_path = config::load_dotenv();

    // トレーシング初期化
    // RUST_LOG 環境変数でログレベルを制御可能
    let tracing_config = TracingConfig::from_env("api");
    kiban_shared::observability::init_tracing(tracing_config);
    let _tracing_guard = tracing::info_span!("app", service = "api").entered();

    match &dotenv_path {
        Some(path) => tracing::info!(".env を読み込みました: {}", path.display()),
        None => tracing::debug!(".env は読み込まれませんでした（未使用または不存在）"),
    }

    // 設定読み込み（起動時に一度だけ。以後は参照渡し）
    let config = AppConfig::from_env();
    tracing::info!("------ '{}' モードで起動します ------", config.run_mode);

    // バリデーションレジストリの初期化（冪等、プロセスごとに最大 1 回）
    let registry = validation::init();
    tracing::info!("バリデーションルールを登録しました: {} 件", registry.len());

    // ルーター構築
    let app = build_app(&config);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("アドレスのパースに失敗しました");

    // バインド失敗はシャットダウン経路とは独立に致命的エラーとして伝播する
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("API サーバーが起動しました: {}", addr);

    // サーバー本体とシグナル待ちは並行して動作し、
    // shutdown_signal の完了が新規受け付け停止のトリガーになる
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // クリーンアップタスク（現時点では登録なし。追加時はここに配置する）
    tracing::info!("クリーンアップタスクを実行します...");

    tracing::info!("API サーバーを正常に終了しました");
    Ok(())
}

/// SIGINT または SIGTERM の受信を待つ
///
/// どちらか一方を受信した時点で完了し、`axum::serve` が
/// グレースフルシャットダウン（新規受け付け停止 + 処理中リクエストの完了待ち）
/// を開始する。シグナルは OS 側でバッファリングされるため、
/// 待機開始前に届いた最初のシグナルも失われない。
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("SIGINT ハンドラの登録に失敗しました");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("SIGTERM ハンドラの登録に失敗しました")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("シャットダウンシグナルを受信しました。グレースフルシャットダウンを開始します...");
}
