//! # API 設定
//!
//! 環境変数から API サーバーの設定を読み込む。
//!
//! ## 設計方針
//!
//! 設定は起動時に一度だけ [`AppConfig`] として構築し、以後は参照渡しする。
//! 各コンポーネントがプロセス環境を都度読み直すことはしない
//! （プロセス起動後の環境変数変更はサーバーの挙動に影響しない）。

use std::{env, path::PathBuf};

/// `API_VERSION` 未設定時のルートグループプレフィックス
const DEFAULT_VERSION_PREFIX: &str = "/v1";

/// API サーバーの設定
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// 実行モード（`RUN_MODE`、デフォルト: `development`）
    pub run_mode: String,
    /// アプリケーション識別名（`API_NAME`）
    pub api_name: String,
    /// ルートグループプレフィックス（`API_VERSION`、先頭 `/` に正規化済み）
    pub api_version: String,
    /// ビルド時刻（`BUILD_DATE`、ビルドパイプラインが注入する）
    pub build_date: String,
    /// バインドアドレス（`HOST`、デフォルト: `0.0.0.0`）
    pub host: String,
    /// ポート番号（`PORT`、必須）
    pub port: u16,
    /// CORS で許可するオリジン（`CORS_ALLOWED_ORIGINS`、カンマ区切り。
    /// 空の場合はすべてのオリジンを許可する）
    pub cors_allowed_origins: Vec<String>,
}

impl AppConfig {
    /// 環境変数から設定を読み込む
    ///
    /// `PORT` 以外は未設定時にデフォルト値へフォールバックする。
    /// `PORT` の欠落・不正は起動時エラーとして即座に失敗させる。
    pub fn from_env() -> Self {
        Self {
            run_mode: env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string()),
            api_name: env::var("API_NAME").unwrap_or_else(|_| "kiban-api".to_string()),
            api_version: normalize_version_prefix(
                &env::var("API_VERSION").unwrap_or_else(|_| DEFAULT_VERSION_PREFIX.to_string()),
            ),
            build_date: env::var("BUILD_DATE").unwrap_or_else(|_| "unknown".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .expect("PORT が設定されていません")
                .parse()
                .expect("PORT は有効なポート番号である必要があります"),
            cors_allowed_origins: parse_origins(
                &env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default(),
            ),
        }
    }
}

/// `RUN_MODE` 未設定時のみ `.env` ファイルから環境変数を補完する
///
/// 他のコンポーネントが設定を読む前（トレーシング初期化よりも前）に
/// 一度だけ呼び出すこと。`.env` が存在しない・読めない場合は
/// プロセス環境のデフォルトのまま続行する（起動は失敗させない）。
/// 読み込んだファイルのパスを返すので、トレーシング初期化後にログへ残せる。
pub fn load_dotenv() -> Option<PathBuf> {
    if !should_load_dotenv(env::var("RUN_MODE").ok().as_deref()) {
        return None;
    }
    dotenvy::dotenv().ok()
}

/// `.env` を読み込むべきかどうかを判定する
///
/// 実行モードが明示されている場合は、環境変数が直接設定されている前提のため
/// `.env` を読まない。
fn should_load_dotenv(run_mode: Option<&str>) -> bool {
    run_mode.is_none_or(|mode| mode.trim().is_empty())
}

/// ルートグループプレフィックスを正規化する
///
/// - 前後の空白を除去する
/// - 空または `/` のみ → 空文字列（プレフィックスなし＝ルート直下）
/// - 先頭に `/` がなければ付与する
/// - 末尾の `/` は除去する（axum の nest は末尾スラッシュを受け付けない）
fn normalize_version_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() || trimmed == "/" {
        return String::new();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// カンマ区切りのオリジン指定をパースする
///
/// 空要素と前後空白は除去する。結果が空の場合は「すべて許可」を意味する。
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(ToString::to_string)
        .collect()
}
