//! # Kiban API ライブラリ
//!
//! アプリケーションブートストラップのコアモジュール。
//! `main.rs` はインフラ初期化とサーバー起動に集中し、
//! ルーター構築・設定・エラー変換はこちらに配置する。
//!
//! ## モジュール構成
//!
//! - `app_builder`: ミドルウェアチェーンとルーターの組み立て
//! - `config`: 環境変数からの設定読み込み（起動時に一度だけ）
//! - `error`: API エラーと HTTP レスポンスへの変換
//! - `handler`: HTTP ハンドラ
//! - `middleware`: ミドルウェア（CORS 等）
//! - `validation`: カスタムバリデーションルールのレジストリ

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod middleware;
pub mod validation;
