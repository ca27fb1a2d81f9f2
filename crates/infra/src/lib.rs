//! # Rajo インフラ層
//!
//! 外部システムとの接続・通信を担当するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! このクレートはメール送信の具体的な実装を提供する。メール配信 API や
//! SMTP サーバーの詳細をカプセル化し、ユースケース層を外部サービスの変更から保護する。
//!
//! ## 依存関係
//!
//! ```text
//! contact-service → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`notification`] - メール送信トレイトと Resend / SMTP / Noop 実装
//! - `mock` - テスト用モック（`test-utils` feature）

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod notification;
