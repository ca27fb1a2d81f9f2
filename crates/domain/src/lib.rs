//! # Rajo ドメイン層
//!
//! 問い合わせフォーム・サービス依頼フォームの受付に関するドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **値オブジェクト**: 送信者の氏名・メールアドレス等は trim 済み・非空を型で保証する
//! - **純粋関数**: 入力検証は I/O を持たず、受付時刻も [`clock::Clock`] から注入する
//! - **ドメインエラー**: 入力の不備は [`SubmissionRejection`] で表現する
//!
//! ## 依存関係の方向
//!
//! ```text
//! contact-service → infra → domain
//! ```
//!
//! ドメイン層はメール配信 API や HTTP フレームワークには一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`submission`] - フォーム送信内容と入力検証
//! - [`notification`] - 送信するメールのモデル
//! - [`clock`] - 時刻プロバイダ
//! - [`error`] - 入力検証エラー
//!
//! ## 使用例
//!
//! ```rust
//! use chrono::Utc;
//! use rajo_domain::submission::RawSubmission;
//!
//! let body = br#"{"name":"Ada","email":"ada@example.com","message":"Hello"}"#;
//! let submission = RawSubmission::from_json_bytes(body)
//!     .and_then(|raw| raw.validate(Utc::now()))
//!     .unwrap();
//!
//! assert_eq!(submission.name().as_str(), "Ada");
//! assert!(submission.phone().is_none());
//! ```

#[macro_use]
mod macros;

pub mod clock;
pub mod error;
pub mod notification;
pub mod submission;

pub use error::SubmissionRejection;
