//! # 通知ユースケース
//!
//! フォーム送信に伴うメール通知の生成・送信を統合する。
//!
//! ## モジュール構成
//!
//! - [`template_renderer`] - tera テンプレートエンジンによるメール生成
//! - [`service`] - テンプレートレンダリング + 送信の統合サービス

pub mod service;
pub mod template_renderer;

pub use service::{AcknowledgmentStatus, DispatchError, DispatchOutcome, NotificationService};
pub use template_renderer::TemplateRenderer;
