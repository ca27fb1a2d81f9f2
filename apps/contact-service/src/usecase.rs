//! # ユースケース層
//!
//! 問い合わせ受付サービスのビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: 送信器を `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: ハンドラは薄く保ち、ロジックはユースケースに集約
//!
//! ## モジュール構成
//!
//! - `notification`: 通知メールの生成と送信

pub mod notification;

pub use notification::{
    AcknowledgmentStatus,
    DispatchError,
    DispatchOutcome,
    NotificationService,
    TemplateRenderer,
};
