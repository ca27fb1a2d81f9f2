//! # 通知送信
//!
//! メール通知の送信を担当するインフラストラクチャモジュール。
//!
//! ## 設計方針
//!
//! - **trait による抽象化**: `NotificationSender` trait でメール送信を抽象化
//! - **3 つの実装**: Resend（本番用）、SMTP（Mailpit 開発用）、Noop（テスト用）
//! - **環境変数切替**: `NOTIFICATION_BACKEND` でランタイム選択

mod noop;
mod resend;
mod smtp;

use async_trait::async_trait;
pub use noop::NoopNotificationSender;
use rajo_domain::notification::{EmailMessage, NotificationError, SendReceipt};
pub use resend::ResendNotificationSender;
pub use smtp::SmtpNotificationSender;

/// メール送信トレイト
///
/// 通知基盤の中核。メール送信の具体的な方法を抽象化する。
/// Resend / SMTP / Noop の 3 実装を環境変数で切り替える。
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// メールを送信する
    async fn send_email(&self, email: &EmailMessage) -> Result<SendReceipt, NotificationError>;
}
