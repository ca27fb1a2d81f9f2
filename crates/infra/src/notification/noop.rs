//! Noop 通知送信実装
//!
//! メールを実際に送信せず、ログ出力のみ行う。
//! ローカル動作確認や通知無効化時に使用する。

use async_trait::async_trait;
use rajo_domain::notification::{EmailMessage, NotificationError, SendReceipt};

use super::NotificationSender;

/// Noop 通知送信（ログ出力のみ）
#[derive(Debug, Clone)]
pub struct NoopNotificationSender;

#[async_trait]
impl NotificationSender for NoopNotificationSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<SendReceipt, NotificationError> {
        tracing::info!(
            subject = %email.subject,
            "Noop: メール送信をスキップ"
        );
        Ok(SendReceipt::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn send_emailがidなしの受領を返す() {
        let sender = NoopNotificationSender;
        let email = EmailMessage {
            to:        "test@example.com".to_string(),
            subject:   "テスト件名".to_string(),
            html_body: "<p>テスト</p>".to_string(),
            text_body: "テスト".to_string(),
        };

        let receipt = sender.send_email(&email).await.unwrap();

        assert_eq!(receipt, SendReceipt::default());
    }
}
