//! # テスト用モック
//!
//! ユースケーステスト・ハンドラテストで使用するインメモリモック。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! rajo-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rajo_domain::notification::{EmailMessage, NotificationError, SendReceipt};

use crate::notification::NotificationSender;

// ===== MockNotificationSender =====

#[derive(Default)]
struct MockSenderState {
    sent:               Vec<EmailMessage>,
    attempts:           usize,
    failing_recipients: Vec<String>,
    fail_all:           bool,
}

/// 送信したメールを記録するモック送信器
///
/// 既定では常に成功し、`mock-{n}` 形式のメッセージ ID を返す。
/// [`fail_for`](Self::fail_for) / [`fail_all`](Self::fail_all) で失敗させられる。
#[derive(Clone, Default)]
pub struct MockNotificationSender {
    state: Arc<Mutex<MockSenderState>>,
}

impl MockNotificationSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定した宛先への送信を失敗させる
    pub fn fail_for(&self, recipient: impl Into<String>) {
        self.state
            .lock()
            .unwrap()
            .failing_recipients
            .push(recipient.into());
    }

    /// すべての送信を失敗させる
    pub fn fail_all(&self) {
        self.state.lock().unwrap().fail_all = true;
    }

    /// 送信に成功したメール（送信順）
    pub fn sent_emails(&self) -> Vec<EmailMessage> {
        self.state.lock().unwrap().sent.clone()
    }

    /// 成否を問わない送信試行回数
    pub fn attempt_count(&self) -> usize {
        self.state.lock().unwrap().attempts
    }
}

#[async_trait]
impl NotificationSender for MockNotificationSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<SendReceipt, NotificationError> {
        let mut state = self.state.lock().unwrap();
        state.attempts += 1;

        if state.fail_all || state.failing_recipients.contains(&email.to) {
            return Err(NotificationError::SendFailed(format!(
                "mock provider rejected message to {}",
                email.to
            )));
        }

        state.sent.push(email.clone());
        Ok(SendReceipt::with_id(format!("mock-{}", state.sent.len())))
    }
}
