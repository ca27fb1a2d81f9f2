//! Resend 通知送信実装
//!
//! Resend の HTTP API（`POST /emails`）を使用してメールを送信する。
//! 本番環境で使用する。

use std::time::Duration;

use async_trait::async_trait;
use rajo_domain::notification::{EmailMessage, NotificationError, SendReceipt};
use serde::{Deserialize, Serialize};

use super::NotificationSender;

/// Resend 送信リクエスト
#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from:    &'a str,
    to:      [&'a str; 1],
    subject: &'a str,
    html:    &'a str,
    text:    &'a str,
}

/// Resend 送信レスポンス
///
/// 送信可否はステータスコードだけで判定する。`id` は受付済みの記録用。
#[derive(Debug, Default, Deserialize)]
struct SendEmailResponse {
    #[serde(default)]
    id: Option<String>,
}

/// Resend 通知送信
///
/// `reqwest::Client` をラップする。クライアントは起動時に一度だけ作成し、
/// タイムアウトはクライアント単位で設定する。
pub struct ResendNotificationSender {
    client:       reqwest::Client,
    endpoint:     String,
    api_key:      String,
    from_address: String,
}

impl ResendNotificationSender {
    /// 新しい Resend 送信インスタンスを作成
    ///
    /// # 引数
    ///
    /// - `base_url`: API のベース URL（例: "https://api.resend.com"）
    /// - `api_key`: Bearer 認証に使う API キー
    /// - `from_address`: 送信元（例: "Rajo Solutions <onboarding@resend.dev>"）
    /// - `timeout`: 1 リクエストあたりのタイムアウト
    pub fn new(
        base_url: &str,
        api_key: String,
        from_address: String,
        timeout: Duration,
    ) -> Result<Self, NotificationError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NotificationError::SendFailed(format!("HTTP クライアント構築失敗: {e}")))?;

        Ok(Self {
            client,
            endpoint: format!("{}/emails", base_url.trim_end_matches('/')),
            api_key,
            from_address,
        })
    }
}

#[async_trait]
impl NotificationSender for ResendNotificationSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<SendReceipt, NotificationError> {
        let request = SendEmailRequest {
            from:    &self.from_address,
            to:      [email.to.as_str()],
            subject: &email.subject,
            html:    &email.html_body,
            text:    &email.text_body,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    NotificationError::SendFailed(format!("Resend API がタイムアウト: {e}"))
                } else {
                    NotificationError::SendFailed(format!("Resend API 呼び出し失敗: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotificationError::SendFailed(format!(
                "Resend API がエラーを返した: status={status}, body={body}"
            )));
        }

        // 2xx の時点で送信は受け付けられている。本文が読めなくても失敗にしない
        let body = match response.bytes().await {
            Ok(bytes) => serde_json::from_slice::<SendEmailResponse>(&bytes).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Resend レスポンスから id を取得できなかった");
                SendEmailResponse::default()
            }),
            Err(e) => {
                tracing::warn!(error = %e, "Resend レスポンス本文の読み取りに失敗");
                SendEmailResponse::default()
            }
        };

        Ok(match body.id {
            Some(id) => SendReceipt::with_id(id),
            None => SendReceipt::default(),
        })
    }
}
