//! # 通知サービス
//!
//! テンプレートレンダリング → メール送信を統合するサービス。
//!
//! ## 設計方針
//!
//! - **運営者への通知が成否を決める**: 失敗した場合は自動返信を試みずにエラーを返す
//! - **自動返信の失敗は結果に含める**: エラーにはせず [`AcknowledgmentStatus::Failed`] を返す
//! - **逐次送信**: 運営者への通知 → 自動返信の順に送る
//! - **依存性注入**: `NotificationSender` は trait で抽象化。未設定なら `None`

use std::sync::Arc;

use rajo_domain::{
    notification::{NotificationError, NotificationTemplate, Recipient},
    submission::{FormKind, Submission},
};
use rajo_infra::notification::NotificationSender;
use rajo_shared::{event_log::event, log_business_event};
use serde::Serialize;
use thiserror::Error;

use super::TemplateRenderer;

/// 自動返信メールの送信結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AcknowledgmentStatus {
    /// 送信に成功した
    Sent,
    /// 送信を試みたが失敗した（詳細はサーバーログ）
    Failed,
    /// 自動返信のないフォーム種別
    Skipped,
}

/// 通知送信の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// 運営者への通知のメッセージ ID（送信器が返した場合のみ）
    pub notification_id: Option<String>,
    pub acknowledgment:  AcknowledgmentStatus,
}

/// 通知送信エラー
///
/// どのバリアントもクライアントには汎用メッセージのみを返す。
#[derive(Debug, Error)]
pub enum DispatchError {
    /// メール配信 API の認証情報が未設定
    #[error("メール送信基盤が未設定")]
    NotConfigured,

    /// 運営者への通知のレンダリングに失敗
    #[error("通知メールの生成に失敗: {0}")]
    Template(#[source] NotificationError),

    /// 運営者への通知の送信に失敗
    #[error("通知メールの送信に失敗: {0}")]
    Send(#[source] NotificationError),
}

/// 通知サービス
///
/// フォーム送信に伴うメール通知の全体フローを統合する。
pub struct NotificationService {
    sender: Option<Arc<dyn NotificationSender>>,
    template_renderer: TemplateRenderer,
    operator_address: String,
}

impl NotificationService {
    pub fn new(
        sender: Option<Arc<dyn NotificationSender>>,
        template_renderer: TemplateRenderer,
        operator_address: String,
    ) -> Self {
        Self {
            sender,
            template_renderer,
            operator_address,
        }
    }

    /// 送信内容を運営者に通知し、フォーム種別に応じて送信者へ自動返信する
    ///
    /// 送信器が未設定の場合はネットワークに触れずに [`DispatchError::NotConfigured`] を返す。
    pub async fn dispatch(
        &self,
        submission: Submission,
        kind: FormKind,
    ) -> Result<DispatchOutcome, DispatchError> {
        let Some(sender) = self.sender.as_deref() else {
            return Err(DispatchError::NotConfigured);
        };

        let template = NotificationTemplate::operator_notification(kind);
        let email = self
            .template_renderer
            .render(template, &submission, &self.operator_address)
            .map_err(DispatchError::Template)?;

        let receipt = sender
            .send_email(&email)
            .await
            .inspect_err(|e| log_send_failed(template, kind, e))
            .map_err(DispatchError::Send)?;
        log_sent(template, kind, receipt.message_id.as_deref());

        let acknowledgment = match NotificationTemplate::acknowledgment(kind) {
            None => AcknowledgmentStatus::Skipped,
            Some(template) => self.acknowledge(sender, template, kind, &submission).await,
        };

        Ok(DispatchOutcome {
            notification_id: receipt.message_id,
            acknowledgment,
        })
    }

    /// 送信者へ自動返信する
    ///
    /// 失敗はログに残し、呼び出し元へはステータスとして返す。
    async fn acknowledge(
        &self,
        sender: &dyn NotificationSender,
        template: NotificationTemplate,
        kind: FormKind,
        submission: &Submission,
    ) -> AcknowledgmentStatus {
        let email = match self.template_renderer.render(
            template,
            submission,
            submission.email().as_str(),
        ) {
            Ok(email) => email,
            Err(e) => {
                log_send_failed(template, kind, &e);
                return AcknowledgmentStatus::Failed;
            }
        };

        match sender.send_email(&email).await {
            Ok(receipt) => {
                log_sent(template, kind, receipt.message_id.as_deref());
                AcknowledgmentStatus::Sent
            }
            Err(e) => {
                log_send_failed(template, kind, &e);
                AcknowledgmentStatus::Failed
            }
        }
    }
}

fn recipient_label(template: NotificationTemplate) -> &'static str {
    let recipient: Recipient = template.recipient();
    recipient.into()
}

fn log_sent(template: NotificationTemplate, kind: FormKind, message_id: Option<&str>) {
    log_business_event!(
        event.category = event::category::NOTIFICATION,
        event.action = event::action::NOTIFICATION_SENT,
        event.result = event::result::SUCCESS,
        event.form_kind = %kind,
        event.template = template.name(),
        notification.recipient = recipient_label(template),
        notification.message_id = message_id.unwrap_or("-"),
        "通知メール送信成功"
    );
}

fn log_send_failed(template: NotificationTemplate, kind: FormKind, error: &NotificationError) {
    log_business_event!(
        event.category = event::category::NOTIFICATION,
        event.action = event::action::NOTIFICATION_FAILED,
        event.result = event::result::FAILURE,
        event.form_kind = %kind,
        event.template = template.name(),
        notification.recipient = recipient_label(template),
        error = %error,
        "通知メール送信失敗"
    );
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use rajo_domain::submission::RawSubmission;
    use rajo_infra::mock::MockNotificationSender;

    use super::*;

    const OPERATOR: &str = "ops@example.com";
    const SUBMITTER: &str = "ada@example.com";

    fn make_service(sender: &MockNotificationSender) -> NotificationService {
        NotificationService::new(
            Some(Arc::new(sender.clone()) as Arc<dyn NotificationSender>),
            TemplateRenderer::new("Rajo Solutions").unwrap(),
            OPERATOR.to_string(),
        )
    }

    fn make_submission() -> Submission {
        RawSubmission {
            name:    Some("Ada".to_string()),
            email:   Some(SUBMITTER.to_string()),
            phone:   None,
            service: Some("Branding".to_string()),
            message: Some("Need a logo".to_string()),
        }
        .validate(Utc::now())
        .unwrap()
    }

    #[tokio::test]
    async fn test_問い合わせは運営者通知と自動返信を順に送る() {
        // Given
        let sender = MockNotificationSender::new();
        let sut = make_service(&sender);

        // When
        let outcome = sut
            .dispatch(make_submission(), FormKind::Contact)
            .await
            .unwrap();

        // Then
        assert_eq!(
            outcome,
            DispatchOutcome {
                notification_id: Some("mock-1".to_string()),
                acknowledgment:  AcknowledgmentStatus::Sent,
            }
        );
        let recipients: Vec<_> = sender.sent_emails().into_iter().map(|e| e.to).collect();
        assert_eq!(recipients, vec![OPERATOR, SUBMITTER]);
    }

    #[tokio::test]
    async fn test_サービス依頼は運営者通知のみを送る() {
        let sender = MockNotificationSender::new();
        let sut = make_service(&sender);

        let outcome = sut
            .dispatch(make_submission(), FormKind::Order)
            .await
            .unwrap();

        assert_eq!(outcome.acknowledgment, AcknowledgmentStatus::Skipped);
        let sent = sender.sent_emails();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, OPERATOR);
        assert_eq!(sent[0].subject, "New Service Request - Rajo Solutions");
    }

    #[tokio::test]
    async fn test_送信器が未設定ならnot_configuredを返す() {
        let sut = NotificationService::new(
            None,
            TemplateRenderer::new("Rajo Solutions").unwrap(),
            OPERATOR.to_string(),
        );

        let result = sut.dispatch(make_submission(), FormKind::Contact).await;

        assert!(matches!(result, Err(DispatchError::NotConfigured)));
    }

    #[tokio::test]
    async fn test_運営者通知が失敗したら自動返信を試みない() {
        // Given
        let sender = MockNotificationSender::new();
        sender.fail_for(OPERATOR);
        let sut = make_service(&sender);

        // When
        let result = sut.dispatch(make_submission(), FormKind::Contact).await;

        // Then
        assert!(matches!(result, Err(DispatchError::Send(_))));
        assert_eq!(sender.attempt_count(), 1);
    }

    #[tokio::test]
    async fn test_自動返信の失敗はfailedとして結果に含める() {
        // Given
        let sender = MockNotificationSender::new();
        sender.fail_for(SUBMITTER);
        let sut = make_service(&sender);

        // When
        let outcome = sut
            .dispatch(make_submission(), FormKind::Contact)
            .await
            .unwrap();

        // Then
        assert_eq!(outcome.notification_id.as_deref(), Some("mock-1"));
        assert_eq!(outcome.acknowledgment, AcknowledgmentStatus::Failed);
        assert_eq!(sender.attempt_count(), 2);
    }

    #[tokio::test]
    async fn test_同一内容の送信は毎回独立して送られる() {
        let sender = MockNotificationSender::new();
        let sut = make_service(&sender);

        sut.dispatch(make_submission(), FormKind::Order)
            .await
            .unwrap();
        sut.dispatch(make_submission(), FormKind::Order)
            .await
            .unwrap();

        assert_eq!(sender.sent_emails().len(), 2);
    }

    #[test]
    fn test_acknowledgment_statusはsnake_caseでシリアライズされる() {
        assert_eq!(
            serde_json::to_value(AcknowledgmentStatus::Skipped).unwrap(),
            serde_json::json!("skipped")
        );
    }
}
