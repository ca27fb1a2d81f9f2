//! # フォーム送信ハンドラ
//!
//! 問い合わせフォーム・サービス依頼フォームの送信を受け付ける公開 API。
//!
//! ## エンドポイント
//!
//! - `POST /send-contact-email` - 問い合わせ（運営者への通知 + 送信者への自動返信）
//! - `POST /send-order-email` - サービス依頼（運営者への通知のみ）
//!
//! `OPTIONS` は CORS レイヤーが応答し、その他のメソッドは 405 を返す。
//! ボディは `Content-Type` によらず JSON として解釈する。

use std::sync::Arc;

use axum::{Json, body::Bytes, extract::State};
use rajo_domain::{
    clock::Clock,
    submission::{FormKind, RawSubmission},
};
use rajo_shared::{ApiResponse, event_log::event, log_business_event};
use serde::Serialize;

use crate::{
    error::ContactError,
    usecase::{AcknowledgmentStatus, NotificationService},
};

/// フォーム送信 API の共有状態
pub struct SubmissionState {
    pub notification: NotificationService,
    pub clock:        Arc<dyn Clock>,
}

/// 受付成功レスポンス
///
/// `ApiResponse` に包まれて `{ "success": true, ... }` になる。
#[derive(Debug, Serialize)]
pub struct SubmissionAccepted {
    pub message:        &'static str,
    /// 運営者への通知のメッセージ ID
    pub id:             Option<String>,
    pub acknowledgment: AcknowledgmentStatus,
}

/// POST /send-contact-email
#[tracing::instrument(skip_all, fields(form_kind = "contact"))]
pub async fn send_contact_email(
    State(state): State<Arc<SubmissionState>>,
    body: Bytes,
) -> Result<Json<ApiResponse<SubmissionAccepted>>, ContactError> {
    submit(&state, FormKind::Contact, &body).await
}

/// POST /send-order-email
#[tracing::instrument(skip_all, fields(form_kind = "order"))]
pub async fn send_order_email(
    State(state): State<Arc<SubmissionState>>,
    body: Bytes,
) -> Result<Json<ApiResponse<SubmissionAccepted>>, ContactError> {
    submit(&state, FormKind::Order, &body).await
}

/// POST / OPTIONS 以外のメソッド
///
/// ボディは読まずに 405 を返す。
pub async fn method_not_allowed() -> ContactError {
    ContactError::MethodNotAllowed
}

async fn submit(
    state: &SubmissionState,
    kind: FormKind,
    body: &[u8],
) -> Result<Json<ApiResponse<SubmissionAccepted>>, ContactError> {
    let submission = match RawSubmission::from_json_bytes(body)
        .and_then(|raw| raw.validate(state.clock.now()))
    {
        Ok(submission) => submission,
        Err(rejection) => {
            log_business_event!(
                event.category = event::category::SUBMISSION,
                event.action = event::action::SUBMISSION_REJECTED,
                event.result = event::result::FAILURE,
                event.form_kind = %kind,
                "フォーム送信を受け付けなかった"
            );
            return Err(rejection.into());
        }
    };

    log_business_event!(
        event.category = event::category::SUBMISSION,
        event.action = event::action::SUBMISSION_RECEIVED,
        event.result = event::result::SUCCESS,
        event.form_kind = %kind,
        submission.has_phone = submission.phone().is_some(),
        submission.has_service = submission.service().is_some(),
        "フォーム送信を受け付けた"
    );

    let outcome = state.notification.dispatch(submission, kind).await?;

    Ok(Json(ApiResponse::new(SubmissionAccepted {
        message:        success_message(kind),
        id:             outcome.notification_id,
        acknowledgment: outcome.acknowledgment,
    })))
}

fn success_message(kind: FormKind) -> &'static str {
    match kind {
        FormKind::Contact => "Email sent successfully! We'll get back to you soon.",
        FormKind::Order => "Service request sent successfully! We'll get back to you soon.",
    }
}
