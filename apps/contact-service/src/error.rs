//! # Contact Service エラー定義
//!
//! Contact Service 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! クライアント起因のエラー（4xx）は `info` で、サーバー側の失敗（5xx）は
//! 詳細付きで `error` でログに残す。レスポンスボディには詳細を含めない。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rajo_domain::{SubmissionRejection, submission::RequiredField};
use rajo_shared::{ErrorResponse, event_log::error as log_error};
use thiserror::Error;

use crate::usecase::DispatchError;

/// Contact Service で発生するエラー
#[derive(Debug, Error)]
pub enum ContactError {
    /// 送信内容の検証失敗
    #[error(transparent)]
    Rejected(#[from] SubmissionRejection),

    /// POST / OPTIONS 以外のメソッド
    #[error("許可されていないメソッド")]
    MethodNotAllowed,

    /// 通知送信の失敗
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        let body = match &self {
            ContactError::Rejected(rejection) => {
                tracing::info!(error = %rejection, "送信内容を受け付けなかった");
                let fields = rejection
                    .missing_fields()
                    .iter()
                    .map(|f| RequiredField::as_str(f).to_string())
                    .collect();
                match rejection {
                    SubmissionRejection::MalformedBody(_) => ErrorResponse::malformed_body(fields),
                    SubmissionRejection::MissingFields(_) => ErrorResponse::missing_fields(fields),
                }
            }
            ContactError::MethodNotAllowed => ErrorResponse::method_not_allowed(),
            ContactError::Dispatch(DispatchError::NotConfigured) => {
                tracing::error!(
                    error.category = log_error::category::CONFIGURATION,
                    error.kind = log_error::kind::NOT_CONFIGURED,
                    "メール送信基盤が未設定（RESEND_API_KEY）"
                );
                ErrorResponse::not_configured()
            }
            ContactError::Dispatch(e @ DispatchError::Template(_)) => {
                tracing::error!(
                    error.category = log_error::category::CONFIGURATION,
                    error.kind = log_error::kind::TEMPLATE,
                    error = %e,
                    "通知メールの生成に失敗"
                );
                ErrorResponse::send_failed()
            }
            ContactError::Dispatch(e @ DispatchError::Send(_)) => {
                tracing::error!(
                    error.category = log_error::category::EXTERNAL_SERVICE,
                    error.kind = log_error::kind::MAIL_DELIVERY,
                    error = %e,
                    "通知メールの送信に失敗"
                );
                ErrorResponse::send_failed()
            }
        };

        let status =
            StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(body)).into_response()
    }
}
