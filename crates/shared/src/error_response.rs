//! # エラーレスポンス
//!
//! 公開 API で共通の失敗レスポンス `{ "success": false, "error": "..." }` を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換は各サービスの責務（shared に axum 依存を入れない）
//! - サーバー側の失敗（5xx）は固定メッセージのコンストラクタのみ提供し、
//!   内部情報がクライアントに漏れないようにする

use serde::{Deserialize, Serialize};

/// リクエストボディが JSON オブジェクトとして解釈できないときのメッセージ
pub const MALFORMED_BODY_MESSAGE: &str = "Malformed request body";

/// メール送信基盤が未設定のときのメッセージ
pub const NOT_CONFIGURED_MESSAGE: &str = "Email service not configured. Please try again later.";

/// メール送信に失敗したときのメッセージ
pub const SEND_FAILED_MESSAGE: &str = "Failed to send email. Please try again later.";

/// エラーレスポンス
///
/// `status` は HTTP ステータスコードの写しで、JSON には出力しない。
/// `missing_fields` は必須項目不足の 400 でのみ出力する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success:        bool,
    pub error:          String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing_fields: Option<Vec<String>>,
    #[serde(skip)]
    pub status:         u16,
}

impl ErrorResponse {
    /// 汎用コンストラクタ
    pub fn new(status: u16, error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            missing_fields: None,
            status,
        }
    }

    /// 400 Bad Request
    pub fn bad_request(error: impl Into<String>) -> Self {
        Self::new(400, error)
    }

    /// 400 必須項目不足
    ///
    /// 不足している項目名をメッセージと `missing_fields` の両方に含める。
    pub fn missing_fields(fields: Vec<String>) -> Self {
        Self {
            missing_fields: Some(fields.clone()),
            ..Self::bad_request(format!(
                "Missing required fields: {}",
                fields.join(", ")
            ))
        }
    }

    /// 400 ボディが解釈できない
    ///
    /// 項目単位では判定できないため、全必須項目を `missing_fields` に含める。
    pub fn malformed_body(fields: Vec<String>) -> Self {
        Self {
            missing_fields: Some(fields),
            ..Self::bad_request(MALFORMED_BODY_MESSAGE)
        }
    }

    /// 405 Method Not Allowed
    pub fn method_not_allowed() -> Self {
        Self::new(405, "Method not allowed")
    }

    /// 500 メール送信基盤が未設定
    pub fn not_configured() -> Self {
        Self::new(500, NOT_CONFIGURED_MESSAGE)
    }

    /// 500 メール送信失敗
    ///
    /// メッセージは固定値（プロバイダのエラー詳細を漏らさないため）。
    pub fn send_failed() -> Self {
        Self::new(500, SEND_FAILED_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_new_で全フィールドが正しく設定される() {
        let error = ErrorResponse::new(418, "I'm a teapot");

        assert!(!error.success);
        assert_eq!(error.error, "I'm a teapot");
        assert_eq!(error.missing_fields, None);
        assert_eq!(error.status, 418);
    }

    #[test]
    fn test_missing_fields_がメッセージに全項目名を含む() {
        let error = ErrorResponse::missing_fields(vec!["name".to_string(), "message".to_string()]);

        assert_eq!(error.status, 400);
        assert_eq!(error.error, "Missing required fields: name, message");
        assert_eq!(
            error.missing_fields,
            Some(vec!["name".to_string(), "message".to_string()])
        );
    }

    #[test]
    fn test_malformed_body_は不足項目と別のメッセージになる() {
        let error = ErrorResponse::malformed_body(vec!["name".to_string(), "email".to_string()]);

        assert_eq!(error.status, 400);
        assert_eq!(error.error, MALFORMED_BODY_MESSAGE);
        assert_eq!(
            error.missing_fields,
            Some(vec!["name".to_string(), "email".to_string()])
        );
    }

    #[test]
    fn test_jsonシリアライズでstatusが出力されない() {
        let error = ErrorResponse::send_failed();
        let json = serde_json::to_value(&error).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "success": false,
                "error": "Failed to send email. Please try again later."
            })
        );
    }

    #[test]
    fn test_jsonシリアライズでmissing_fieldsが配列になる() {
        let error = ErrorResponse::missing_fields(vec!["email".to_string()]);
        let json = serde_json::to_value(&error).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["missing_fields"], serde_json::json!(["email"]));
    }

    #[test]
    fn test_全便利コンストラクタのstatusが正しい() {
        assert_eq!(ErrorResponse::bad_request("").status, 400);
        assert_eq!(ErrorResponse::missing_fields(vec![]).status, 400);
        assert_eq!(ErrorResponse::method_not_allowed().status, 405);
        assert_eq!(ErrorResponse::not_configured().status, 500);
        assert_eq!(ErrorResponse::send_failed().status, 500);
    }

    #[test]
    fn test_5xxのメッセージは固定値である() {
        assert_eq!(ErrorResponse::not_configured().error, NOT_CONFIGURED_MESSAGE);
        assert_eq!(ErrorResponse::send_failed().error, SEND_FAILED_MESSAGE);
    }
}
