//! # フォーム送信
//!
//! 問い合わせフォーム・サービス依頼フォームから届いた送信内容と、その入力検証を定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 説明 |
//! |---|------------|------|
//! | [`RawSubmission`] | 未検証の送信内容 | JSON ボディから文字列フィールドだけを取り出したもの |
//! | [`Submission`] | 送信内容 | 検証済み。受付時刻を持ち、通知送信で一度だけ消費される |
//! | [`FormKind`] | フォーム種別 | 問い合わせ（自動返信あり）/ サービス依頼（自動返信なし） |
//! | [`RequiredField`] | 必須項目 | 氏名・メールアドレス・本文 |
//!
//! ## 検証ルール
//!
//! - 必須項目は JSON 文字列であり、trim 後に空でないこと
//! - 文字列以外の値（数値、null、配列など）は未入力として扱う
//! - 電話番号・ご希望サービスは任意。空白のみは未入力として扱う
//! - メールアドレスの形式は検証しない
//! - 不足している必須項目はすべて宣言順に報告する

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use strum::IntoStaticStr;

use crate::SubmissionRejection;

define_form_text! {
    /// 送信者の氏名
    pub struct SubmitterName { pii: true }
}

define_form_text! {
    /// 送信者のメールアドレス（形式は検証しない）
    pub struct SubmitterEmail { pii: true }
}

define_form_text! {
    /// 電話番号
    pub struct PhoneNumber { pii: true }
}

define_form_text! {
    /// 本文
    pub struct MessageBody { pii: true }
}

define_form_text! {
    /// ご希望のサービス名
    pub struct ServiceName;
}

/// 必須項目
///
/// 宣言順がエラー報告の順序になる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum RequiredField {
    Name,
    Email,
    Message,
}

impl RequiredField {
    /// すべての必須項目（宣言順）
    pub const ALL: [RequiredField; 3] = [Self::Name, Self::Email, Self::Message];

    /// JSON のキー名を返す
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// フォーム種別
///
/// エンドポイントごとに決まり、自動返信メールの有無を左右する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum FormKind {
    /// 問い合わせ: 運営者への通知 + 送信者への自動返信
    Contact,
    /// サービス依頼: 運営者への通知のみ
    Order,
}

impl FormKind {
    /// 送信者へ自動返信メールを送るかどうか
    pub fn sends_acknowledgment(&self) -> bool {
        matches!(self, Self::Contact)
    }
}

/// 未検証の送信内容
///
/// JSON ボディのうち、文字列値を持つフィールドだけを保持する。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSubmission {
    pub name:    Option<String>,
    pub email:   Option<String>,
    pub phone:   Option<String>,
    pub service: Option<String>,
    pub message: Option<String>,
}

impl RawSubmission {
    /// リクエストボディのバイト列から未検証の送信内容を作る
    ///
    /// JSON として解釈できない場合や、オブジェクト以外の値の場合は
    /// [`SubmissionRejection::MalformedBody`] を返す。
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self, SubmissionRejection> {
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|e| SubmissionRejection::MalformedBody(e.to_string()))?;

        let Value::Object(object) = value else {
            return Err(SubmissionRejection::MalformedBody(
                "JSON オブジェクトではない".to_string(),
            ));
        };

        Ok(Self {
            name:    string_field(&object, "name"),
            email:   string_field(&object, "email"),
            phone:   string_field(&object, "phone"),
            service: string_field(&object, "service"),
            message: string_field(&object, "message"),
        })
    }

    /// 検証して受付時刻付きの送信内容に変換する
    ///
    /// 不足している必須項目をすべて集めてから失敗を返す。
    pub fn validate(self, submitted_at: DateTime<Utc>) -> Result<Submission, SubmissionRejection> {
        let name = self.name.as_deref().and_then(SubmitterName::parse);
        let email = self.email.as_deref().and_then(SubmitterEmail::parse);
        let message = self.message.as_deref().and_then(MessageBody::parse);

        match (name, email, message) {
            (Some(name), Some(email), Some(message)) => Ok(Submission {
                name,
                email,
                phone: self.phone.as_deref().and_then(PhoneNumber::parse),
                service: self.service.as_deref().and_then(ServiceName::parse),
                message,
                submitted_at,
            }),
            (name, email, message) => {
                let missing = [
                    (RequiredField::Name, name.is_none()),
                    (RequiredField::Email, email.is_none()),
                    (RequiredField::Message, message.is_none()),
                ]
                .into_iter()
                .filter_map(|(field, is_missing)| is_missing.then_some(field))
                .collect();
                Err(SubmissionRejection::MissingFields(missing))
            }
        }
    }
}

fn string_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    object.get(key).and_then(Value::as_str).map(str::to_string)
}

/// 送信内容（検証済み）
///
/// 永続化はせず、通知送信で一度だけ使われる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    name: SubmitterName,
    email: SubmitterEmail,
    phone: Option<PhoneNumber>,
    service: Option<ServiceName>,
    message: MessageBody,
    submitted_at: DateTime<Utc>,
}

impl Submission {
    pub fn name(&self) -> &SubmitterName {
        &self.name
    }

    pub fn email(&self) -> &SubmitterEmail {
        &self.email
    }

    pub fn phone(&self) -> Option<&PhoneNumber> {
        self.phone.as_ref()
    }

    pub fn service(&self) -> Option<&ServiceName> {
        self.service.as_ref()
    }

    pub fn message(&self) -> &MessageBody {
        &self.message
    }

    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }
}
