//! # 通知
//!
//! フォーム送信を受けて送るメール通知のドメインモデルを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 説明 |
//! |---|------------|------|
//! | [`NotificationTemplate`] | 通知テンプレート | 3 種類: 問い合わせ通知、自動返信、サービス依頼通知 |
//! | [`Recipient`] | 宛先区分 | 運営者 / 送信者 |
//! | [`EmailMessage`] | メールメッセージ | レンダリング済みの件名と本文 |
//! | [`SendReceipt`] | 送信受領 | メール配信 API が返したメッセージ ID |
//!
//! ## 設計方針
//!
//! - **テンプレート分離**: 通知種別とメール生成は分離（TemplateRenderer は contact-service）
//! - **送信元は送信器の設定**: `EmailMessage` は宛先のみを持ち、From は送信器が付与する

use strum::IntoStaticStr;
use thiserror::Error;

use crate::submission::FormKind;

/// 通知送信エラー
#[derive(Debug, Error)]
pub enum NotificationError {
    /// メール送信に失敗
    #[error("メール送信に失敗: {0}")]
    SendFailed(String),

    /// テンプレートレンダリングに失敗
    #[error("テンプレートレンダリングに失敗: {0}")]
    TemplateFailed(String),
}

/// 宛先区分
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Recipient {
    /// 運営者（固定アドレス）
    Operator,
    /// フォームの送信者
    Submitter,
}

/// 通知テンプレート
///
/// snake_case の名前がテンプレートファイル名（`{name}.html` / `{name}.txt`）になる。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    IntoStaticStr,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum NotificationTemplate {
    /// 問い合わせ通知 → 運営者に送信
    ContactNotification,
    /// 自動返信 → 問い合わせの送信者に送信
    ContactAcknowledgment,
    /// サービス依頼通知 → 運営者に送信
    OrderNotification,
}

impl NotificationTemplate {
    /// フォーム種別に対応する運営者向け通知テンプレートを返す
    pub fn operator_notification(kind: FormKind) -> Self {
        match kind {
            FormKind::Contact => Self::ContactNotification,
            FormKind::Order => Self::OrderNotification,
        }
    }

    /// フォーム種別に対応する自動返信テンプレートを返す
    ///
    /// サービス依頼には自動返信がない。
    pub fn acknowledgment(kind: FormKind) -> Option<Self> {
        kind.sends_acknowledgment()
            .then_some(Self::ContactAcknowledgment)
    }

    /// 宛先区分を返す
    pub fn recipient(&self) -> Recipient {
        match self {
            Self::ContactNotification | Self::OrderNotification => Recipient::Operator,
            Self::ContactAcknowledgment => Recipient::Submitter,
        }
    }

    /// テンプレート名を返す
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

/// メールメッセージ
///
/// テンプレートレンダリングの出力。NotificationSender に渡される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    /// 送信先メールアドレス
    pub to:        String,
    /// 件名
    pub subject:   String,
    /// HTML 本文
    pub html_body: String,
    /// プレーンテキスト本文
    pub text_body: String,
}

/// 送信受領
///
/// メール配信 API がメッセージ ID を返さない送信器（SMTP、Noop）では `None`。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendReceipt {
    pub message_id: Option<String>,
}

impl SendReceipt {
    /// メッセージ ID 付きの受領を作成する
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            message_id: Some(id.into()),
        }
    }
}
