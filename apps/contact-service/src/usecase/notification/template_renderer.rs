//! # テンプレートレンダラー
//!
//! tera テンプレートエンジンで通知メールを HTML/plaintext 両形式で生成する。
//!
//! ## 設計方針
//!
//! - **`include_str!` によるコンパイル時埋め込み**: テンプレートはバイナリに埋め込まれる
//! - **HTML の自動エスケープ**: `.html` テンプレートでは送信内容がエスケープされる
//! - **未入力の任意項目**: `Not provided` と明示して埋め込む

use rajo_domain::{
    notification::{EmailMessage, NotificationError, NotificationTemplate},
    submission::{PhoneNumber, ServiceName, Submission},
};
use tera::{Context, Tera};

/// 任意項目が未入力のときに埋め込む文字列
pub const NOT_PROVIDED: &str = "Not provided";

/// テンプレートレンダラー
///
/// tera テンプレートエンジンをラップし、`Submission` から
/// `EmailMessage` を生成する。
pub struct TemplateRenderer {
    engine:     Tera,
    brand_name: String,
}

impl TemplateRenderer {
    /// 新しいレンダラーインスタンスを作成
    ///
    /// `include_str!` で埋め込んだテンプレートを tera に登録する。
    pub fn new(brand_name: impl Into<String>) -> Result<Self, NotificationError> {
        let mut engine = Tera::default();

        engine
            .add_raw_templates(vec![
                (
                    "contact_notification.html",
                    include_str!("../../../templates/notifications/contact_notification.html"),
                ),
                (
                    "contact_notification.txt",
                    include_str!("../../../templates/notifications/contact_notification.txt"),
                ),
                (
                    "contact_acknowledgment.html",
                    include_str!("../../../templates/notifications/contact_acknowledgment.html"),
                ),
                (
                    "contact_acknowledgment.txt",
                    include_str!("../../../templates/notifications/contact_acknowledgment.txt"),
                ),
                (
                    "order_notification.html",
                    include_str!("../../../templates/notifications/order_notification.html"),
                ),
                (
                    "order_notification.txt",
                    include_str!("../../../templates/notifications/order_notification.txt"),
                ),
            ])
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        Ok(Self {
            engine,
            brand_name: brand_name.into(),
        })
    }

    /// 送信内容からメールメッセージを生成する
    ///
    /// # 引数
    ///
    /// - `template`: 使用する通知テンプレート
    /// - `submission`: 検証済みの送信内容
    /// - `to`: 宛先メールアドレス
    pub fn render(
        &self,
        template: NotificationTemplate,
        submission: &Submission,
        to: &str,
    ) -> Result<EmailMessage, NotificationError> {
        let name = template.name();
        let context = self.build_context(submission);

        let html_body = self
            .engine
            .render(&format!("{name}.html"), &context)
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        let text_body = self
            .engine
            .render(&format!("{name}.txt"), &context)
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        Ok(EmailMessage {
            to: to.to_string(),
            subject: self.subject(template, submission),
            html_body,
            text_body,
        })
    }

    fn subject(&self, template: NotificationTemplate, submission: &Submission) -> String {
        match template {
            NotificationTemplate::ContactNotification => format!(
                "New Contact Form Submission - {}",
                submission
                    .service()
                    .map_or(NOT_PROVIDED, ServiceName::as_str)
            ),
            NotificationTemplate::ContactAcknowledgment => {
                format!("Thank you for contacting {}!", self.brand_name)
            }
            NotificationTemplate::OrderNotification => {
                format!("New Service Request - {}", self.brand_name)
            }
        }
    }

    fn build_context(&self, submission: &Submission) -> Context {
        let mut context = Context::new();
        context.insert("brand", &self.brand_name);
        context.insert("name", submission.name().as_str());
        context.insert("email", submission.email().as_str());
        context.insert(
            "phone",
            submission.phone().map_or(NOT_PROVIDED, PhoneNumber::as_str),
        );
        context.insert(
            "service",
            submission
                .service()
                .map_or(NOT_PROVIDED, ServiceName::as_str),
        );
        // 送信者向けの控えではプレースホルダーを出さず、文ごと省く
        context.insert(
            "inquiry_service",
            &submission.service().map(ServiceName::as_str),
        );
        context.insert("message", submission.message().as_str());
        context.insert(
            "submitted_at",
            &submission
                .submitted_at()
                .format("%Y-%m-%d %H:%M UTC")
                .to_string(),
        );
        context
    }
}
