//! # ドメイン層エラー定義
//!
//! フォーム送信内容の検証失敗を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `MalformedBody` | 400 Bad Request | ボディが JSON オブジェクトでない |
//! | `MissingFields` | 400 Bad Request | 必須項目の不足 |
//!
//! どちらもクライアント起因のエラーであり、障害としては扱わない。

use thiserror::Error;

use crate::submission::RequiredField;

/// フォーム送信内容の検証エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionRejection {
    /// ボディを JSON オブジェクトとして解釈できない
    ///
    /// 必須項目がすべて欠けているものとして扱う。
    #[error("リクエストボディを JSON オブジェクトとして解釈できない: {0}")]
    MalformedBody(String),

    /// 必須項目が不足している（宣言順に列挙）
    #[error("必須項目が不足している: {}", join_fields(.0))]
    MissingFields(Vec<RequiredField>),
}

impl SubmissionRejection {
    /// 不足している必須項目を宣言順に返す
    pub fn missing_fields(&self) -> &[RequiredField] {
        match self {
            Self::MalformedBody(_) => &RequiredField::ALL,
            Self::MissingFields(fields) => fields,
        }
    }
}

fn join_fields(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(RequiredField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
