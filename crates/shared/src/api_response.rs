//! # API レスポンスエンベロープ
//!
//! 公開 API の成功レスポンス形式 `{ "success": true, ... }` を提供する。
//!
//! フロントエンドのフォームは `success` フィールドだけを見て成否を判定するため、
//! ペイロードはエンベロープ直下にフラットに展開する。

use serde::{Deserialize, Serialize};

/// 公開 API の成功レスポンス型
///
/// `data` のフィールドは `#[serde(flatten)]` によりトップレベルに展開される。
/// 失敗レスポンスは [`ErrorResponse`](crate::ErrorResponse) を使用する。
///
/// ## 使用例
///
/// ```
/// use rajo_shared::ApiResponse;
///
/// #[derive(serde::Serialize)]
/// struct Payload {
///     message: &'static str,
/// }
///
/// let response = ApiResponse::new(Payload { message: "ok" });
/// assert!(response.success);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(flatten)]
    pub data:    T,
}

impl<T> ApiResponse<T> {
    /// 新しい成功レスポンスを作成する
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
