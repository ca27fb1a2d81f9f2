//! # ヘルスチェックハンドラ
//!
//! 問い合わせ受付サービスの稼働状態を確認するためのエンドポイント。
//!
//! ## エンドポイント
//!
//! ```text
//! GET /health
//! ```
//!
//! ## レスポンス例
//!
//! ```json
//! {
//!   "status": "healthy",
//!   "version": "0.1.0"
//! }
//! ```

use axum::Json;
use rajo_shared::HealthResponse;

/// ヘルスチェックエンドポイント（liveness）
///
/// メール配信 API の疎通は確認しない。
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}
