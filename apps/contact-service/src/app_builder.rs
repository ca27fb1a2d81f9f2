//! # Contact Service アプリケーション構築
//!
//! DI（送信器・State）の初期化とルーター構築を担当する。
//! `main.rs` は設定読み込みとサーバー起動に集中する。

use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderName, Method, header},
    routing::{get, post},
};
use rajo_domain::clock::SystemClock;
use rajo_infra::notification::{
    NoopNotificationSender,
    NotificationSender,
    ResendNotificationSender,
    SmtpNotificationSender,
};
use rajo_shared::{
    canonical_log::CanonicalLogLineLayer,
    observability::{MakeRequestUuidV7, make_request_span},
};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    config::{NotificationBackend, NotificationConfig},
    handler::{
        SubmissionState,
        health_check,
        method_not_allowed,
        send_contact_email,
        send_order_email,
    },
    usecase::{NotificationService, TemplateRenderer},
};

/// 送信器を構築する
///
/// `resend` で API キーが未設定の場合は `None` を返す。
/// 起動は継続し、リクエスト時に「未設定」エラーとして扱う。
pub fn build_sender(
    config: &NotificationConfig,
) -> anyhow::Result<Option<Arc<dyn NotificationSender>>> {
    let sender: Arc<dyn NotificationSender> = match config.backend {
        NotificationBackend::Resend => {
            let Some(api_key) = config.resend_api_key.clone() else {
                tracing::warn!("RESEND_API_KEY が未設定のため、送信リクエストは 500 を返します");
                return Ok(None);
            };
            Arc::new(ResendNotificationSender::new(
                &config.resend_api_base_url,
                api_key,
                config.from_address.clone(),
                config.timeout,
            )?)
        }
        NotificationBackend::Smtp => Arc::new(SmtpNotificationSender::new(
            &config.smtp_host,
            config.smtp_port,
            config.from_address.clone(),
        )),
        NotificationBackend::Noop => Arc::new(NoopNotificationSender),
    };

    tracing::info!(backend = %config.backend, "通知送信器を初期化しました");
    Ok(Some(sender))
}

/// 設定から共有状態を組み立てる
pub fn build_state(config: &NotificationConfig) -> anyhow::Result<Arc<SubmissionState>> {
    let notification = NotificationService::new(
        build_sender(config)?,
        TemplateRenderer::new(config.brand_name.clone())?,
        config.operator_address.clone(),
    );

    Ok(Arc::new(SubmissionState {
        notification,
        clock: Arc::new(SystemClock),
    }))
}

/// CORS レイヤー
///
/// 任意のオリジンを許可し、`OPTIONS` には空ボディの 200 で応答する。
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            header::CONTENT_TYPE,
        ])
}

/// ルーター定義を行う
pub fn build_router(state: Arc<SubmissionState>) -> Router {
    Router::new()
        .route(
            "/send-contact-email",
            post(send_contact_email).fallback(method_not_allowed),
        )
        .route(
            "/send-order-email",
            post(send_order_email).fallback(method_not_allowed),
        )
        .with_state(state)
        .route("/health", get(health_check))
        .layer(cors_layer())
        // レイヤー順序: 下に書いたものが外側
        // 1. SetRequestIdLayer（最外）: リクエスト受信時に UUID v7 を生成（またはクライアント提供値を使用）
        // 2. TraceLayer: カスタムスパンに request_id を含め、全ログに自動注入
        // 3. CanonicalLogLineLayer: リクエスト完了時に1行サマリログを出力（スパン内）
        // 4. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
        // 5. CorsLayer: プリフライトに応答し、全レスポンスに CORS ヘッダーを付与
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(CanonicalLogLineLayer)
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
