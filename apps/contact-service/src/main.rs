//! # Contact Service サーバー
//!
//! マーケティングサイトの問い合わせフォーム・サービス依頼フォームを受け付け、
//! 運営者への通知メールと送信者への自動返信メールを送る公開サービス。
//!
//! ## 構成
//!
//! ```text
//! ┌──────────────┐  POST   ┌──────────────────┐  HTTPS  ┌──────────────┐
//! │   Website    │────────>│ Contact Service  │────────>│  Resend API  │
//! └──────────────┘         └──────────────────┘         └──────────────┘
//! ```
//!
//! 永続化は行わず、リクエストごとに検証 → レンダリング → 送信で完結する。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `CONTACT_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `CONTACT_PORT` | No | ポート番号（デフォルト: `8080`） |
//! | `NOTIFICATION_BACKEND` | No | `resend` / `smtp` / `noop`（デフォルト: `resend`） |
//! | `RESEND_API_KEY` | No | 未設定の場合、送信リクエストは 500 を返す |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（Mailpit に送信）
//! NOTIFICATION_BACKEND=smtp cargo run -p rajo-contact-service
//!
//! # 本番環境
//! RESEND_API_KEY=re_... LOG_FORMAT=json cargo run -p rajo-contact-service --release
//! ```

use std::net::SocketAddr;

use anyhow::Context as _;
use rajo_contact_service::{
    app_builder::{build_router, build_state},
    config::ContactConfig,
};
use rajo_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// Contact Service サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    init_tracing(TracingConfig::from_env("contact-service"));
    let _tracing_guard = tracing::info_span!("app", service = "contact-service").entered();

    let config = ContactConfig::from_env().context("設定の読み込みに失敗しました")?;
    tracing::info!(
        "Contact Service サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    let state = build_state(&config.notification)?;
    let app = build_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("バインドアドレスが不正です")?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Contact Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
