//! # Canonical Log Line ミドルウェア
//!
//! HTTP リクエスト完了時に、そのリクエストの重要情報を1行に集約した
//! サマリログ（Canonical Log Line）を出力する tower Layer。
//!
//! [Canonical Log Lines パターン](https://brandur.org/canonical-log-lines) に基づき、
//! フォーム送信 1 件ごとの結果（ステータス、レイテンシ）を 1 行で追えるようにする。
//!
//! ## 既存 TraceLayer との責務分離
//!
//! - TraceLayer: スパン作成（method, uri, request_id）
//! - CanonicalLogLineLayer: リクエスト完了サマリ（status, latency）
//!
//! TraceLayer のスパン内に配置することで、スパンフィールド（request_id）が
//! JSON ログに自動的に含まれる。
//!
//! ## 出力対象外
//!
//! - ヘルスチェック（`/health`）
//! - CORS プリフライト（`OPTIONS`）: ブラウザが送信のたびに発行するためノイズになる

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
    time::Instant,
};

use http::{Method, Request, Response};
use tower::{Layer, Service};

/// ヘルスチェックパスかどうかを判定する
fn is_health_check_path(path: &str) -> bool {
    path.starts_with("/health")
}

/// Canonical Log Line の出力対象外かどうかを判定する
fn is_excluded(method: &Method, path: &str) -> bool {
    method == Method::OPTIONS || is_health_check_path(path)
}

/// Canonical Log Line を出力する Layer
///
/// リクエスト完了時に `log.type = "canonical"` マーカー付きのサマリログを出力する。
/// 5xx は WARN、それ以外は INFO レベル。
///
/// ## レイヤー配置
///
/// TraceLayer の内側に配置し、スパンフィールドを活用する:
///
/// ```text
/// TraceLayer → CanonicalLogLineLayer → [他のミドルウェア] → handler
/// ```
#[derive(Clone, Debug)]
pub struct CanonicalLogLineLayer;

impl<S> Layer<S> for CanonicalLogLineLayer {
    type Service = CanonicalLogLineService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        CanonicalLogLineService { inner }
    }
}

/// Canonical Log Line を出力する Service
///
/// [`CanonicalLogLineLayer`] が生成する Service 実装。
#[derive(Clone, Debug)]
pub struct CanonicalLogLineService<S> {
    inner: S,
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for CanonicalLogLineService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: std::fmt::Display + 'static,
    ReqBody: Send + 'static,
    ResBody: Send + 'static,
{
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;
    type Response = S::Response;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        // clone-swap パターン: poll_ready で得た readiness を保持する inner を使う
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        let method = req.method().clone();
        let path = req.uri().path().to_owned();

        if is_excluded(&method, &path) {
            return Box::pin(async move { inner.call(req).await });
        }

        let start = Instant::now();

        Box::pin(async move {
            let result = inner.call(req).await;
            let latency_ms = start.elapsed().as_millis() as u64;

            match &result {
                Ok(response) if response.status().is_server_error() => {
                    tracing::warn!(
                        log.r#type = "canonical",
                        http.method = %method,
                        http.path = %path,
                        http.status_code = response.status().as_u16(),
                        http.latency_ms = latency_ms,
                        "リクエスト完了（サーバーエラー）"
                    );
                }
                Ok(response) => {
                    tracing::info!(
                        log.r#type = "canonical",
                        http.method = %method,
                        http.path = %path,
                        http.status_code = response.status().as_u16(),
                        http.latency_ms = latency_ms,
                        "リクエスト完了"
                    );
                }
                Err(err) => {
                    tracing::error!(
                        log.r#type = "canonical",
                        http.method = %method,
                        http.path = %path,
                        http.latency_ms = latency_ms,
                        error.message = %err,
                        "リクエスト処理エラー"
                    );
                }
            }

            result
        })
    }
}
