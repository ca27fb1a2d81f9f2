//! ResendNotificationSender の結合テスト
//!
//! httpmock のモックサーバーを Resend API に見立て、
//! リクエスト形状とレスポンスの扱いを検証する。

use std::time::Duration;

use httpmock::prelude::*;
use pretty_assertions::assert_eq;
use rajo_domain::notification::{EmailMessage, NotificationError};
use rajo_infra::notification::{NotificationSender, ResendNotificationSender};
use serde_json::json;

const FROM: &str = "Rajo Solutions <onboarding@resend.dev>";

fn sender_for(server: &MockServer, timeout: Duration) -> ResendNotificationSender {
    ResendNotificationSender::new(&server.base_url(), "re_test_key".to_string(), FROM.to_string(), timeout)
        .unwrap()
}

fn operator_email() -> EmailMessage {
    EmailMessage {
        to:        "ops@example.com".to_string(),
        subject:   "New Contact Form Submission - Branding".to_string(),
        html_body: "<p>Ada</p>".to_string(),
        text_body: "Ada".to_string(),
    }
}

#[tokio::test]
async fn test_2xxレスポンスでメッセージidを返す() {
    // Given
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/emails")
            .header("authorization", "Bearer re_test_key")
            .json_body(json!({
                "from": FROM,
                "to": ["ops@example.com"],
                "subject": "New Contact Form Submission - Branding",
                "html": "<p>Ada</p>",
                "text": "Ada"
            }));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({ "id": "49a3999c-0ce1-4ea6-ab68-afcd6dc2e794" }));
    });
    let sut = sender_for(&server, Duration::from_secs(5));

    // When
    let receipt = sut.send_email(&operator_email()).await.unwrap();

    // Then
    api_mock.assert();
    assert_eq!(
        receipt.message_id.as_deref(),
        Some("49a3999c-0ce1-4ea6-ab68-afcd6dc2e794")
    );
}

#[tokio::test]
async fn test_非2xxレスポンスでステータスと本文を含むsend_failedを返す() {
    // Given
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/emails");
        then.status(422)
            .header("Content-Type", "application/json")
            .json_body(json!({ "name": "validation_error", "message": "Invalid `to` field" }));
    });
    let sut = sender_for(&server, Duration::from_secs(5));

    // When
    let result = sut.send_email(&operator_email()).await;

    // Then
    api_mock.assert();
    let Err(NotificationError::SendFailed(detail)) = result else {
        panic!("SendFailed を期待したが {result:?} だった");
    };
    assert!(detail.contains("422"), "{detail}");
    assert!(detail.contains("validation_error"), "{detail}");
}

#[tokio::test]
async fn test_idを含まない2xxレスポンスはidなしの受付結果を返す() {
    // Given: 本文が JSON でない 200 応答
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/emails");
        then.status(200).body("ok");
    });
    let sut = sender_for(&server, Duration::from_secs(5));

    // When
    let receipt = sut.send_email(&operator_email()).await.unwrap();

    // Then: ステータスで成功と判定し、id は持たない
    mock.assert_hits(1);
    assert_eq!(receipt.message_id, None);
}

#[tokio::test]
async fn test_本文が空の2xxレスポンスも成功として扱う() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/emails");
        then.status(200);
    });
    let sut = sender_for(&server, Duration::from_secs(5));

    let receipt = sut.send_email(&operator_email()).await.unwrap();

    assert_eq!(receipt.message_id, None);
}

#[tokio::test]
async fn test_タイムアウトを超えた応答はsend_failedを返す() {
    // Given: 応答がタイムアウトより遅いモック
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/emails");
        then.status(200)
            .delay(Duration::from_millis(500))
            .json_body(json!({ "id": "late" }));
    });
    let sut = sender_for(&server, Duration::from_millis(50));

    // When
    let result = sut.send_email(&operator_email()).await;

    // Then
    let Err(NotificationError::SendFailed(detail)) = result else {
        panic!("SendFailed を期待したが {result:?} だった");
    };
    assert!(detail.contains("タイムアウト"), "{detail}");
}

#[tokio::test]
async fn test_接続できない場合はsend_failedを返す() {
    // Given: 何も待ち受けていないポート
    let sut = ResendNotificationSender::new(
        "http://127.0.0.1:9",
        "re_test_key".to_string(),
        FROM.to_string(),
        Duration::from_secs(1),
    )
    .unwrap();

    // When
    let result = sut.send_email(&operator_email()).await;

    // Then
    assert!(matches!(result, Err(NotificationError::SendFailed(_))));
}
