use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    routing::post,
};
use serde_json::{Value, json};

use otpgate_otp::domain::repository::Notifier;
use otpgate_otp::infra::telegram::TelegramNotifier;

/// Minimal stand-in for the Bot API `sendMessage` method.
async fn spawn_bot_api(status: StatusCode) -> (String, Arc<Mutex<Vec<Value>>>) {
    let received = Arc::new(Mutex::new(Vec::new()));
    let captured = received.clone();
    let app = Router::new().route(
        "/{bot}/sendMessage",
        post(move |Path(bot): Path<String>, Json(body): Json<Value>| {
            let captured = captured.clone();
            async move {
                captured
                    .lock()
                    .unwrap()
                    .push(json!({ "bot": bot, "body": body }));
                (status, Json(json!({ "ok": status.is_success() })))
            }
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), received)
}

#[tokio::test]
async fn should_post_message_to_configured_chat() {
    let (api_url, received) = spawn_bot_api(StatusCode::OK).await;
    let notifier = TelegramNotifier::new(&api_url, "123:abc", "42");

    assert!(notifier.send("Your OTP code is: 123456").await);

    let received = received.lock().unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0]["bot"], "bot123:abc");
    assert_eq!(received[0]["body"]["chat_id"], "42");
    assert_eq!(received[0]["body"]["text"], "Your OTP code is: 123456");
}

#[tokio::test]
async fn should_report_false_on_error_status() {
    let (api_url, received) = spawn_bot_api(StatusCode::BAD_REQUEST).await;
    let notifier = TelegramNotifier::new(&api_url, "123:abc", "42");

    assert!(!notifier.send("hello").await);
    assert_eq!(received.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_report_false_when_unreachable() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let notifier = TelegramNotifier::new(&format!("http://{addr}"), "123:abc", "42");
    assert!(!notifier.send("hello").await);
}
