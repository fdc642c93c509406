use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::Duration;
use serde_json::{Value, json};

use otpgate_otp::router::build_router;

use crate::helpers::{TEST_TTL_SECS, TestContext, test_context};

fn server(ctx: &TestContext) -> TestServer {
    TestServer::new(build_router(ctx.state.clone())).unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let ctx = test_context(true);
    let resp = server(&ctx).get("/health").await;
    resp.assert_status_ok();
    assert_eq!(resp.json::<Value>(), json!({ "status": "ok" }));
}

#[tokio::test]
async fn generate_returns_delivery_flag_but_never_the_code() {
    let ctx = test_context(true);
    let resp = server(&ctx)
        .post("/generate_otp")
        .json(&json!({ "username": "alice" }))
        .await;

    resp.assert_status_ok();
    let body: Value = resp.json();
    assert_eq!(body, json!({ "message": "OTP generated", "telegram_sent": true }));

    let code = ctx.store.get("alice").unwrap().code;
    assert!(!resp.text().contains(&code));
}

#[tokio::test]
async fn generate_reports_false_when_delivery_fails() {
    let ctx = test_context(false);
    let resp = server(&ctx)
        .post("/generate_otp")
        .json(&json!({ "username": "alice" }))
        .await;

    resp.assert_status_ok();
    assert_eq!(resp.json::<Value>()["telegram_sent"], false);
}

#[tokio::test]
async fn generate_without_username_is_bad_request() {
    let ctx = test_context(true);
    let server = server(&ctx);

    let resp = server.post("/generate_otp").json(&json!({})).await;
    resp.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["kind"], "INVALID_REQUEST");

    let resp = server
        .post("/generate_otp")
        .json(&json!({ "username": "" }))
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn non_string_fields_are_bad_request() {
    let ctx = test_context(true);
    let server = server(&ctx);

    let resp = server
        .post("/generate_otp")
        .json(&json!({ "username": 42 }))
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["kind"], "INVALID_REQUEST");
    assert!(ctx.store.is_empty());

    let resp = server
        .post("/validate_otp")
        .json(&json!({ "username": "alice", "code": 123456 }))
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["kind"], "INVALID_REQUEST");
}

#[tokio::test]
async fn generate_without_body_is_bad_request() {
    let ctx = test_context(true);
    let resp = server(&ctx).post("/generate_otp").await;
    resp.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn validate_without_code_is_bad_request() {
    let ctx = test_context(true);
    let resp = server(&ctx)
        .post("/validate_otp")
        .json(&json!({ "username": "alice" }))
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn validate_reports_each_outcome_with_200() {
    let ctx = test_context(true);
    let server = server(&ctx);

    let resp = server
        .post("/validate_otp")
        .json(&json!({ "username": "alice", "code": "123456" }))
        .await;
    resp.assert_status_ok();
    assert_eq!(
        resp.json::<Value>(),
        json!({ "valid": false, "reason": "no existe OTP" })
    );

    server
        .post("/generate_otp")
        .json(&json!({ "username": "alice" }))
        .await
        .assert_status_ok();
    let code = ctx.notifier.last_code().unwrap();
    let wrong = if code == "000000" { "000001" } else { "000000" };

    let resp = server
        .post("/validate_otp")
        .json(&json!({ "username": "alice", "code": wrong }))
        .await;
    resp.assert_status_ok();
    assert_eq!(
        resp.json::<Value>(),
        json!({ "valid": false, "reason": "incorrecto" })
    );

    let resp = server
        .post("/validate_otp")
        .json(&json!({ "username": "alice", "code": code }))
        .await;
    resp.assert_status_ok();
    assert_eq!(resp.json::<Value>(), json!({ "valid": true }));
}

#[tokio::test]
async fn validate_reports_expired() {
    let ctx = test_context(true);
    let server = server(&ctx);

    server
        .post("/generate_otp")
        .json(&json!({ "username": "alice" }))
        .await
        .assert_status_ok();
    let code = ctx.notifier.last_code().unwrap();
    ctx.clock.advance(Duration::seconds(TEST_TTL_SECS + 5));

    let resp = server
        .post("/validate_otp")
        .json(&json!({ "username": "alice", "code": code }))
        .await;
    resp.assert_status_ok();
    assert_eq!(
        resp.json::<Value>(),
        json!({ "valid": false, "reason": "expirado" })
    );
    assert!(ctx.store.is_empty());
}
