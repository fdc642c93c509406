use chrono::Duration;

use otpgate_otp::domain::repository::Clock;
use otpgate_otp::domain::types::OtpValidation;
use otpgate_otp::error::OtpServiceError;
use otpgate_otp::usecase::otp::{GenerateOtpInput, ValidateOtpInput};

use crate::helpers::{TEST_TTL_SECS, TestContext, test_context};

async fn generate(ctx: &TestContext, username: &str) -> bool {
    ctx.state
        .generate_otp()
        .execute(GenerateOtpInput {
            username: Some(username.to_owned()),
        })
        .await
        .unwrap()
        .delivered
}

fn validate(ctx: &TestContext, username: &str, code: &str) -> OtpValidation {
    ctx.state
        .validate_otp()
        .execute(ValidateOtpInput {
            username: Some(username.to_owned()),
            code: Some(code.to_owned()),
        })
        .unwrap()
}

#[tokio::test]
async fn should_issue_record_and_deliver_code() {
    let ctx = test_context(true);

    assert!(generate(&ctx, "alice").await);

    let record = ctx.store.get("alice").expect("record stored");
    assert_eq!(record.code.len(), 6);
    assert_eq!(
        record.expires_at,
        ctx.clock.now() + Duration::seconds(TEST_TTL_SECS)
    );
    assert_eq!(ctx.notifier.last_code().as_deref(), Some(record.code.as_str()));
}

#[tokio::test]
async fn should_report_failed_delivery_without_failing() {
    let ctx = test_context(false);

    assert!(!generate(&ctx, "alice").await);
    assert!(ctx.store.get("alice").is_some(), "record kept despite failed delivery");
}

#[tokio::test]
async fn should_reject_missing_username() {
    let ctx = test_context(true);

    let result = ctx
        .state
        .generate_otp()
        .execute(GenerateOtpInput { username: None })
        .await;

    assert!(
        matches!(result, Err(OtpServiceError::InvalidRequest(_))),
        "expected InvalidRequest"
    );
    assert!(ctx.store.is_empty());
    assert!(ctx.notifier.codes().is_empty());
}

#[tokio::test]
async fn should_reject_missing_code() {
    let ctx = test_context(true);

    let result = ctx.state.validate_otp().execute(ValidateOtpInput {
        username: Some("alice".into()),
        code: None,
    });

    assert!(matches!(result, Err(OtpServiceError::InvalidRequest(_))));
}

#[tokio::test]
async fn should_return_not_found_without_prior_generate() {
    let ctx = test_context(true);
    assert_eq!(validate(&ctx, "nobody", "123456"), OtpValidation::NotFound);
}

#[tokio::test]
async fn should_validate_once_then_report_not_found() {
    let ctx = test_context(true);
    generate(&ctx, "alice").await;
    let code = ctx.notifier.last_code().unwrap();

    assert_eq!(validate(&ctx, "alice", &code), OtpValidation::Valid);
    assert_eq!(validate(&ctx, "alice", &code), OtpValidation::NotFound);
}

#[tokio::test]
async fn should_keep_code_valid_after_mismatch() {
    let ctx = test_context(true);
    generate(&ctx, "alice").await;
    let code = ctx.notifier.last_code().unwrap();
    let wrong = if code == "000000" { "000001" } else { "000000" };

    assert_eq!(validate(&ctx, "alice", wrong), OtpValidation::Mismatch);
    assert_eq!(validate(&ctx, "alice", &code), OtpValidation::Valid);
}

#[tokio::test]
async fn should_expire_and_remove_record() {
    let ctx = test_context(true);
    generate(&ctx, "alice").await;
    let code = ctx.notifier.last_code().unwrap();

    ctx.clock.advance(Duration::seconds(TEST_TTL_SECS + 1));

    assert_eq!(validate(&ctx, "alice", &code), OtpValidation::Expired);
    assert_eq!(validate(&ctx, "alice", &code), OtpValidation::NotFound);
}

#[tokio::test]
async fn should_still_accept_code_at_exact_expiry() {
    let ctx = test_context(true);
    generate(&ctx, "alice").await;
    let code = ctx.notifier.last_code().unwrap();

    ctx.clock.advance(Duration::seconds(TEST_TTL_SECS));

    assert_eq!(validate(&ctx, "alice", &code), OtpValidation::Valid);
}

#[tokio::test]
async fn should_replace_previous_code_on_regenerate() {
    let ctx = test_context(true);
    generate(&ctx, "alice").await;
    generate(&ctx, "alice").await;

    let codes = ctx.notifier.codes();
    assert_eq!(codes.len(), 2);
    assert_eq!(ctx.store.len(), 1);
    assert_eq!(ctx.store.get("alice").unwrap().code, codes[1]);

    if codes[0] != codes[1] {
        assert_eq!(validate(&ctx, "alice", &codes[0]), OtpValidation::Mismatch);
    }
    assert_eq!(validate(&ctx, "alice", &codes[1]), OtpValidation::Valid);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_generates_leave_one_record_from_one_call() {
    let ctx = test_context(true);

    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..24 {
        let state = ctx.state.clone();
        tasks.spawn(async move {
            state
                .generate_otp()
                .execute(GenerateOtpInput {
                    username: Some("alice".into()),
                })
                .await
                .map(|out| out.delivered)
        });
    }
    while let Some(joined) = tasks.join_next().await {
        assert!(joined.unwrap().unwrap());
    }

    assert_eq!(ctx.store.len(), 1);
    let stored = ctx.store.get("alice").unwrap().code;
    assert!(ctx.notifier.codes().contains(&stored));
}
