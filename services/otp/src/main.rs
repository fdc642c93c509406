use tracing::info;

use otpgate_core::tracing::init_tracing;
use otpgate_otp::config::OtpConfig;
use otpgate_otp::router::build_router;
use otpgate_otp::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = OtpConfig::from_env();
    let state = AppState::from_config(&config);

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.otp_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!(
        ttl_secs = config.otp_ttl_secs,
        telegram_enabled = config.telegram.is_some(),
        "otp service listening on {addr}"
    );
    axum::serve(listener, router).await.expect("server error");
}
