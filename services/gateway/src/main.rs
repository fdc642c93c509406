use tracing::info;

use otpgate_core::tracing::init_tracing;
use otpgate_gateway::config::GatewayConfig;
use otpgate_gateway::router::build_router;
use otpgate_gateway::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = GatewayConfig::from_env().expect("invalid gateway configuration");
    let state = AppState::from_config(&config).expect("failed to build upstream clients");

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.gateway_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!(
        otp_service_url = %config.otp_service_url,
        resource_service_url = %config.resource_service_url,
        "gateway listening on {addr}"
    );
    axum::serve(listener, router).await.expect("server error");
}
