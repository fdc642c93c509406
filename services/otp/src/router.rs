use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use otpgate_core::health::health;
use otpgate_core::middleware::request_id_layer;

use crate::handlers::otp::{generate_otp, validate_otp};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(health))
        // OTP
        .route("/generate_otp", post(generate_otp))
        .route("/validate_otp", post(validate_otp))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
