use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use otpgate_core::health::health;
use otpgate_core::middleware::request_id_layer;

use crate::handlers::{
    item::{create_item, delete_item, get_item, list_items, update_item},
    user::{create_user, get_user},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(health))
        // Users
        .route("/users", post(create_user))
        .route("/users/{username}", get(get_user))
        // Items
        .route("/items", get(list_items).post(create_item))
        .route(
            "/items/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
