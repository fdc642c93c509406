use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{Method, StatusCode},
};

use crate::auth::AuthUser;
use crate::error::GatewayError;
use crate::handlers::{json_body, path_param};
use crate::state::AppState;
use crate::usecase::item::ForwardItemsInput;

type Relayed = (StatusCode, Json<serde_json::Value>);

async fn relay(
    state: &AppState,
    user: &AuthUser,
    input: ForwardItemsInput,
) -> Result<Relayed, GatewayError> {
    let forwarded = state
        .forward_items()
        .execute(&user.username, input)
        .await?;
    Ok((forwarded.status, Json(forwarded.body)))
}

// ── /items ───────────────────────────────────────────────────────────────────

pub async fn list_items(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Relayed, GatewayError> {
    let input = ForwardItemsInput {
        method: Method::GET,
        id: None,
        body: None,
    };
    relay(&state, &user, input).await
}

pub async fn create_item(
    State(state): State<AppState>,
    user: AuthUser,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Relayed, GatewayError> {
    let input = ForwardItemsInput {
        method: Method::POST,
        id: None,
        body: Some(json_body(payload)?),
    };
    relay(&state, &user, input).await
}

// ── /items/{id} ──────────────────────────────────────────────────────────────

pub async fn get_item(
    State(state): State<AppState>,
    user: AuthUser,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Relayed, GatewayError> {
    let id = path_param(id)?;
    let input = ForwardItemsInput {
        method: Method::GET,
        id: Some(id),
        body: None,
    };
    relay(&state, &user, input).await
}

pub async fn update_item(
    State(state): State<AppState>,
    user: AuthUser,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Relayed, GatewayError> {
    let id = path_param(id)?;
    let input = ForwardItemsInput {
        method: Method::PUT,
        id: Some(id),
        body: Some(json_body(payload)?),
    };
    relay(&state, &user, input).await
}

pub async fn delete_item(
    State(state): State<AppState>,
    user: AuthUser,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Relayed, GatewayError> {
    let id = path_param(id)?;
    let input = ForwardItemsInput {
        method: Method::DELETE,
        id: Some(id),
        body: None,
    };
    relay(&state, &user, input).await
}
