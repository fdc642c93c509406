use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::error::ResourceServiceError;
use crate::handlers::json_body;
use crate::state::AppState;
use crate::usecase::user::{CreateUserInput, CreateUserUseCase, GetUserUseCase};

// ── POST /users ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
}

#[derive(Serialize)]
pub struct CreateUserResponse {
    pub message: &'static str,
    pub otp_secret: String,
}

pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateUserResponse>), ResourceServiceError> {
    let body = json_body(payload)?;
    let usecase = CreateUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase
        .execute(CreateUserInput {
            username: body.username,
            password: body.password,
            email: body.email,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateUserResponse {
            message: "user created",
            otp_secret: user.otp_secret,
        }),
    ))
}

// ── GET /users/{username} ────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub otp_secret: String,
    pub email: String,
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<UserResponse>, ResourceServiceError> {
    let usecase = GetUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase.execute(&username).await?;
    Ok(Json(UserResponse {
        id: user.id,
        username: user.username,
        password_hash: user.password_hash,
        otp_secret: user.otp_secret,
        email: user.email,
    }))
}
