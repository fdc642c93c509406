use axum::Json;
use serde::Serialize;

use crate::auth::AuthUser;

#[derive(Serialize)]
pub struct ProfileResponse {
    pub user: String,
    pub message: &'static str,
}

// ── GET /profile ─────────────────────────────────────────────────────────────

pub async fn profile(user: AuthUser) -> Json<ProfileResponse> {
    Json(ProfileResponse {
        user: user.username,
        message: "access granted",
    })
}
