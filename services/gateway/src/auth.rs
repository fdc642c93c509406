//! Bearer-token extractor for protected routes.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};

use crate::error::GatewayError;
use crate::state::AppState;
use crate::token::validate_token;

/// Username carried by a valid `Authorization: Bearer <jwt>` header.
///
/// Rejects with 401 when the header is absent, not a bearer token, or the
/// token fails validation.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub username: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = GatewayError;

    // Validation is synchronous; resolve it before building the 'static future.
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let result = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or(GatewayError::Unauthorized)
            .and_then(|bearer| {
                validate_token(bearer.token(), &state.jwt_secret).map_err(|e| {
                    tracing::debug!(error = %e, "bearer token rejected");
                    GatewayError::Unauthorized
                })
            })
            .map(|claims| Self {
                username: claims.sub,
            });

        async move { result }
    }
}
