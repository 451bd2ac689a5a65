use axum::{
    extract::{Extension, State},
    http::StatusCode,
    Json,
};
use icetracer_core::services::auth_service::{ApiError, AppState, AuthService, Claims};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct LogoutResponse {
    message: String,
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "Auth",
    summary = "Invalidate the current token",
    operation_id = "logout",
    responses(
        (status = 200, description = "Logout successful", body = LogoutResponse),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error"),
    ),
    security(("bearerAuth" = [])),
)]
pub async fn logout(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<(StatusCode, Json<LogoutResponse>), ApiError> {
    AuthService::logout(&state, &claims)?;

    info!("User {} logged out, jti {} blacklisted", claims.sub, claims.jti);

    Ok((
        StatusCode::OK,
        Json(LogoutResponse {
            message: "Logged out successfully".to_string(),
        }),
    ))
}
