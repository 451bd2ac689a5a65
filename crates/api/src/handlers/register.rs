use axum::extract::{Json, State};
use axum::http::StatusCode;
use icetracer_core::services::auth_service::{
    ApiError, AppState, AuthResponse, AuthService, RegisterRequest,
};
use icetracer_primitives::error::ApiErrorResponse;
use std::sync::Arc;
use tracing::error;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "Auth",
    summary = "Register a new account",
    operation_id = "register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = AuthResponse),
        (status = 400, description = "Invalid input or email already registered", body = ApiErrorResponse),
        (status = 500, description = "Internal server error", body = ApiErrorResponse),
    ),
    security(()),
)]
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let res = AuthService::register(&state, &req)?;

    Ok((StatusCode::CREATED, Json(res)))
}
