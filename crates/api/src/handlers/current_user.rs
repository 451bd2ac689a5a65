use axum::{extract::State, Extension, Json};
use icetracer_core::services::auth_service::{ApiError, AppState, AuthService, Claims, UserResponse};
use icetracer_primitives::error::ApiErrorResponse;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/current_user",
    tag = "Auth",
    summary = "Details of the authenticated user",
    operation_id = "currentUser",
    responses(
        (status = 200, description = "Current user", body = UserResponse),
        (status = 401, description = "Missing or invalid token", body = ApiErrorResponse),
    ),
    security(("bearerAuth" = [])),
)]
pub async fn current_user_details(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<UserResponse>, ApiError> {
    let user_id = claims.user_id()?;
    let user = AuthService::current_user(&state, user_id)?;
    Ok(Json(UserResponse::from(&user)))
}
