use axum::extract::{Json, Path, State};
use axum::Extension;
use icetracer_core::services::user_service::{ApiError, AppState, UserResponse, UserService};
use icetracer_core::Claims;
use icetracer_primitives::error::ApiErrorResponse;
use icetracer_primitives::models::dtos::user_dto::ChangeRoleRequest;
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = "Admin",
    summary = "List all users",
    operation_id = "adminListUsers",
    responses(
        (status = 200, description = "All users", body = [UserResponse]),
        (status = 403, description = "Admin role required", body = ApiErrorResponse),
    ),
    security(("bearerAuth" = [])),
)]
pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = UserService::list_users(&state)?;
    Ok(Json(users.iter().map(UserResponse::from).collect()))
}

#[utoipa::path(
    put,
    path = "/api/admin/users/{user_id}/role",
    tag = "Admin",
    summary = "Change a user's role",
    description = "Upgrading a user to `affiliate` provisions their affiliate account and \
                   tracking slug on first upgrade.",
    operation_id = "adminChangeUserRole",
    params(("user_id" = Uuid, Path, description = "Target user")),
    request_body = ChangeRoleRequest,
    responses(
        (status = 200, description = "Updated user", body = UserResponse),
        (status = 403, description = "Admin role required", body = ApiErrorResponse),
        (status = 404, description = "User not found", body = ApiErrorResponse),
    ),
    security(("bearerAuth" = [])),
)]
pub async fn change_user_role(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(user_id): Path<Uuid>,
    Json(req): Json<ChangeRoleRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let admin_id = claims.user_id()?;
    let user = UserService::change_role(&state, admin_id, user_id, req.role).await?;
    Ok(Json(UserResponse::from(&user)))
}
