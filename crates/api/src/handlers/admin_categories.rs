use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use icetracer_core::services::content_service::{
    ApiError, AppState, ContentService, CreateCategoryRequest,
};
use icetracer_primitives::error::ApiErrorResponse;
use icetracer_primitives::models::entities::category::Category;
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/admin/categories",
    tag = "Admin",
    summary = "Create a blog category",
    operation_id = "adminCreateCategory",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = Category),
        (status = 400, description = "Invalid input or duplicate slug", body = ApiErrorResponse),
    ),
    security(("bearerAuth" = [])),
)]
pub async fn create_category(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<Category>), ApiError> {
    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let category = ContentService::create_category(&state, &req)?;
    Ok((StatusCode::CREATED, Json(category)))
}

#[utoipa::path(
    delete,
    path = "/api/admin/categories/{category_id}",
    tag = "Admin",
    summary = "Delete a category",
    operation_id = "adminDeleteCategory",
    params(("category_id" = Uuid, Path, description = "Category id")),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 404, description = "Category not found", body = ApiErrorResponse),
    ),
    security(("bearerAuth" = [])),
)]
pub async fn delete_category(
    State(state): State<Arc<AppState>>,
    Path(category_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    ContentService::delete_category(&state, category_id)?;
    Ok(StatusCode::NO_CONTENT)
}
