use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use icetracer_core::services::content_service::{
    ApiError, AppState, ContentService, CreatePostRequest, UpdatePostRequest,
};
use icetracer_primitives::error::ApiErrorResponse;
use icetracer_primitives::models::entities::post::Post;
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;
use validator::Validate;

#[utoipa::path(
    get,
    path = "/api/admin/posts",
    tag = "Admin",
    summary = "List all posts, drafts included",
    operation_id = "adminListPosts",
    responses((status = 200, description = "All posts, newest first", body = [Post])),
    security(("bearerAuth" = [])),
)]
pub async fn all_posts(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Post>>, ApiError> {
    Ok(Json(ContentService::list_posts(&state)?))
}

#[utoipa::path(
    post,
    path = "/api/admin/posts",
    tag = "Admin",
    summary = "Create a blog post",
    operation_id = "adminCreatePost",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created", body = Post),
        (status = 400, description = "Invalid input or duplicate slug", body = ApiErrorResponse),
    ),
    security(("bearerAuth" = [])),
)]
pub async fn create_post(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let post = ContentService::create_post(&state, &req)?;
    Ok((StatusCode::CREATED, Json(post)))
}

#[utoipa::path(
    put,
    path = "/api/admin/posts/{post_id}",
    tag = "Admin",
    summary = "Update a blog post",
    operation_id = "adminUpdatePost",
    params(("post_id" = Uuid, Path, description = "Post id")),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Updated post", body = Post),
        (status = 404, description = "Post not found", body = ApiErrorResponse),
    ),
    security(("bearerAuth" = [])),
)]
pub async fn update_post(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<Uuid>,
    Json(req): Json<UpdatePostRequest>,
) -> Result<Json<Post>, ApiError> {
    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    Ok(Json(ContentService::update_post(&state, post_id, &req)?))
}

#[utoipa::path(
    delete,
    path = "/api/admin/posts/{post_id}",
    tag = "Admin",
    summary = "Delete a blog post",
    operation_id = "adminDeletePost",
    params(("post_id" = Uuid, Path, description = "Post id")),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 404, description = "Post not found", body = ApiErrorResponse),
    ),
    security(("bearerAuth" = [])),
)]
pub async fn delete_post(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    ContentService::delete_post(&state, post_id)?;
    Ok(StatusCode::NO_CONTENT)
}
