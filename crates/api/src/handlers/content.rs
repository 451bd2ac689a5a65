//! Public read-only content endpoints: published posts, categories, FAQs.

use axum::extract::{Path, State};
use axum::Json;
use icetracer_core::services::content_service::{ApiError, AppState, ContentService};
use icetracer_primitives::error::ApiErrorResponse;
use icetracer_primitives::models::entities::{category::Category, faq::Faq, post::Post};
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/posts",
    tag = "Content",
    summary = "List published blog posts",
    operation_id = "listPublishedPosts",
    responses((status = 200, description = "Published posts, newest first", body = [Post])),
    security(()),
)]
pub async fn published_posts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Post>>, ApiError> {
    Ok(Json(ContentService::list_published_posts(&state)?))
}

#[utoipa::path(
    get,
    path = "/api/posts/{slug}",
    tag = "Content",
    summary = "Fetch one published post by slug",
    operation_id = "getPostBySlug",
    params(("slug" = String, Path, description = "Post slug")),
    responses(
        (status = 200, description = "The post", body = Post),
        (status = 404, description = "No published post with that slug", body = ApiErrorResponse),
    ),
    security(()),
)]
pub async fn post_by_slug(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<Post>, ApiError> {
    Ok(Json(ContentService::published_post_by_slug(&state, &slug)?))
}

#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "Content",
    summary = "List blog categories",
    operation_id = "listCategories",
    responses((status = 200, description = "All categories, alphabetical", body = [Category])),
    security(()),
)]
pub async fn all_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Category>>, ApiError> {
    Ok(Json(ContentService::list_categories(&state)?))
}

#[utoipa::path(
    get,
    path = "/api/faqs",
    tag = "Content",
    summary = "List published FAQs",
    operation_id = "listPublishedFaqs",
    responses((status = 200, description = "Published FAQs in display order", body = [Faq])),
    security(()),
)]
pub async fn published_faqs(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Faq>>, ApiError> {
    Ok(Json(ContentService::list_published_faqs(&state)?))
}
