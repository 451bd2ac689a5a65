use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use icetracer_core::services::content_service::{
    ApiError, AppState, ContentService, CreateFaqRequest, UpdateFaqRequest,
};
use icetracer_primitives::error::ApiErrorResponse;
use icetracer_primitives::models::entities::faq::Faq;
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;
use validator::Validate;

#[utoipa::path(
    get,
    path = "/api/admin/faqs",
    tag = "Admin",
    summary = "List all FAQs, unpublished included",
    operation_id = "adminListFaqs",
    responses((status = 200, description = "All FAQs in display order", body = [Faq])),
    security(("bearerAuth" = [])),
)]
pub async fn all_faqs(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Faq>>, ApiError> {
    Ok(Json(ContentService::list_faqs(&state)?))
}

#[utoipa::path(
    post,
    path = "/api/admin/faqs",
    tag = "Admin",
    summary = "Create an FAQ entry",
    operation_id = "adminCreateFaq",
    request_body = CreateFaqRequest,
    responses(
        (status = 201, description = "FAQ created", body = Faq),
        (status = 400, description = "Invalid input", body = ApiErrorResponse),
    ),
    security(("bearerAuth" = [])),
)]
pub async fn create_faq(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateFaqRequest>,
) -> Result<(StatusCode, Json<Faq>), ApiError> {
    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let faq = ContentService::create_faq(&state, &req)?;
    Ok((StatusCode::CREATED, Json(faq)))
}

#[utoipa::path(
    put,
    path = "/api/admin/faqs/{faq_id}",
    tag = "Admin",
    summary = "Update an FAQ entry",
    operation_id = "adminUpdateFaq",
    params(("faq_id" = Uuid, Path, description = "FAQ id")),
    request_body = UpdateFaqRequest,
    responses(
        (status = 200, description = "Updated FAQ", body = Faq),
        (status = 404, description = "FAQ not found", body = ApiErrorResponse),
    ),
    security(("bearerAuth" = [])),
)]
pub async fn update_faq(
    State(state): State<Arc<AppState>>,
    Path(faq_id): Path<Uuid>,
    Json(req): Json<UpdateFaqRequest>,
) -> Result<Json<Faq>, ApiError> {
    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    Ok(Json(ContentService::update_faq(&state, faq_id, &req)?))
}

#[utoipa::path(
    delete,
    path = "/api/admin/faqs/{faq_id}",
    tag = "Admin",
    summary = "Delete an FAQ entry",
    operation_id = "adminDeleteFaq",
    params(("faq_id" = Uuid, Path, description = "FAQ id")),
    responses(
        (status = 204, description = "FAQ deleted"),
        (status = 404, description = "FAQ not found", body = ApiErrorResponse),
    ),
    security(("bearerAuth" = [])),
)]
pub async fn delete_faq(
    State(state): State<Arc<AppState>>,
    Path(faq_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    ContentService::delete_faq(&state, faq_id)?;
    Ok(StatusCode::NO_CONTENT)
}
