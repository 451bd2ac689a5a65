use axum::extract::{Json, State};
use axum::Extension;
use icetracer_core::services::affiliate_service::{
    AffiliateResponse, AffiliateService, ApiError, AppState, UpdateProfileRequest,
};
use icetracer_core::Claims;
use icetracer_primitives::error::ApiErrorResponse;
use std::sync::Arc;
use tracing::error;
use validator::Validate;

#[utoipa::path(
    get,
    path = "/api/affiliate/profile",
    tag = "Affiliate",
    summary = "The authenticated affiliate's profile",
    operation_id = "affiliateProfile",
    responses(
        (status = 200, description = "Affiliate profile", body = AffiliateResponse),
        (status = 403, description = "Affiliate role required", body = ApiErrorResponse),
        (status = 404, description = "No affiliate account for this user", body = ApiErrorResponse),
    ),
    security(("bearerAuth" = [])),
)]
pub async fn my_profile(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<AffiliateResponse>, ApiError> {
    let user_id = claims.user_id()?;
    Ok(Json(AffiliateService::profile(&state, user_id)?))
}

#[utoipa::path(
    put,
    path = "/api/affiliate/profile",
    tag = "Affiliate",
    summary = "Update slug, company name, or website",
    operation_id = "affiliateUpdateProfile",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Updated profile", body = AffiliateResponse),
        (status = 400, description = "Invalid input or slug already taken", body = ApiErrorResponse),
        (status = 404, description = "No affiliate account for this user", body = ApiErrorResponse),
    ),
    security(("bearerAuth" = [])),
)]
pub async fn update_my_profile(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<AffiliateResponse>, ApiError> {
    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let user_id = claims.user_id()?;
    Ok(Json(AffiliateService::update_profile(&state, user_id, &req)?))
}
