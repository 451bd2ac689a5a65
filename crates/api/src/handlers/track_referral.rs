use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use icetracer_core::services::referral_service::{
    ApiError, AppState, ReferralResponse, ReferralService, TrackReferralRequest,
};
use icetracer_primitives::error::ApiErrorResponse;
use std::sync::Arc;
use tracing::error;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/r/{slug}",
    tag = "Referrals",
    summary = "Record a referral visit for a tracking link",
    description = "Public endpoint hit by the signup flow when a visitor arrives through an \
                   affiliate's tracking link. Creates a `pending` referral attributed to the \
                   affiliate owning the slug; conversion happens later via the admin API.",
    operation_id = "trackReferral",
    params(("slug" = String, Path, description = "Affiliate tracking slug")),
    request_body = TrackReferralRequest,
    responses(
        (status = 201, description = "Referral recorded", body = ReferralResponse),
        (status = 400, description = "Invalid input", body = ApiErrorResponse),
        (status = 404, description = "Unknown tracking slug", body = ApiErrorResponse),
    ),
    security(()),
)]
pub async fn track_referral(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    Json(req): Json<TrackReferralRequest>,
) -> Result<(StatusCode, Json<ReferralResponse>), ApiError> {
    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let res = ReferralService::track(&state, &slug, &req)?;

    Ok((StatusCode::CREATED, Json(res)))
}
