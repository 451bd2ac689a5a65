use axum::extract::{Json, Path, State};
use icetracer_core::services::referral_service::{
    ApiError, AppState, ConvertReferralRequest, ReferralResponse, ReferralService,
};
use icetracer_primitives::error::ApiErrorResponse;
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/api/admin/referrals/{referral_id}/convert",
    tag = "Admin",
    summary = "Convert a pending referral into a commission",
    description = "Flips the referral to `converted` and credits the commission amount to the \
                   affiliate's unpaid balance in one transaction. Only `pending` referrals \
                   can be converted.",
    operation_id = "adminConvertReferral",
    params(("referral_id" = Uuid, Path, description = "Referral id")),
    request_body = ConvertReferralRequest,
    responses(
        (status = 200, description = "Referral converted", body = ReferralResponse),
        (status = 400, description = "Referral already settled or amount not positive", body = ApiErrorResponse),
        (status = 404, description = "Referral not found", body = ApiErrorResponse),
    ),
    security(("bearerAuth" = [])),
)]
pub async fn convert_referral(
    State(state): State<Arc<AppState>>,
    Path(referral_id): Path<Uuid>,
    Json(req): Json<ConvertReferralRequest>,
) -> Result<Json<ReferralResponse>, ApiError> {
    let res = ReferralService::convert(&state, referral_id, &req)?;
    Ok(Json(res))
}

#[utoipa::path(
    post,
    path = "/api/admin/referrals/{referral_id}/mark_lost",
    tag = "Admin",
    summary = "Mark a pending referral as lost",
    operation_id = "adminMarkReferralLost",
    params(("referral_id" = Uuid, Path, description = "Referral id")),
    responses(
        (status = 200, description = "Referral marked lost", body = ReferralResponse),
        (status = 400, description = "Referral already settled", body = ApiErrorResponse),
        (status = 404, description = "Referral not found", body = ApiErrorResponse),
    ),
    security(("bearerAuth" = [])),
)]
pub async fn mark_referral_lost(
    State(state): State<Arc<AppState>>,
    Path(referral_id): Path<Uuid>,
) -> Result<Json<ReferralResponse>, ApiError> {
    let res = ReferralService::mark_lost(&state, referral_id)?;
    Ok(Json(res))
}
