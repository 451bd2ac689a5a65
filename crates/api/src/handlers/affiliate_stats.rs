use axum::extract::{Json, State};
use axum::Extension;
use icetracer_core::services::affiliate_service::{
    AffiliateService, AffiliateStatsResponse, ApiError, AppState, CommissionResponse,
    PayoutLogResponse,
};
use icetracer_core::Claims;
use icetracer_primitives::error::ApiErrorResponse;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/affiliate/stats",
    tag = "Affiliate",
    summary = "Earnings and referral counters",
    operation_id = "affiliateStats",
    responses(
        (status = 200, description = "Lifetime earnings, unpaid balance, referral counts", body = AffiliateStatsResponse),
        (status = 403, description = "Affiliate role required", body = ApiErrorResponse),
    ),
    security(("bearerAuth" = [])),
)]
pub async fn affiliate_stats(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<AffiliateStatsResponse>, ApiError> {
    let user_id = claims.user_id()?;
    Ok(Json(AffiliateService::stats(&state, user_id)?))
}

#[utoipa::path(
    get,
    path = "/api/affiliate/commissions",
    tag = "Affiliate",
    summary = "Commission history",
    operation_id = "affiliateCommissions",
    responses(
        (status = 200, description = "All commission entries, paid and unpaid", body = [CommissionResponse]),
        (status = 403, description = "Affiliate role required", body = ApiErrorResponse),
    ),
    security(("bearerAuth" = [])),
)]
pub async fn my_commissions(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<CommissionResponse>>, ApiError> {
    let user_id = claims.user_id()?;
    Ok(Json(AffiliateService::commissions(&state, user_id)?))
}

#[utoipa::path(
    get,
    path = "/api/affiliate/payouts",
    tag = "Affiliate",
    summary = "Payout history",
    operation_id = "affiliatePayouts",
    responses(
        (status = 200, description = "All payouts, newest first", body = [PayoutLogResponse]),
        (status = 403, description = "Affiliate role required", body = ApiErrorResponse),
    ),
    security(("bearerAuth" = [])),
)]
pub async fn my_payouts(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<PayoutLogResponse>>, ApiError> {
    let user_id = claims.user_id()?;
    Ok(Json(AffiliateService::payouts(&state, user_id)?))
}
