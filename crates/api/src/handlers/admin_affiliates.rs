use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::Extension;
use icetracer_core::services::affiliate_service::{
    AffiliateResponse, AffiliateService, ApiError, AppState,
};
use icetracer_core::services::payout_service::{PayoutRequest, PayoutResponse, PayoutService};
use icetracer_core::Claims;
use icetracer_primitives::error::ApiErrorResponse;
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;
use validator::Validate;

#[utoipa::path(
    get,
    path = "/api/admin/affiliates",
    tag = "Admin",
    summary = "List all affiliates",
    operation_id = "adminListAffiliates",
    responses(
        (status = 200, description = "All affiliates", body = [AffiliateResponse]),
        (status = 403, description = "Admin role required", body = ApiErrorResponse),
    ),
    security(("bearerAuth" = [])),
)]
pub async fn all_affiliates(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<AffiliateResponse>>, ApiError> {
    Ok(Json(AffiliateService::list_all(&state)?))
}

#[utoipa::path(
    get,
    path = "/api/admin/affiliates/{affiliate_id}",
    tag = "Admin",
    summary = "Fetch one affiliate",
    operation_id = "adminGetAffiliate",
    params(("affiliate_id" = Uuid, Path, description = "Affiliate id")),
    responses(
        (status = 200, description = "The affiliate", body = AffiliateResponse),
        (status = 404, description = "Affiliate not found", body = ApiErrorResponse),
    ),
    security(("bearerAuth" = [])),
)]
pub async fn affiliate_details(
    State(state): State<Arc<AppState>>,
    Path(affiliate_id): Path<Uuid>,
) -> Result<Json<AffiliateResponse>, ApiError> {
    Ok(Json(AffiliateService::find_by_id(&state, affiliate_id)?))
}

#[utoipa::path(
    delete,
    path = "/api/admin/affiliates/{affiliate_id}",
    tag = "Admin",
    summary = "Delete an affiliate and its ledger history",
    operation_id = "adminDeleteAffiliate",
    params(("affiliate_id" = Uuid, Path, description = "Affiliate id")),
    responses(
        (status = 204, description = "Affiliate deleted"),
        (status = 404, description = "Affiliate not found", body = ApiErrorResponse),
    ),
    security(("bearerAuth" = [])),
)]
pub async fn delete_affiliate(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(affiliate_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let admin_id = claims.user_id()?;
    AffiliateService::delete(&state, admin_id, affiliate_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/admin/affiliates/{affiliate_id}/payout",
    tag = "Admin",
    summary = "Pay out an affiliate's full unpaid commission balance",
    description = "The requested amount must exactly equal the affiliate's current unpaid \
                   commission total; partial payouts are rejected before any money moves. \
                   The Stripe transfer happens first and all ledger writes follow in one \
                   database transaction. A 500 response carrying a `transfer_id` means the \
                   transfer went through but was not recorded locally — reconcile manually \
                   before retrying.",
    operation_id = "adminProcessPayout",
    params(("affiliate_id" = Uuid, Path, description = "Affiliate id")),
    request_body = PayoutRequest,
    responses(
        (status = 200, description = "Payout processed and recorded", body = PayoutResponse),
        (status = 400, description = "Amount mismatch, nothing unpaid, or no payable Stripe account", body = ApiErrorResponse),
        (status = 404, description = "Affiliate not found", body = ApiErrorResponse),
        (status = 502, description = "Stripe rejected the transfer; ledger untouched", body = ApiErrorResponse),
        (status = 500, description = "Transfer succeeded but ledger write failed", body = ApiErrorResponse),
    ),
    security(("bearerAuth" = [])),
)]
pub async fn process_payout(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(affiliate_id): Path<Uuid>,
    Json(req): Json<PayoutRequest>,
) -> Result<Json<PayoutResponse>, ApiError> {
    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let admin_id = claims.user_id()?;
    let res = PayoutService::process_payout(&state, admin_id, affiliate_id, req).await?;

    Ok(Json(res))
}
