use axum::extract::{Json, State};
use axum::Extension;
use icetracer_core::services::affiliate_service::{
    AccountStatusResponse, AffiliateService, ApiError, AppState, OnboardingLinkResponse,
};
use icetracer_core::Claims;
use icetracer_primitives::error::ApiErrorResponse;
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/api/affiliate/stripe/onboard",
    tag = "Affiliate",
    summary = "Start or resume Stripe Connect onboarding",
    description = "Creates the Express account on first call and returns a one-time onboarding \
                   link. Links expire quickly, so call again whenever the affiliate needs to \
                   resume onboarding.",
    operation_id = "affiliateStripeOnboard",
    responses(
        (status = 200, description = "Fresh onboarding link", body = OnboardingLinkResponse),
        (status = 403, description = "Affiliate role required", body = ApiErrorResponse),
        (status = 502, description = "Stripe request failed", body = ApiErrorResponse),
    ),
    security(("bearerAuth" = [])),
)]
pub async fn stripe_onboard(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<OnboardingLinkResponse>, ApiError> {
    let user_id = claims.user_id()?;
    let res = AffiliateService::onboard(&state, user_id).await?;
    Ok(Json(res))
}

#[utoipa::path(
    get,
    path = "/api/affiliate/stripe/status",
    tag = "Affiliate",
    summary = "Current Stripe account capabilities",
    operation_id = "affiliateStripeStatus",
    responses(
        (status = 200, description = "Payout and onboarding status, refreshed from Stripe", body = AccountStatusResponse),
        (status = 403, description = "Affiliate role required", body = ApiErrorResponse),
        (status = 502, description = "Stripe request failed", body = ApiErrorResponse),
    ),
    security(("bearerAuth" = [])),
)]
pub async fn stripe_account_status(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<AccountStatusResponse>, ApiError> {
    let user_id = claims.user_id()?;
    let res = AffiliateService::account_status(&state, user_id).await?;
    Ok(Json(res))
}
