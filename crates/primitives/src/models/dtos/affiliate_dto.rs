use crate::models::entities::affiliate::Affiliate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, ToSchema)]
pub struct AffiliateResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub slug: String,
    pub company_name: Option<String>,
    pub website: Option<String>,
    pub total_earned: i64,
    pub unpaid_balance: i64,
    pub stripe_account_id: Option<String>,
    pub payouts_enabled: bool,
    pub details_submitted: bool,
    pub last_payout_at: Option<DateTime<Utc>>,
    pub last_payout_amount: Option<i64>,
}

impl From<&Affiliate> for AffiliateResponse {
    fn from(affiliate: &Affiliate) -> Self {
        Self {
            id: affiliate.id,
            user_id: affiliate.user_id,
            slug: affiliate.slug.clone(),
            company_name: affiliate.company_name.clone(),
            website: affiliate.website.clone(),
            total_earned: affiliate.total_earned,
            unpaid_balance: affiliate.unpaid_balance,
            stripe_account_id: affiliate.stripe_account_id.clone(),
            payouts_enabled: affiliate.payouts_enabled,
            details_submitted: affiliate.details_submitted,
            last_payout_at: affiliate.last_payout_at,
            last_payout_amount: affiliate.last_payout_amount,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 3, max = 64))]
    pub slug: Option<String>,
    #[validate(length(max = 200))]
    pub company_name: Option<String>,
    #[validate(url)]
    pub website: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AffiliateStatsResponse {
    pub total_earned: i64,
    pub unpaid_balance: i64,
    pub referrals_pending: i64,
    pub referrals_converted: i64,
    pub referrals_lost: i64,
    pub last_payout_at: Option<DateTime<Utc>>,
    pub last_payout_amount: Option<i64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OnboardingLinkResponse {
    pub url: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AccountStatusResponse {
    pub stripe_account_id: Option<String>,
    pub payouts_enabled: bool,
    pub details_submitted: bool,
}
