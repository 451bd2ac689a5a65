use crate::models::entities::enum_types::ReferralStatus;
use crate::models::entities::referral::Referral;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct TrackReferralRequest {
    #[validate(length(max = 500))]
    pub landing_page: Option<String>,
    #[validate(email)]
    pub referred_email: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReferralResponse {
    pub id: Uuid,
    pub affiliate_id: Uuid,
    pub status: ReferralStatus,
    pub landing_page: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Referral> for ReferralResponse {
    fn from(referral: &Referral) -> Self {
        Self {
            id: referral.id,
            affiliate_id: referral.affiliate_id,
            status: referral.status,
            landing_page: referral.landing_page.clone(),
            created_at: referral.created_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ConvertReferralRequest {
    /// Commission earned for this conversion, in integer cents.
    pub amount: i64,
}
