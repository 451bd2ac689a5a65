use crate::models::entities::commission_log::CommissionLog;
use crate::models::entities::enum_types::PayoutStatus;
use crate::models::entities::payout_log::PayoutLog;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PayoutRequest {
    /// Must exactly equal the affiliate's current unpaid commission total,
    /// in integer cents. Partial payouts are not supported.
    #[validate(range(min = 1))]
    pub amount: i64,
    #[validate(length(max = 500))]
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PayoutResponse {
    pub payout_id: Uuid,
    pub stripe_transfer_id: String,
    pub amount: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PayoutLogResponse {
    pub id: Uuid,
    pub stripe_transfer_id: String,
    pub amount: i64,
    pub status: PayoutStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&PayoutLog> for PayoutLogResponse {
    fn from(log: &PayoutLog) -> Self {
        Self {
            id: log.id,
            stripe_transfer_id: log.stripe_transfer_id.clone(),
            amount: log.amount,
            status: log.status,
            notes: log.notes.clone(),
            created_at: log.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CommissionResponse {
    pub id: Uuid,
    pub referral_id: Uuid,
    pub amount: i64,
    pub is_paid: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&CommissionLog> for CommissionResponse {
    fn from(log: &CommissionLog) -> Self {
        Self {
            id: log.id,
            referral_id: log.referral_id,
            amount: log.amount,
            is_paid: log.is_paid,
            created_at: log.created_at,
        }
    }
}
