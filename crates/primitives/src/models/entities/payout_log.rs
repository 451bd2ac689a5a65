use crate::models::entities::enum_types::PayoutStatus;
use chrono::{DateTime, Utc};
use diesel::{Associations, Identifiable, Insertable, Queryable};
use serde::Serialize;
use uuid::Uuid;

/// Record of one funds transfer to an affiliate. Immutable after insert.
#[derive(Debug, Clone, Queryable, Identifiable, Associations, Serialize)]
#[diesel(table_name = crate::schema::payout_logs)]
#[diesel(belongs_to(crate::models::entities::affiliate::Affiliate))]
pub struct PayoutLog {
    pub id: Uuid,
    pub affiliate_id: Uuid,
    pub stripe_transfer_id: String,
    pub amount: i64,
    pub status: PayoutStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::payout_logs)]
pub struct NewPayoutLog<'a> {
    pub affiliate_id: Uuid,
    pub stripe_transfer_id: &'a str,
    pub amount: i64,
    pub status: PayoutStatus,
    pub notes: Option<&'a str>,
}
