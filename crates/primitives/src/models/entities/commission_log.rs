use chrono::{DateTime, Utc};
use diesel::{Associations, Identifiable, Insertable, Queryable};
use serde::Serialize;
use uuid::Uuid;

/// One earned commission, in integer cents. Rows are never deleted;
/// `is_paid` flips to true exactly once, during payout processing.
#[derive(Debug, Clone, Queryable, Identifiable, Associations, Serialize)]
#[diesel(table_name = crate::schema::commission_logs)]
#[diesel(belongs_to(crate::models::entities::affiliate::Affiliate))]
pub struct CommissionLog {
    pub id: Uuid,
    pub affiliate_id: Uuid,
    pub referral_id: Uuid,
    pub amount: i64,
    pub is_paid: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::commission_logs)]
pub struct NewCommissionLog {
    pub affiliate_id: Uuid,
    pub referral_id: Uuid,
    pub amount: i64,
}
