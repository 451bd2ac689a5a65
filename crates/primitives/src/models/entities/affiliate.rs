use chrono::{DateTime, Utc};
use diesel::{AsChangeset, Associations, Identifiable, Insertable, Queryable};
use serde::Serialize;
use uuid::Uuid;

/// Aggregate holder of an affiliate's running totals. `unpaid_balance` must
/// always equal the sum of this affiliate's unpaid commission rows; both
/// sides are only ever moved inside the same database transaction.
#[derive(Debug, Clone, Queryable, Identifiable, Associations, Serialize)]
#[diesel(table_name = crate::schema::affiliates)]
#[diesel(belongs_to(crate::models::entities::user::User))]
pub struct Affiliate {
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::affiliates)]
pub struct NewAffiliate<'a> {
    pub user_id: Uuid,
    pub slug: &'a str,
    pub company_name: Option<&'a str>,
    pub website: Option<&'a str>,
}

/// Partial profile update; `None` fields are left untouched.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::affiliates)]
pub struct AffiliateProfileChanges<'a> {
    pub slug: Option<&'a str>,
    pub company_name: Option<&'a str>,
    pub website: Option<&'a str>,
    pub updated_at: DateTime<Utc>,
}
