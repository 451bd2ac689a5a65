use crate::models::entities::enum_types::ReferralStatus;
use chrono::{DateTime, Utc};
use diesel::{Associations, Identifiable, Insertable, Queryable};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Queryable, Identifiable, Associations, Serialize)]
#[diesel(table_name = crate::schema::referrals)]
#[diesel(belongs_to(crate::models::entities::affiliate::Affiliate))]
pub struct Referral {
    pub id: Uuid,
    pub affiliate_id: Uuid,
    pub status: ReferralStatus,
    pub landing_page: Option<String>,
    pub referred_email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::referrals)]
pub struct NewReferral<'a> {
    pub affiliate_id: Uuid,
    pub status: ReferralStatus,
    pub landing_page: Option<&'a str>,
    pub referred_email: Option<&'a str>,
}
