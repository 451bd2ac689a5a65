use diesel::prelude::*;
use icetracer_primitives::error::ApiError;
use icetracer_primitives::models::entities::referral::{NewReferral, Referral};
use icetracer_primitives::models::ReferralStatus;
use icetracer_primitives::schema::referrals;
use uuid::Uuid;

pub struct ReferralRepository;

impl ReferralRepository {
    pub fn create(conn: &mut PgConnection, new_referral: NewReferral) -> Result<Referral, ApiError> {
        diesel::insert_into(referrals::table)
            .values(&new_referral)
            .get_result::<Referral>(conn)
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))
    }

    pub fn find_by_id_with_lock(
        conn: &mut PgConnection,
        referral_id: Uuid,
    ) -> Result<Referral, ApiError> {
        referrals::table
            .find(referral_id)
            .for_update()
            .first::<Referral>(conn)
            .map_err(|e| {
                if matches!(e, diesel::result::Error::NotFound) {
                    ApiError::NotFound("Referral not found".into())
                } else {
                    ApiError::DatabaseConnection(e.to_string())
                }
            })
    }

    pub fn set_status(
        conn: &mut PgConnection,
        referral_id: Uuid,
        status: ReferralStatus,
    ) -> Result<Referral, ApiError> {
        diesel::update(referrals::table.find(referral_id))
            .set((
                referrals::status.eq(status),
                referrals::updated_at.eq(diesel::dsl::now),
            ))
            .get_result::<Referral>(conn)
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))
    }

    pub fn count_by_status(
        conn: &mut PgConnection,
        affiliate_id: Uuid,
        status: ReferralStatus,
    ) -> Result<i64, ApiError> {
        referrals::table
            .filter(referrals::affiliate_id.eq(affiliate_id))
            .filter(referrals::status.eq(status))
            .count()
            .get_result::<i64>(conn)
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))
    }

    pub fn delete_by_affiliate(
        conn: &mut PgConnection,
        affiliate_id: Uuid,
    ) -> Result<usize, ApiError> {
        diesel::delete(referrals::table.filter(referrals::affiliate_id.eq(affiliate_id)))
            .execute(conn)
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))
    }
}
