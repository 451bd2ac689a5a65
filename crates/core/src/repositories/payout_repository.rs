use diesel::prelude::*;
use icetracer_primitives::error::ApiError;
use icetracer_primitives::models::entities::payout_log::{NewPayoutLog, PayoutLog};
use icetracer_primitives::schema::payout_logs;
use uuid::Uuid;

pub struct PayoutRepository;

impl PayoutRepository {
    pub fn create(conn: &mut PgConnection, new_log: NewPayoutLog) -> Result<PayoutLog, ApiError> {
        diesel::insert_into(payout_logs::table)
            .values(&new_log)
            .get_result::<PayoutLog>(conn)
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))
    }

    pub fn list_for_affiliate(
        conn: &mut PgConnection,
        affiliate_id: Uuid,
    ) -> Result<Vec<PayoutLog>, ApiError> {
        payout_logs::table
            .filter(payout_logs::affiliate_id.eq(affiliate_id))
            .order(payout_logs::created_at.desc())
            .load::<PayoutLog>(conn)
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))
    }

    pub fn delete_by_affiliate(
        conn: &mut PgConnection,
        affiliate_id: Uuid,
    ) -> Result<usize, ApiError> {
        diesel::delete(payout_logs::table.filter(payout_logs::affiliate_id.eq(affiliate_id)))
            .execute(conn)
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))
    }
}
