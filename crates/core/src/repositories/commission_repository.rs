use diesel::prelude::*;
use icetracer_primitives::error::ApiError;
use icetracer_primitives::models::entities::commission_log::{CommissionLog, NewCommissionLog};
use icetracer_primitives::schema::commission_logs;
use uuid::Uuid;

pub struct CommissionRepository;

impl CommissionRepository {
    pub fn create(
        conn: &mut PgConnection,
        new_log: NewCommissionLog,
    ) -> Result<CommissionLog, ApiError> {
        diesel::insert_into(commission_logs::table)
            .values(&new_log)
            .get_result::<CommissionLog>(conn)
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))
    }

    /// Unpaid rows for one affiliate; the payout amount check sums these.
    pub fn unpaid_for_affiliate(
        conn: &mut PgConnection,
        affiliate_id: Uuid,
    ) -> Result<Vec<CommissionLog>, ApiError> {
        commission_logs::table
            .filter(commission_logs::affiliate_id.eq(affiliate_id))
            .filter(commission_logs::is_paid.eq(false))
            .order(commission_logs::created_at.asc())
            .load::<CommissionLog>(conn)
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))
    }

    pub fn unpaid_total(conn: &mut PgConnection, affiliate_id: Uuid) -> Result<i64, ApiError> {
        Ok(Self::unpaid_for_affiliate(conn, affiliate_id)?
            .iter()
            .map(|log| log.amount)
            .sum())
    }

    /// Flips every unpaid row for the affiliate to paid; returns how many
    /// rows changed. Call inside the payout transaction.
    pub fn mark_unpaid_as_paid(
        conn: &mut PgConnection,
        affiliate_id: Uuid,
    ) -> Result<usize, ApiError> {
        diesel::update(
            commission_logs::table
                .filter(commission_logs::affiliate_id.eq(affiliate_id))
                .filter(commission_logs::is_paid.eq(false)),
        )
        .set((
            commission_logs::is_paid.eq(true),
            commission_logs::updated_at.eq(diesel::dsl::now),
        ))
        .execute(conn)
        .map_err(|e| ApiError::DatabaseConnection(e.to_string()))
    }

    pub fn list_for_affiliate(
        conn: &mut PgConnection,
        affiliate_id: Uuid,
    ) -> Result<Vec<CommissionLog>, ApiError> {
        commission_logs::table
            .filter(commission_logs::affiliate_id.eq(affiliate_id))
            .order(commission_logs::created_at.desc())
            .load::<CommissionLog>(conn)
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))
    }

    pub fn delete_by_affiliate(
        conn: &mut PgConnection,
        affiliate_id: Uuid,
    ) -> Result<usize, ApiError> {
        diesel::delete(
            commission_logs::table.filter(commission_logs::affiliate_id.eq(affiliate_id)),
        )
        .execute(conn)
        .map_err(|e| ApiError::DatabaseConnection(e.to_string()))
    }
}
