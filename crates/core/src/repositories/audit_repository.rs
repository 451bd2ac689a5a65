use diesel::prelude::*;
use icetracer_primitives::error::ApiError;
use icetracer_primitives::models::entities::audit_log::{AuditLog, NewAuditLog};
use icetracer_primitives::schema::audit_logs;

pub struct AuditLogRepository;

impl AuditLogRepository {
    pub fn create(conn: &mut PgConnection, new_log: NewAuditLog) -> Result<(), ApiError> {
        diesel::insert_into(audit_logs::table)
            .values(&new_log)
            .execute(conn)
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;
        Ok(())
    }

    pub fn list_recent(conn: &mut PgConnection, limit: i64) -> Result<Vec<AuditLog>, ApiError> {
        audit_logs::table
            .order(audit_logs::created_at.desc())
            .limit(limit)
            .load::<AuditLog>(conn)
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))
    }
}
