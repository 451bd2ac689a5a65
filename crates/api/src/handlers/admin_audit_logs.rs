use axum::extract::{Query, State};
use axum::Json;
use icetracer_core::app_state::AppState;
use icetracer_core::repositories::audit_repository::AuditLogRepository;
use icetracer_primitives::error::{ApiError, ApiErrorResponse};
use icetracer_primitives::models::entities::audit_log::AuditLog;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;

#[derive(Deserialize, IntoParams)]
pub struct AuditLogQuery {
    pub limit: Option<i64>,
}

#[utoipa::path(
    get,
    path = "/api/admin/audit_logs",
    tag = "Admin",
    summary = "Recent admin activity",
    operation_id = "adminListAuditLogs",
    params(AuditLogQuery),
    responses(
        (status = 200, description = "Most recent audit events", body = [AuditLog]),
        (status = 403, description = "Admin role required", body = ApiErrorResponse),
    ),
    security(("bearerAuth" = [])),
)]
pub async fn audit_logs(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AuditLogQuery>,
) -> Result<Json<Vec<AuditLog>>, ApiError> {
    let limit = query.limit.unwrap_or(50).clamp(1, 500);

    let mut conn = state
        .db
        .get()
        .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;

    let logs = AuditLogRepository::list_recent(&mut conn, limit)?;
    Ok(Json(logs))
}
