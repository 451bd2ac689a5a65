pub use crate::app_state::AppState;
use crate::repositories::affiliate_repository::AffiliateRepository;
use crate::repositories::user_repository::UserRepository;
use crate::services::audit_service::AuditService;
pub use icetracer_primitives::{
    error::ApiError,
    models::{
        dtos::auth_dto::UserResponse,
        entities::{affiliate::NewAffiliate, user::User},
        UserRole,
    },
};
use diesel::PgConnection;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

pub struct UserService;

impl UserService {
    pub fn list_users(state: &AppState) -> Result<Vec<User>, ApiError> {
        let mut conn = state
            .db
            .get()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;

        UserRepository::list_all(&mut conn)
    }

    /// Changes a user's role. Upgrading to affiliate provisions the
    /// affiliate row; downgrading leaves ledger history in place.
    pub async fn change_role(
        state: &AppState,
        admin_id: Uuid,
        user_id: Uuid,
        new_role: UserRole,
    ) -> Result<User, ApiError> {
        let mut conn = state
            .db
            .get()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;

        let user = UserRepository::update_role(&mut conn, user_id, new_role)?;

        if new_role == UserRole::Affiliate
            && AffiliateRepository::find_by_user(&mut conn, user_id)?.is_none()
        {
            let slug = Self::unique_slug(&mut conn, &user.email)?;
            AffiliateRepository::create(
                &mut conn,
                NewAffiliate {
                    user_id,
                    slug: &slug,
                    company_name: None,
                    website: None,
                },
            )?;
            info!(user_id = %user_id, slug = %slug, "Affiliate account provisioned");
        }

        let _ = AuditService::log_event(
            state,
            Some(admin_id),
            "user.role_changed",
            Some("user"),
            Some(&user_id.to_string()),
            json!({ "role": new_role }),
            None,
        )
        .await;

        Ok(user)
    }

    /// Derives a tracking slug from the email local part, suffixing on
    /// collision.
    fn unique_slug(conn: &mut PgConnection, email: &str) -> Result<String, ApiError> {
        let base: String = email
            .split('@')
            .next()
            .unwrap_or("partner")
            .chars()
            .filter_map(|c| {
                if c.is_ascii_alphanumeric() {
                    Some(c.to_ascii_lowercase())
                } else if c == '.' || c == '-' || c == '_' {
                    Some('-')
                } else {
                    None
                }
            })
            .collect();

        let base = if base.len() >= 3 {
            base
        } else {
            format!("partner-{}", &Uuid::new_v4().simple().to_string()[..6])
        };

        if !AffiliateRepository::slug_exists(conn, &base)? {
            return Ok(base);
        }

        Ok(format!(
            "{}-{}",
            base,
            &Uuid::new_v4().simple().to_string()[..6]
        ))
    }
}
