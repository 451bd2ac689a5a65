pub use crate::app_state::AppState;
use crate::repositories::user_repository::UserRepository;
pub use crate::security::{Claims, SecurityConfig};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
pub use icetracer_primitives::{
    error::{ApiError, AuthError},
    models::{
        dtos::auth_dto::{AuthResponse, LoginRequest, RegisterRequest, UserResponse},
        entities::user::{NewUser, User},
        UserRole,
    },
};
use icetracer_primitives::schema::blacklisted_tokens;
use tracing::info;
use uuid::Uuid;

pub struct AuthService;

impl AuthService {
    pub fn register(state: &AppState, req: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let mut conn = state
            .db
            .get()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;

        let password_hash = bcrypt::hash(&req.password, bcrypt::DEFAULT_COST)?;

        let user = UserRepository::create(
            &mut conn,
            NewUser {
                email: &req.email,
                password_hash: &password_hash,
                name: req.name.as_deref(),
                role: UserRole::User,
            },
        )?;

        info!(user_id = %user.id, "User registered");

        let token = SecurityConfig::create_token(state, &user)?;
        Ok(AuthResponse {
            token,
            user: UserResponse::from(&user),
        })
    }

    pub fn login(state: &AppState, req: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let mut conn = state
            .db
            .get()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;

        let user = UserRepository::find_by_email(&mut conn, &req.email)?
            .ok_or(ApiError::Auth(AuthError::InvalidCredentials))?;

        if !bcrypt::verify(&req.password, &user.password_hash)? {
            return Err(ApiError::Auth(AuthError::InvalidCredentials));
        }

        let token = SecurityConfig::create_token(state, &user)?;
        Ok(AuthResponse {
            token,
            user: UserResponse::from(&user),
        })
    }

    /// Blacklists the token's jti until its natural expiry.
    pub fn logout(state: &AppState, claims: &Claims) -> Result<(), ApiError> {
        let mut conn = state
            .db
            .get()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;

        let expires_at = DateTime::<Utc>::from_timestamp(claims.exp, 0)
            .unwrap_or_else(Utc::now);

        diesel::insert_into(blacklisted_tokens::table)
            .values((
                blacklisted_tokens::jti.eq(&claims.jti),
                blacklisted_tokens::expires_at.eq(expires_at),
            ))
            .on_conflict(blacklisted_tokens::jti)
            .do_nothing()
            .execute(&mut conn)
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;

        Ok(())
    }

    pub fn current_user(state: &AppState, user_id: Uuid) -> Result<User, ApiError> {
        let mut conn = state
            .db
            .get()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;

        UserRepository::find_by_id(&mut conn, user_id)?
            .ok_or_else(|| ApiError::NotFound("User not found".into()))
    }
}
