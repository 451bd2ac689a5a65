use diesel::prelude::*;
use icetracer_primitives::error::{ApiError, AuthError};
use icetracer_primitives::models::entities::user::{NewUser, User};
use icetracer_primitives::models::UserRole;
use icetracer_primitives::schema::users;
use uuid::Uuid;

pub struct UserRepository;

impl UserRepository {
    pub fn find_by_id(conn: &mut PgConnection, user_id: Uuid) -> Result<Option<User>, ApiError> {
        users::table
            .find(user_id)
            .first::<User>(conn)
            .optional()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))
    }

    pub fn find_by_email(
        conn: &mut PgConnection,
        user_email: &str,
    ) -> Result<Option<User>, ApiError> {
        users::table
            .filter(users::email.eq(user_email))
            .first::<User>(conn)
            .optional()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))
    }

    pub fn list_all(conn: &mut PgConnection) -> Result<Vec<User>, ApiError> {
        users::table
            .order(users::created_at.desc())
            .load::<User>(conn)
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))
    }

    pub fn create(conn: &mut PgConnection, new_user: NewUser) -> Result<User, ApiError> {
        diesel::insert_into(users::table)
            .values(&new_user)
            .get_result::<User>(conn)
            .map_err(|e| {
                if matches!(
                    e,
                    diesel::result::Error::DatabaseError(
                        diesel::result::DatabaseErrorKind::UniqueViolation,
                        _
                    )
                ) {
                    ApiError::Auth(AuthError::DuplicateEmail)
                } else {
                    ApiError::DatabaseConnection(e.to_string())
                }
            })
    }

    pub fn update_role(
        conn: &mut PgConnection,
        user_id: Uuid,
        new_role: UserRole,
    ) -> Result<User, ApiError> {
        diesel::update(users::table.find(user_id))
            .set((
                users::role.eq(new_role),
                users::updated_at.eq(diesel::dsl::now),
            ))
            .get_result::<User>(conn)
            .map_err(|e| {
                if matches!(e, diesel::result::Error::NotFound) {
                    ApiError::NotFound("User not found".into())
                } else {
                    ApiError::DatabaseConnection(e.to_string())
                }
            })
    }
}
