use diesel::prelude::*;
use icetracer_primitives::error::ApiError;
use icetracer_primitives::models::entities::category::{Category, NewCategory};
use icetracer_primitives::schema::categories;
use uuid::Uuid;

pub struct CategoryRepository;

impl CategoryRepository {
    pub fn create(conn: &mut PgConnection, new_category: NewCategory) -> Result<Category, ApiError> {
        diesel::insert_into(categories::table)
            .values(&new_category)
            .get_result::<Category>(conn)
            .map_err(|e| {
                if matches!(
                    e,
                    diesel::result::Error::DatabaseError(
                        diesel::result::DatabaseErrorKind::UniqueViolation,
                        _
                    )
                ) {
                    ApiError::Precondition("A category with that slug already exists".into())
                } else {
                    ApiError::DatabaseConnection(e.to_string())
                }
            })
    }

    pub fn list_all(conn: &mut PgConnection) -> Result<Vec<Category>, ApiError> {
        categories::table
            .order(categories::name.asc())
            .load::<Category>(conn)
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))
    }

    pub fn delete(conn: &mut PgConnection, category_id: Uuid) -> Result<usize, ApiError> {
        diesel::delete(categories::table.find(category_id))
            .execute(conn)
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))
    }
}
