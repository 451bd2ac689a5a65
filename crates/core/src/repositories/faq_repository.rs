use diesel::prelude::*;
use icetracer_primitives::error::ApiError;
use icetracer_primitives::models::entities::faq::{Faq, FaqChanges, NewFaq};
use icetracer_primitives::schema::faqs;
use uuid::Uuid;

pub struct FaqRepository;

impl FaqRepository {
    pub fn create(conn: &mut PgConnection, new_faq: NewFaq) -> Result<Faq, ApiError> {
        diesel::insert_into(faqs::table)
            .values(&new_faq)
            .get_result::<Faq>(conn)
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))
    }

    pub fn update(conn: &mut PgConnection, faq_id: Uuid, changes: FaqChanges) -> Result<Faq, ApiError> {
        diesel::update(faqs::table.find(faq_id))
            .set(&changes)
            .get_result::<Faq>(conn)
            .map_err(|e| {
                if matches!(e, diesel::result::Error::NotFound) {
                    ApiError::NotFound("FAQ not found".into())
                } else {
                    ApiError::DatabaseConnection(e.to_string())
                }
            })
    }

    pub fn delete(conn: &mut PgConnection, faq_id: Uuid) -> Result<usize, ApiError> {
        diesel::delete(faqs::table.find(faq_id))
            .execute(conn)
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))
    }

    pub fn list_all(conn: &mut PgConnection) -> Result<Vec<Faq>, ApiError> {
        faqs::table
            .order(faqs::position.asc())
            .load::<Faq>(conn)
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))
    }

    pub fn list_published(conn: &mut PgConnection) -> Result<Vec<Faq>, ApiError> {
        faqs::table
            .filter(faqs::published.eq(true))
            .order(faqs::position.asc())
            .load::<Faq>(conn)
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))
    }
}
