use diesel::prelude::*;
use icetracer_primitives::error::ApiError;
use icetracer_primitives::models::entities::post::{NewPost, Post, PostChanges};
use icetracer_primitives::schema::posts;
use uuid::Uuid;

pub struct PostRepository;

impl PostRepository {
    pub fn create(conn: &mut PgConnection, new_post: NewPost) -> Result<Post, ApiError> {
        diesel::insert_into(posts::table)
            .values(&new_post)
            .get_result::<Post>(conn)
            .map_err(|e| Self::map_unique(e))
    }

    pub fn update(
        conn: &mut PgConnection,
        post_id: Uuid,
        changes: PostChanges,
    ) -> Result<Post, ApiError> {
        diesel::update(posts::table.find(post_id))
            .set(&changes)
            .get_result::<Post>(conn)
            .map_err(|e| {
                if matches!(e, diesel::result::Error::NotFound) {
                    ApiError::NotFound("Post not found".into())
                } else {
                    Self::map_unique(e)
                }
            })
    }

    pub fn delete(conn: &mut PgConnection, post_id: Uuid) -> Result<usize, ApiError> {
        diesel::delete(posts::table.find(post_id))
            .execute(conn)
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))
    }

    pub fn list_all(conn: &mut PgConnection) -> Result<Vec<Post>, ApiError> {
        posts::table
            .order(posts::created_at.desc())
            .load::<Post>(conn)
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))
    }

    pub fn list_published(conn: &mut PgConnection) -> Result<Vec<Post>, ApiError> {
        posts::table
            .filter(posts::published.eq(true))
            .order(posts::created_at.desc())
            .load::<Post>(conn)
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))
    }

    pub fn find_published_by_slug(
        conn: &mut PgConnection,
        slug: &str,
    ) -> Result<Option<Post>, ApiError> {
        posts::table
            .filter(posts::slug.eq(slug))
            .filter(posts::published.eq(true))
            .first::<Post>(conn)
            .optional()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))
    }

    fn map_unique(e: diesel::result::Error) -> ApiError {
        if matches!(
            e,
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                _
            )
        ) {
            ApiError::Precondition("A post with that slug already exists".into())
        } else {
            ApiError::DatabaseConnection(e.to_string())
        }
    }
}
