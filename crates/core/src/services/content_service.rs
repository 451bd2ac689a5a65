pub use crate::app_state::AppState;
use crate::repositories::category_repository::CategoryRepository;
use crate::repositories::faq_repository::FaqRepository;
use crate::repositories::post_repository::PostRepository;
use chrono::Utc;
pub use icetracer_primitives::{
    error::ApiError,
    models::dtos::content_dto::{
        CreateCategoryRequest, CreateFaqRequest, CreatePostRequest, UpdateFaqRequest,
        UpdatePostRequest,
    },
    models::entities::{
        category::{Category, NewCategory},
        faq::{Faq, FaqChanges, NewFaq},
        post::{NewPost, Post, PostChanges},
    },
};
use uuid::Uuid;

pub struct ContentService;

impl ContentService {
    // ---- categories ----

    pub fn create_category(
        state: &AppState,
        req: &CreateCategoryRequest,
    ) -> Result<Category, ApiError> {
        let mut conn = state
            .db
            .get()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;

        CategoryRepository::create(
            &mut conn,
            NewCategory {
                slug: &req.slug,
                name: &req.name,
            },
        )
    }

    pub fn list_categories(state: &AppState) -> Result<Vec<Category>, ApiError> {
        let mut conn = state
            .db
            .get()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;

        CategoryRepository::list_all(&mut conn)
    }

    pub fn delete_category(state: &AppState, category_id: Uuid) -> Result<(), ApiError> {
        let mut conn = state
            .db
            .get()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;

        let deleted = CategoryRepository::delete(&mut conn, category_id)?;
        if deleted == 0 {
            return Err(ApiError::NotFound("Category not found".into()));
        }
        Ok(())
    }

    // ---- posts ----

    pub fn create_post(state: &AppState, req: &CreatePostRequest) -> Result<Post, ApiError> {
        let mut conn = state
            .db
            .get()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;

        PostRepository::create(
            &mut conn,
            NewPost {
                category_id: req.category_id,
                slug: &req.slug,
                title: &req.title,
                excerpt: req.excerpt.as_deref(),
                body: &req.body,
                published: req.published,
            },
        )
    }

    pub fn update_post(
        state: &AppState,
        post_id: Uuid,
        req: &UpdatePostRequest,
    ) -> Result<Post, ApiError> {
        let mut conn = state
            .db
            .get()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;

        PostRepository::update(
            &mut conn,
            post_id,
            PostChanges {
                category_id: req.category_id,
                title: req.title.as_deref(),
                excerpt: req.excerpt.as_deref(),
                body: req.body.as_deref(),
                published: req.published,
                updated_at: Utc::now(),
            },
        )
    }

    pub fn delete_post(state: &AppState, post_id: Uuid) -> Result<(), ApiError> {
        let mut conn = state
            .db
            .get()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;

        let deleted = PostRepository::delete(&mut conn, post_id)?;
        if deleted == 0 {
            return Err(ApiError::NotFound("Post not found".into()));
        }
        Ok(())
    }

    pub fn list_posts(state: &AppState) -> Result<Vec<Post>, ApiError> {
        let mut conn = state
            .db
            .get()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;

        PostRepository::list_all(&mut conn)
    }

    pub fn list_published_posts(state: &AppState) -> Result<Vec<Post>, ApiError> {
        let mut conn = state
            .db
            .get()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;

        PostRepository::list_published(&mut conn)
    }

    pub fn published_post_by_slug(state: &AppState, slug: &str) -> Result<Post, ApiError> {
        let mut conn = state
            .db
            .get()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;

        PostRepository::find_published_by_slug(&mut conn, slug)?
            .ok_or_else(|| ApiError::NotFound("Post not found".into()))
    }

    // ---- faqs ----

    pub fn create_faq(state: &AppState, req: &CreateFaqRequest) -> Result<Faq, ApiError> {
        let mut conn = state
            .db
            .get()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;

        FaqRepository::create(
            &mut conn,
            NewFaq {
                question: &req.question,
                answer: &req.answer,
                position: req.position,
                published: req.published,
            },
        )
    }

    pub fn update_faq(
        state: &AppState,
        faq_id: Uuid,
        req: &UpdateFaqRequest,
    ) -> Result<Faq, ApiError> {
        let mut conn = state
            .db
            .get()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;

        FaqRepository::update(
            &mut conn,
            faq_id,
            FaqChanges {
                question: req.question.as_deref(),
                answer: req.answer.as_deref(),
                position: req.position,
                published: req.published,
                updated_at: Utc::now(),
            },
        )
    }

    pub fn delete_faq(state: &AppState, faq_id: Uuid) -> Result<(), ApiError> {
        let mut conn = state
            .db
            .get()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;

        let deleted = FaqRepository::delete(&mut conn, faq_id)?;
        if deleted == 0 {
            return Err(ApiError::NotFound("FAQ not found".into()));
        }
        Ok(())
    }

    pub fn list_faqs(state: &AppState) -> Result<Vec<Faq>, ApiError> {
        let mut conn = state
            .db
            .get()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;

        FaqRepository::list_all(&mut conn)
    }

    pub fn list_published_faqs(state: &AppState) -> Result<Vec<Faq>, ApiError> {
        let mut conn = state
            .db
            .get()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;

        FaqRepository::list_published(&mut conn)
    }
}
