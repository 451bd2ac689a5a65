use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 64))]
    pub slug: String,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePostRequest {
    pub category_id: Option<Uuid>,
    #[validate(length(min = 1, max = 128))]
    pub slug: String,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(max = 500))]
    pub excerpt: Option<String>,
    #[validate(length(min = 1))]
    pub body: String,
    #[serde(default)]
    pub published: bool,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePostRequest {
    pub category_id: Option<Uuid>,
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(max = 500))]
    pub excerpt: Option<String>,
    pub body: Option<String>,
    pub published: Option<bool>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateFaqRequest {
    #[validate(length(min = 1, max = 500))]
    pub question: String,
    #[validate(length(min = 1))]
    pub answer: String,
    #[serde(default)]
    pub position: i32,
    #[serde(default = "default_published")]
    pub published: bool,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateFaqRequest {
    #[validate(length(min = 1, max = 500))]
    pub question: Option<String>,
    pub answer: Option<String>,
    pub position: Option<i32>,
    pub published: Option<bool>,
}

fn default_published() -> bool {
    true
}
