use chrono::{DateTime, Utc};
use diesel::{AsChangeset, Identifiable, Insertable, Queryable};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Queryable, Identifiable, Serialize, ToSchema)]
#[diesel(table_name = crate::schema::posts)]
pub struct Post {
    pub id: Uuid,
    pub category_id: Option<Uuid>,
    pub slug: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub body: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::posts)]
pub struct NewPost<'a> {
    pub category_id: Option<Uuid>,
    pub slug: &'a str,
    pub title: &'a str,
    pub excerpt: Option<&'a str>,
    pub body: &'a str,
    pub published: bool,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::posts)]
pub struct PostChanges<'a> {
    pub category_id: Option<Uuid>,
    pub title: Option<&'a str>,
    pub excerpt: Option<&'a str>,
    pub body: Option<&'a str>,
    pub published: Option<bool>,
    pub updated_at: DateTime<Utc>,
}
