use chrono::{DateTime, Utc};
use diesel::{AsChangeset, Identifiable, Insertable, Queryable};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Queryable, Identifiable, Serialize, ToSchema)]
#[diesel(table_name = crate::schema::faqs)]
pub struct Faq {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
    pub position: i32,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::faqs)]
pub struct NewFaq<'a> {
    pub question: &'a str,
    pub answer: &'a str,
    pub position: i32,
    pub published: bool,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::faqs)]
pub struct FaqChanges<'a> {
    pub question: Option<&'a str>,
    pub answer: Option<&'a str>,
    pub position: Option<i32>,
    pub published: Option<bool>,
    pub updated_at: DateTime<Utc>,
}
