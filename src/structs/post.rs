use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::structs::user::PublicUser;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub desc: String,
    pub img: Option<String>,
    pub cat_slug: String,
    pub user_email: String,
    pub views: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostWithAuthor {
    #[serde(flatten)]
    pub post: Post,
    pub user: PublicUser,
}

/// Body of `PUT /api/posts/{slug}`. An omitted field leaves the stored value
/// untouched; a present field overwrites it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePost {
    pub title: Option<String>,
    pub desc: Option<String>,
    pub img: Option<String>,
}
