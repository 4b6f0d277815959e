use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PublicUser {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
    pub image: Option<String>,
}

/// Identity resolved from a session token. Ownership checks compare its email
/// against the post's owning user.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SessionUser {
    pub email: String,
}
