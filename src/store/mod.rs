pub mod pg;

pub use pg::PgStore;

use async_trait::async_trait;

use crate::structs::comment::Comment;
use crate::structs::post::{Post, PostWithAuthor, UpdatePost};
use crate::structs::user::SessionUser;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Storage handle the handlers operate against. The production implementation
/// is [`PgStore`]; tests substitute an in-memory double.
#[async_trait]
pub trait BlogStore: Send + Sync {
    /// Resolve a session token to the user it belongs to, if the session
    /// exists and has not expired.
    async fn session_user(&self, token: &str) -> Result<Option<SessionUser>, StoreError>;

    async fn post_with_author(&self, slug: &str) -> Result<Option<PostWithAuthor>, StoreError>;

    /// Overwrite the fields present in `changes`; absent fields keep their
    /// stored values.
    async fn update_post(&self, slug: &str, changes: &UpdatePost) -> Result<Post, StoreError>;

    /// Remove a post and every comment referencing it, atomically. Comments
    /// go first: the schema declares no cascading delete.
    async fn delete_post_with_comments(&self, slug: &str) -> Result<(), StoreError>;

    async fn comments_for_post(&self, slug: &str) -> Result<Vec<Comment>, StoreError>;
}
