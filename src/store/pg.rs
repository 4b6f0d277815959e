use async_trait::async_trait;
use sqlx::PgPool;
use time::OffsetDateTime;

use super::{BlogStore, StoreError};
use crate::structs::comment::Comment;
use crate::structs::post::{Post, PostWithAuthor, UpdatePost};
use crate::structs::user::{PublicUser, SessionUser};

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PostAuthorRow {
    id: i64,
    slug: String,
    title: String,
    desc: String,
    img: Option<String>,
    cat_slug: String,
    user_email: String,
    views: i32,
    created_at: OffsetDateTime,
    author_id: i64,
    author_name: Option<String>,
    author_image: Option<String>,
}

impl From<PostAuthorRow> for PostWithAuthor {
    fn from(row: PostAuthorRow) -> Self {
        PostWithAuthor {
            user: PublicUser {
                id: row.author_id,
                email: row.user_email.clone(),
                name: row.author_name,
                image: row.author_image,
            },
            post: Post {
                id: row.id,
                slug: row.slug,
                title: row.title,
                desc: row.desc,
                img: row.img,
                cat_slug: row.cat_slug,
                user_email: row.user_email,
                views: row.views,
                created_at: row.created_at,
            },
        }
    }
}

#[async_trait]
impl BlogStore for PgStore {
    async fn session_user(&self, token: &str) -> Result<Option<SessionUser>, StoreError> {
        let user = sqlx::query_as::<_, SessionUser>(
            r#"
            SELECT u.email
            FROM sessions s
            JOIN users u ON u.email = s.user_email
            WHERE s.token = $1 AND s.expires_at > now()
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn post_with_author(&self, slug: &str) -> Result<Option<PostWithAuthor>, StoreError> {
        let row = sqlx::query_as::<_, PostAuthorRow>(
            r#"
            SELECT p.id, p.slug, p.title, p."desc", p.img, p.cat_slug, p.user_email,
                   p.views, p.created_at,
                   u.id AS author_id, u.name AS author_name, u.image AS author_image
            FROM posts p
            JOIN users u ON u.email = p.user_email
            WHERE p.slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostWithAuthor::from))
    }

    async fn update_post(&self, slug: &str, changes: &UpdatePost) -> Result<Post, StoreError> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            UPDATE posts
            SET title = COALESCE($2, title),
                "desc" = COALESCE($3, "desc"),
                img = COALESCE($4, img)
            WHERE slug = $1
            RETURNING id, slug, title, "desc", img, cat_slug, user_email, views, created_at
            "#,
        )
        .bind(slug)
        .bind(changes.title.as_deref())
        .bind(changes.desc.as_deref())
        .bind(changes.img.as_deref())
        .fetch_one(&self.pool)
        .await?;

        Ok(post)
    }

    async fn delete_post_with_comments(&self, slug: &str) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM comments WHERE post_slug = $1")
            .bind(slug)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM posts WHERE slug = $1")
            .bind(slug)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }

    async fn comments_for_post(&self, slug: &str) -> Result<Vec<Comment>, StoreError> {
        let comments = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, "desc", post_slug, user_email, created_at
            FROM comments
            WHERE post_slug = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(slug)
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }
}
