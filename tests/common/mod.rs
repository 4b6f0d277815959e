use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use time::OffsetDateTime;

use quillpost::store::{BlogStore, StoreError};
use quillpost::structs::comment::Comment;
use quillpost::structs::post::{Post, PostWithAuthor, UpdatePost};
use quillpost::structs::user::{PublicUser, SessionUser};

/// In-memory [`BlogStore`] double backing the integration tests.
#[derive(Default)]
pub struct MemStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    users: Vec<PublicUser>,
    sessions: HashMap<String, String>,
    posts: Vec<Post>,
    comments: Vec<Comment>,
}

impl Inner {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

impl MemStore {
    pub fn add_user(&self, email: &str, name: Option<&str>) {
        let mut inner = self.inner.write().unwrap();
        let id = inner.next_id();
        inner.users.push(PublicUser {
            id,
            email: email.to_string(),
            name: name.map(str::to_string),
            image: None,
        });
    }

    pub fn add_session(&self, token: &str, email: &str) {
        let mut inner = self.inner.write().unwrap();
        inner.sessions.insert(token.to_string(), email.to_string());
    }

    pub fn add_post(
        &self,
        slug: &str,
        title: &str,
        desc: &str,
        img: Option<&str>,
        owner_email: &str,
    ) {
        let mut inner = self.inner.write().unwrap();
        let id = inner.next_id();
        inner.posts.push(Post {
            id,
            slug: slug.to_string(),
            title: title.to_string(),
            desc: desc.to_string(),
            img: img.map(str::to_string),
            cat_slug: "general".to_string(),
            user_email: owner_email.to_string(),
            views: 0,
            created_at: OffsetDateTime::UNIX_EPOCH,
        });
    }

    pub fn add_comment(&self, post_slug: &str, desc: &str, author_email: &str) {
        let mut inner = self.inner.write().unwrap();
        let id = inner.next_id();
        inner.comments.push(Comment {
            id,
            desc: desc.to_string(),
            post_slug: post_slug.to_string(),
            user_email: author_email.to_string(),
            created_at: OffsetDateTime::UNIX_EPOCH,
        });
    }

    pub fn post(&self, slug: &str) -> Option<Post> {
        let inner = self.inner.read().unwrap();
        inner.posts.iter().find(|post| post.slug == slug).cloned()
    }

    pub fn comment_count(&self, slug: &str) -> usize {
        let inner = self.inner.read().unwrap();
        inner
            .comments
            .iter()
            .filter(|comment| comment.post_slug == slug)
            .count()
    }
}

/// [`BlogStore`] double whose operations fail, for exercising the 500 paths.
///
/// By default the session lookup and the post read succeed (yielding a post
/// owned by `x@x.com`) so a test can get past the auth and ownership gates
/// and hit the failure of a later statement; the flags pull the failure
/// forward to the session lookup or the read itself.
#[derive(Default)]
pub struct FailingStore {
    pub fail_sessions: bool,
    pub fail_reads: bool,
}

impl FailingStore {
    fn broken() -> StoreError {
        StoreError::Database(sqlx::Error::PoolClosed)
    }

    fn owned_post() -> PostWithAuthor {
        PostWithAuthor {
            post: Post {
                id: 1,
                slug: "a".to_string(),
                title: "Old".to_string(),
                desc: "Old body".to_string(),
                img: None,
                cat_slug: "general".to_string(),
                user_email: "x@x.com".to_string(),
                views: 0,
                created_at: OffsetDateTime::UNIX_EPOCH,
            },
            user: PublicUser {
                id: 1,
                email: "x@x.com".to_string(),
                name: Some("X".to_string()),
                image: None,
            },
        }
    }
}

#[async_trait]
impl BlogStore for FailingStore {
    async fn session_user(&self, _token: &str) -> Result<Option<SessionUser>, StoreError> {
        if self.fail_sessions {
            return Err(Self::broken());
        }
        Ok(Some(SessionUser {
            email: "x@x.com".to_string(),
        }))
    }

    async fn post_with_author(&self, _slug: &str) -> Result<Option<PostWithAuthor>, StoreError> {
        if self.fail_reads {
            return Err(Self::broken());
        }
        Ok(Some(Self::owned_post()))
    }

    async fn update_post(&self, _slug: &str, _changes: &UpdatePost) -> Result<Post, StoreError> {
        Err(Self::broken())
    }

    async fn delete_post_with_comments(&self, _slug: &str) -> Result<(), StoreError> {
        Err(Self::broken())
    }

    async fn comments_for_post(&self, _slug: &str) -> Result<Vec<Comment>, StoreError> {
        Err(Self::broken())
    }
}

#[async_trait]
impl BlogStore for MemStore {
    async fn session_user(&self, token: &str) -> Result<Option<SessionUser>, StoreError> {
        let inner = self.inner.read().unwrap();
        Ok(inner
            .sessions
            .get(token)
            .map(|email| SessionUser {
                email: email.clone(),
            }))
    }

    async fn post_with_author(&self, slug: &str) -> Result<Option<PostWithAuthor>, StoreError> {
        let inner = self.inner.read().unwrap();
        let Some(post) = inner.posts.iter().find(|post| post.slug == slug) else {
            return Ok(None);
        };
        let user = inner
            .users
            .iter()
            .find(|user| user.email == post.user_email)
            .cloned()
            .ok_or(StoreError::Database(sqlx::Error::RowNotFound))?;

        Ok(Some(PostWithAuthor {
            post: post.clone(),
            user,
        }))
    }

    async fn update_post(&self, slug: &str, changes: &UpdatePost) -> Result<Post, StoreError> {
        let mut inner = self.inner.write().unwrap();
        let post = inner
            .posts
            .iter_mut()
            .find(|post| post.slug == slug)
            .ok_or(StoreError::Database(sqlx::Error::RowNotFound))?;

        if let Some(title) = &changes.title {
            post.title = title.clone();
        }
        if let Some(desc) = &changes.desc {
            post.desc = desc.clone();
        }
        if let Some(img) = &changes.img {
            post.img = Some(img.clone());
        }

        Ok(post.clone())
    }

    async fn delete_post_with_comments(&self, slug: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.write().unwrap();
        inner.comments.retain(|comment| comment.post_slug != slug);
        inner.posts.retain(|post| post.slug != slug);

        Ok(())
    }

    async fn comments_for_post(&self, slug: &str) -> Result<Vec<Comment>, StoreError> {
        let inner = self.inner.read().unwrap();
        Ok(inner
            .comments
            .iter()
            .filter(|comment| comment.post_slug == slug)
            .cloned()
            .collect())
    }
}
