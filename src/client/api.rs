use hyper::StatusCode;
use reqwest::header::COOKIE;
use reqwest::{Client, RequestBuilder};

use crate::structs::post::{Post, PostWithAuthor, UpdatePost};

/// Thin client for the posts API, used by the editing view-model.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session_token: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{status}: {message}")]
    Status { status: StatusCode, message: String },
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            http: Client::new(),
            base_url,
            session_token: None,
        }
    }

    pub fn with_session(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }

    fn request(&self, method: reqwest::Method, slug: &str) -> RequestBuilder {
        let mut builder = self
            .http
            .request(method, format!("{}/api/posts/{slug}", self.base_url));

        if let Some(token) = &self.session_token {
            builder = builder.header(COOKIE, format!("session={token}"));
        }

        builder
    }

    pub async fn get_post(&self, slug: &str) -> Result<Option<PostWithAuthor>, ApiError> {
        let response = self.request(reqwest::Method::GET, slug).send().await?;
        let response = Self::checked(response).await?;

        // The read endpoint answers unknown slugs with a 200 and a `null` body.
        Ok(response.json::<Option<PostWithAuthor>>().await?)
    }

    pub async fn update_post(&self, slug: &str, changes: &UpdatePost) -> Result<Post, ApiError> {
        let response = self
            .request(reqwest::Method::PUT, slug)
            .json(changes)
            .send()
            .await?;
        let response = Self::checked(response).await?;

        Ok(response.json::<Post>().await?)
    }

    pub async fn delete_post(&self, slug: &str) -> Result<(), ApiError> {
        let response = self.request(reqwest::Method::DELETE, slug).send().await?;
        Self::checked(response).await?;

        Ok(())
    }

    async fn checked(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| {
                body.get("message")
                    .and_then(|message| message.as_str())
                    .map(str::to_owned)
            })
            .unwrap_or_else(|| status.to_string());

        Err(ApiError::Status { status, message })
    }
}
