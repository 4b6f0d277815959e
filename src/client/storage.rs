use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use time::OffsetDateTime;

/// Client for a Supabase-style object storage service. Uploads land in a
/// single bucket and are addressed by their public URL afterwards.
#[derive(Debug, Clone)]
pub struct ObjectStorage {
    http: Client,
    base_url: String,
    bucket: String,
    api_key: String,
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Error uploading file: {0}")]
    Rejected(String),
    #[error("Error uploading file: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ObjectStorage {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        bucket: impl Into<String>,
    ) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            http: Client::new(),
            base_url,
            bucket: bucket.into(),
            api_key: api_key.into(),
        }
    }

    /// Object name for an upload: the current unix timestamp in milliseconds
    /// prepended to the original file name, so repeated uploads of the same
    /// file never collide.
    pub fn object_name(file_name: &str) -> String {
        let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
        format!("{millis}{file_name}")
    }

    pub fn public_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{path}",
            self.base_url, self.bucket
        )
    }

    /// Upload a file and return its public URL. No retry: a failed upload
    /// surfaces immediately with the service's message.
    pub async fn upload(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError> {
        let endpoint = format!("{}/storage/v1/object/{}/{path}", self.base_url, self.bucket);

        let response = self
            .http
            .post(&endpoint)
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await?;

        if !response.status().is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StorageError::Rejected(message));
        }

        Ok(self.public_url(path))
    }
}
