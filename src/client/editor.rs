use tracing::{info, warn};

use crate::client::api::{ApiClient, ApiError};
use crate::client::storage::ObjectStorage;
use crate::structs::post::{PostWithAuthor, UpdatePost};

/// View-model for the edit/delete controls on a post page.
///
/// Mirrors the states the UI can be in: read-only view, the edit form, an
/// in-flight save, the delete confirmation overlay, an in-flight delete, and
/// the terminal state after a successful delete (the UI navigates away).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    Viewing,
    Editing,
    Submitting,
    ConfirmingDelete,
    Deleting,
    Deleted,
}

/// The form's working copy of the editable fields.
#[derive(Debug, Clone, Default)]
pub struct Draft {
    pub title: String,
    pub desc: String,
    pub img: Option<String>,
}

pub struct PostEditor {
    api: ApiClient,
    storage: ObjectStorage,
    slug: String,
    post: PostWithAuthor,
    draft: Draft,
    state: EditorState,
}

impl PostEditor {
    pub fn new(api: ApiClient, storage: ObjectStorage, post: PostWithAuthor) -> Self {
        Self {
            api,
            storage,
            slug: post.post.slug.clone(),
            post,
            draft: Draft::default(),
            state: EditorState::Viewing,
        }
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn post(&self) -> &PostWithAuthor {
        &self.post
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    /// Open the edit form, seeding the draft from the current post. Ignored
    /// outside the read-only view.
    pub fn begin_edit(&mut self) {
        if self.state != EditorState::Viewing {
            return;
        }

        self.draft = Draft {
            title: self.post.post.title.clone(),
            desc: self.post.post.desc.clone(),
            img: self.post.post.img.clone(),
        };
        self.state = EditorState::Editing;
    }

    /// Close the edit form, discarding the draft. An image already uploaded
    /// for this draft stays in object storage; nothing deletes it.
    pub fn cancel_edit(&mut self) {
        if self.state != EditorState::Editing {
            return;
        }

        self.draft = Draft::default();
        self.state = EditorState::Viewing;
    }

    /// Open the delete confirmation overlay.
    pub fn request_delete(&mut self) {
        if self.state != EditorState::Viewing {
            return;
        }

        self.state = EditorState::ConfirmingDelete;
    }

    /// Dismiss the delete confirmation overlay.
    pub fn dismiss_delete(&mut self) {
        if self.state != EditorState::ConfirmingDelete {
            return;
        }

        self.state = EditorState::Viewing;
    }

    /// Upload a selected file and point the draft's image at its public URL.
    /// A failed upload is logged and leaves the draft as it was.
    pub async fn attach_image(&mut self, file_name: &str, bytes: Vec<u8>, content_type: &str) {
        if self.state != EditorState::Editing {
            return;
        }

        let name = ObjectStorage::object_name(file_name);
        match self.storage.upload(&name, bytes, content_type).await {
            Ok(url) => {
                info!("Upload successful, public URL: {url}");
                self.draft.img = Some(url);
            }
            Err(e) => {
                warn!("Upload failed: {e}");
            }
        }
    }

    /// Save the draft. On success the editor returns to the read-only view
    /// with the refreshed post; on failure the form stays open with the
    /// draft intact.
    pub async fn submit(&mut self) -> Result<(), ApiError> {
        if self.state != EditorState::Editing {
            return Ok(());
        }

        self.state = EditorState::Submitting;

        let changes = UpdatePost {
            title: Some(self.draft.title.clone()),
            desc: Some(self.draft.desc.clone()),
            img: self.draft.img.clone(),
        };

        match self.api.update_post(&self.slug, &changes).await {
            Ok(updated) => {
                // Re-fetch so the view shows exactly what the server stored.
                if let Ok(Some(refreshed)) = self.api.get_post(&self.slug).await {
                    self.post = refreshed;
                } else {
                    self.post.post = updated;
                }
                self.draft = Draft::default();
                self.state = EditorState::Viewing;
                Ok(())
            }
            Err(e) => {
                warn!("Error updating post: {e}");
                self.state = EditorState::Editing;
                Err(e)
            }
        }
    }

    /// Delete the post. On success the editor is in its terminal state and
    /// the UI navigates away; on failure it falls back to the read-only view.
    pub async fn confirm_delete(&mut self) -> Result<(), ApiError> {
        if self.state != EditorState::ConfirmingDelete {
            return Ok(());
        }

        self.state = EditorState::Deleting;

        match self.api.delete_post(&self.slug).await {
            Ok(()) => {
                self.state = EditorState::Deleted;
                Ok(())
            }
            Err(e) => {
                warn!("Error deleting post: {e}");
                self.state = EditorState::Viewing;
                Err(e)
            }
        }
    }
}
