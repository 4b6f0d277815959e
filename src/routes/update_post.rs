use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use tracing::warn;

use crate::extractors::auth_extractor::AuthUser;
use crate::structs::post::UpdatePost;
use crate::utils::app_error::AppError;
use crate::AppState;

pub async fn update_post_route(
    State(app_state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    AuthUser(auth_user): AuthUser,
    Json(changes): Json<UpdatePost>,
) -> Result<impl IntoResponse, AppError> {
    let Some(session_user) = auth_user else {
        warn!("Unauthenticated attempt to update post `{slug}`");
        return Err(AppError::not_authenticated());
    };

    let existing = app_state.store.post_with_author(&slug).await.map_err(|e| {
        warn!("Error getting post `{slug}` from database : {e}");
        AppError::internal_server_error()
    })?;

    let Some(existing) = existing else {
        return Err(AppError::post_not_found());
    };

    if existing.user.email != session_user.email {
        warn!(
            "User {} tried to update post `{slug}` owned by {}",
            session_user.email, existing.user.email
        );
        return Err(AppError::not_post_owner());
    }

    let updated = app_state
        .store
        .update_post(&slug, &changes)
        .await
        .map_err(|e| {
            warn!("Error updating post `{slug}` : {e}");
            AppError::internal_server_error()
        })?;

    Ok(Json(updated))
}
