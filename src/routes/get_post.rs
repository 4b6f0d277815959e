use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use tracing::warn;

use crate::utils::app_error::AppError;
use crate::AppState;

pub async fn get_post_route(
    State(app_state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let post = app_state.store.post_with_author(&slug).await.map_err(|e| {
        warn!("Error getting post `{slug}` from database : {e}");
        AppError::internal_server_error()
    })?;

    // An unknown slug serialises as a JSON `null` with a 200, which is what
    // this endpoint has always returned. Clients rely on it.
    Ok(Json(post))
}
