use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::{async_trait, http::request::Parts};
use axum_extra::extract::CookieJar;
use tracing::warn;

use crate::structs::user::SessionUser;
use crate::utils::app_error::AppError;
use crate::AppState;

/// Caller identity, resolved from the `session` cookie through the store.
/// `None` means the request carries no valid session; each handler decides
/// whether that is an error.
pub struct AuthUser(pub Option<SessionUser>);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    Arc<AppState>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = Arc::<AppState>::from_ref(state);

        // CookieJar extraction is infallible
        let cookies = CookieJar::from_request_parts(parts, state).await.unwrap();

        let token = match cookies.get("session") {
            Some(cookie) => cookie.value().to_owned(),
            None => return Ok(AuthUser(None)),
        };

        match app_state.store.session_user(&token).await {
            Ok(user) => Ok(AuthUser(user)),
            Err(e) => {
                warn!("Error resolving session token : {e}");
                Err(AppError::internal_server_error())
            }
        }
    }
}
