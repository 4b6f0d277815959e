use axum::response::{IntoResponse, Response};
use axum::Json;
use hyper::StatusCode;
use serde_json::json;

pub struct AppError {
    status_code: StatusCode,
    message: Option<String>,
}

impl AppError {
    pub fn new(status_code: StatusCode, message: Option<impl Into<String>>) -> Self {
        Self {
            status_code,
            message: message.map(Into::into),
        }
    }

    pub fn internal_server_error() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            Some("Something went wrong!"),
        )
    }

    pub fn not_authenticated() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, Some("Not Authenticated!"))
    }

    pub fn post_not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, Some("Post not found!"))
    }

    pub fn not_post_owner() -> Self {
        Self::new(StatusCode::FORBIDDEN, Some("Not authorized!"))
    }

    pub fn status_code(&self) -> StatusCode {
        self.status_code
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self.message {
            Some(message) => {
                (self.status_code, Json(json!({ "message": message }))).into_response()
            }
            None => self.status_code.into_response(),
        }
    }
}
