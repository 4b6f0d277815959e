pub mod client;
pub mod config;
pub mod extractors;
pub mod middleware;
pub mod routes;
pub mod store;
pub mod structs;
pub mod utils;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::get,
    Router,
};
use hyper::header::HeaderValue;
use hyper::http::Method;
use tower_http::cors::CorsLayer;

use crate::middleware::logger::logger;
use crate::routes::delete_post::delete_post_route;
use crate::routes::get_post::get_post_route;
use crate::routes::update_post::update_post_route;
use crate::store::BlogStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BlogStore>,
}

pub fn app(app_state: AppState, front_origin: HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::PUT, Method::DELETE])
        .allow_origin(front_origin);

    Router::new()
        .route(
            "/api/posts/:slug",
            get(get_post_route)
                .put(update_post_route)
                .delete(delete_post_route),
        )
        .layer(cors)
        .layer(axum_middleware::from_fn(logger))
        .with_state(Arc::new(app_state))
}
