use std::sync::Arc;

use hyper::header::HeaderValue;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use quillpost::config::Config;
use quillpost::store::PgStore;
use quillpost::{app, AppState};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env().expect("Invalid environment configuration");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await
        .expect("Failed to connect to the database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    let front_origin = config
        .front_url
        .parse::<HeaderValue>()
        .expect("FRONT_URL is not a valid origin");

    let app_state = AppState {
        store: Arc::new(PgStore::new(pool)),
    };

    info!("Listening on {}", config.listen_addr);

    axum::Server::bind(&config.listen_addr)
        .serve(app(app_state, front_origin).into_make_service())
        .await
        .expect("Server error");
}
