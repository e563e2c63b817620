use crate::api::items::handlers::{categories_handler, list_handler, random_handler};
use crate::api::models::AppState;
use axum::{routing::get, Router};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/items", get(list_handler))
        .route("/api/random", get(random_handler))
        .route("/api/categories", get(categories_handler))
}
