use crate::api::models::TipState;
use crate::api::tips::handlers::tip_handler;
use axum::{routing::get, Router};

pub fn routes() -> Router<TipState> {
    Router::new().route("/api/tip", get(tip_handler))
}
