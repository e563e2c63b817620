use crate::api::models::*;
use axum::extract::{Query, State};
use axum::response::Html;
use axum::Json;
use rand::seq::SliceRandom;
use tracing::info;

/// Landing page: a static UI that consumes the JSON API.
pub async fn home_handler() -> Html<&'static str> {
    Html(include_str!("../../../static/index.html"))
}

/// List all items with optional pagination: `?limit=&offset=`.
///
/// Slicing past the end yields fewer items, never an error; `count` is
/// always the full collection size.
pub async fn list_handler(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<ListResponse> {
    let items = state.items.items();
    let total = items.len();

    // Absent or non-positive limit means the whole collection.
    let limit = match params.limit {
        Some(l) if l > 0 => l as usize,
        _ => total,
    };
    let offset = match params.offset {
        Some(o) if o > 0 => o as usize,
        _ => 0,
    };

    let start = offset.min(total);
    let end = offset.saturating_add(limit).min(total);
    let sliced = items[start..end].to_vec();

    info!(limit, offset, returned = sliced.len(), "Listing items");

    Json(ListResponse {
        count: total,
        limit,
        offset,
        items: sliced,
    })
}

/// Return `n` unique random items, default 1: `?n=3`.
pub async fn random_handler(
    State(state): State<AppState>,
    Query(params): Query<RandomParams>,
) -> Json<RandomResponse> {
    let items = state.items.items();
    let total = items.len();

    if total == 0 {
        return Json(RandomResponse { n: 0, items: Vec::new() });
    }

    let n = params.n.unwrap_or(1).clamp(1, total as i64) as usize;

    // Sampling without replacement
    let sampled: Vec<_> = items
        .choose_multiple(&mut rand::thread_rng(), n)
        .cloned()
        .collect();

    info!(n, "Sampled items");

    Json(RandomResponse { n, items: sampled })
}

/// Count items per category.
pub async fn categories_handler(State(state): State<AppState>) -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: state.items.category_counts(),
    })
}
