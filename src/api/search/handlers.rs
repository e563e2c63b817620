use crate::api::models::*;
use crate::store::Item;
use axum::extract::{Query, State};
use axum::Json;
use tracing::info;

/// Case-insensitive search in title/text/tags: `?q=focus`.
///
/// Matches are returned in source order. An empty query (after trimming)
/// short-circuits to an empty result with no `count` field.
pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    let query = params.q.unwrap_or_default().trim().to_lowercase();

    if query.is_empty() {
        return Json(SearchResponse {
            items: Vec::new(),
            query,
            count: None,
        });
    }

    let results: Vec<Item> = state
        .items
        .items()
        .iter()
        .filter(|it| it.matches(&query))
        .cloned()
        .collect();

    info!(query = %query, found = results.len(), "Search complete");

    let count = results.len();
    Json(SearchResponse {
        items: results,
        query,
        count: Some(count),
    })
}
