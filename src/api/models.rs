use crate::store::{Item, ItemStore, TipStore};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Application state for the items server
#[derive(Clone)]
pub struct AppState {
    pub items: Arc<ItemStore>,
}

/// Application state for the tips server
#[derive(Clone)]
pub struct TipState {
    pub tips: Arc<TipStore>,
}

/// Query parameters for the list endpoint
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub limit: Option<i64>,

    #[serde(default, deserialize_with = "lenient_i64")]
    pub offset: Option<i64>,
}

/// Query parameters for the random endpoint
#[derive(Debug, Default, Deserialize)]
pub struct RandomParams {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub n: Option<i64>,
}

/// Query parameters for the search endpoint
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
}

// Lenient coercion: a query parameter that fails to parse as an integer is
// treated as absent, so the endpoint falls back to its default instead of
// returning a 400.
fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.trim().parse().ok()))
}

/// Response from the list endpoint
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub count: usize,
    pub limit: usize,
    pub offset: usize,
    pub items: Vec<Item>,
}

/// Response from the random endpoint
#[derive(Debug, Serialize)]
pub struct RandomResponse {
    pub n: usize,
    pub items: Vec<Item>,
}

/// Response from the categories endpoint
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: BTreeMap<String, usize>,
}

/// Response from the search endpoint. `count` is omitted for an empty query.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub items: Vec<Item>,
    pub query: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
