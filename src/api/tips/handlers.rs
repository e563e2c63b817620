use crate::api::models::TipState;
use axum::extract::State;
use axum::response::Html;
use axum::Json;
use serde_json::Value;
use tracing::info;

const HOME_TEMPLATE: &str = include_str!("../../../static/tip.html");

/// Landing page with one random tip rendered server-side.
pub async fn home_handler(State(state): State<TipState>) -> Html<String> {
    let tip = state.tips.random().cloned().unwrap_or(Value::Null);
    Html(HOME_TEMPLATE.replace("{{tip}}", &render_tip(&tip)))
}

/// One random tip as raw JSON.
pub async fn tip_handler(State(state): State<TipState>) -> Json<Value> {
    let tip = state.tips.random().cloned().unwrap_or(Value::Null);
    info!("Served random tip");
    Json(tip)
}

// Tips are schemaless; show the `text` field when there is one, otherwise
// the whole value as pretty JSON.
fn render_tip(tip: &Value) -> String {
    match tip.get("text").and_then(Value::as_str) {
        Some(text) => escape_html(text),
        None => escape_html(&serde_json::to_string_pretty(tip).unwrap_or_default()),
    }
}

fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
