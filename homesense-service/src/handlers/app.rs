use crate::startup::AppState;
use askama::Template;
use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub addresses: Vec<String>,
}

/// Landing page with the catalogued addresses.
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    IndexTemplate {
        addresses: state.catalog.list_addresses(),
    }
}

/// Liveness probe. Never calls the completion provider.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "homesense-service",
        "version": env!("CARGO_PKG_VERSION"),
        "completion_provider": state.text_provider.name(),
        "completion_configured": state.text_provider.is_configured(),
    }))
}
