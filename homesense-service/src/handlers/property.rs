use super::{complete, json_body};
use crate::models::{HealthCheckRequest, HealthCheckResponse};
use crate::services::prompts::health_check_prompt;
use crate::startup::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use service_core::error::AppError;

const NOT_FOUND_MESSAGE: &str = "Property not found";
const FAILURE_MESSAGE: &str = "Could not generate AI summary. Please try again.";

/// AI risk summary for a catalogued property.
///
/// Unknown addresses are rejected before the provider is called. The matched
/// record is echoed back as `data_used`.
pub async fn health_check(
    State(state): State<AppState>,
    payload: Result<Json<HealthCheckRequest>, JsonRejection>,
) -> Result<Json<HealthCheckResponse>, AppError> {
    let request = json_body(payload)?;

    let record = request
        .address()
        .and_then(|address| state.catalog.lookup(address))
        .cloned()
        .ok_or_else(|| AppError::not_found(NOT_FOUND_MESSAGE))?;

    let prompt = health_check_prompt(&record);
    let summary = complete(&state, "health_check", &prompt, FAILURE_MESSAGE).await?;

    tracing::info!(address = %record.address, "Generated property health check");

    Ok(Json(HealthCheckResponse {
        address: record.address.clone(),
        summary,
        data_used: record,
    }))
}
