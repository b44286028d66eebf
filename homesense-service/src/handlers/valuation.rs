use super::{complete, json_body};
use crate::models::{ValuationRequest, ValuationResponse};
use crate::services::parse_valuation;
use crate::services::prompts::valuation_prompt;
use crate::startup::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use service_core::error::AppError;

const FAILURE_MESSAGE: &str = "Could not generate AI valuation. Please try again.";

/// Simulated valuation. The completion text is split into estimate and
/// reasoning by [`parse_valuation`].
pub async fn get_valuation(
    State(state): State<AppState>,
    payload: Result<Json<ValuationRequest>, JsonRejection>,
) -> Result<Json<ValuationResponse>, AppError> {
    let input = json_body(payload)?
        .into_input()
        .ok_or_else(|| AppError::bad_request("Missing valuation details"))?;

    let prompt = valuation_prompt(&input);
    let text = complete(&state, "get_valuation", &prompt, FAILURE_MESSAGE).await?;

    Ok(Json(parse_valuation(&text)))
}
