//! HTTP handlers for the HomeSense service.
//!
//! The three AI endpoints share one flow: validate the body, build a prompt,
//! call the completion provider once, then shape the text into JSON.

pub mod app;
pub mod ask;
pub mod property;
pub mod valuation;

pub use app::{health, index};
pub use ask::ask_ai;
pub use property::health_check;
pub use valuation::get_valuation;

use crate::startup::AppState;
use axum::extract::rejection::JsonRejection;
use axum::Json;
use service_core::error::AppError;

/// Unwrap a JSON body, turning malformed input into a 400.
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::bad_request(rejection.body_text()))
}

/// Run one completion. Any provider failure becomes a 500 carrying only
/// `failure_message`; the cause goes to the server log.
async fn complete(
    state: &AppState,
    operation: &'static str,
    prompt: &str,
    failure_message: &'static str,
) -> Result<String, AppError> {
    let provider = &state.text_provider;

    tracing::debug!(
        operation,
        provider = provider.name(),
        credential_configured = provider.is_configured(),
        "Requesting completion"
    );

    provider
        .complete(prompt)
        .await
        .map_err(|e| AppError::upstream(failure_message, e))
}
