use super::{complete, json_body};
use crate::models::requests::render;
use crate::models::{AskAiRequest, AskAiResponse};
use crate::services::prompts::ask_ai_prompt;
use crate::startup::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use service_core::error::AppError;

const FAILURE_MESSAGE: &str = "Could not get AI answer. Please try again.";

pub async fn ask_ai(
    State(state): State<AppState>,
    payload: Result<Json<AskAiRequest>, JsonRejection>,
) -> Result<Json<AskAiResponse>, AppError> {
    let question = json_body(payload)?
        .into_question()
        .ok_or_else(|| AppError::bad_request("No question provided"))?;

    let prompt = ask_ai_prompt(&render(&question));
    let answer = complete(&state, "ask_ai", &prompt, FAILURE_MESSAGE).await?;

    Ok(Json(AskAiResponse { question, answer }))
}
