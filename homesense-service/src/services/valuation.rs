use crate::models::ValuationResponse;

/// Marker separating the estimate from its justification in model output.
pub const JUSTIFICATION_MARKER: &str = "Justification:";

/// Reasoning reported when the model omits the marker.
pub const MISSING_REASONING: &str = "No specific reasoning provided by AI.";

/// Split a valuation completion at the first [`JUSTIFICATION_MARKER`].
///
/// This is a plain text split, not a parser: later markers stay part of the
/// reasoning, and without a marker the whole text is the estimate.
pub fn parse_valuation(text: &str) -> ValuationResponse {
    match text.split_once(JUSTIFICATION_MARKER) {
        Some((estimate, reasoning)) => ValuationResponse {
            estimate: estimate.trim().to_string(),
            reasoning: reasoning.trim().to_string(),
        },
        None => ValuationResponse {
            estimate: text.trim().to_string(),
            reasoning: MISSING_REASONING.to_string(),
        },
    }
}
