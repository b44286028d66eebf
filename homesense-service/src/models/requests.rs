//! Request and response bodies for the JSON endpoints.

use super::PropertyRecord;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The address is kept as raw JSON: a non-string address is simply not in the
/// catalog, which is a 404 rather than a malformed body.
#[derive(Debug, Deserialize)]
pub struct HealthCheckRequest {
    #[serde(default)]
    pub address: Option<Value>,
}

impl HealthCheckRequest {
    pub fn address(&self) -> Option<&str> {
        self.address.as_ref().and_then(Value::as_str)
    }
}

#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    pub address: String,
    pub summary: String,
    pub data_used: PropertyRecord,
}

#[derive(Debug, Deserialize)]
pub struct AskAiRequest {
    #[serde(default)]
    pub question: Option<Value>,
}

impl AskAiRequest {
    /// The question as sent, or `None` when missing or falsy.
    pub fn into_question(self) -> Option<Value> {
        self.question.filter(is_truthy)
    }
}

/// Echoes the question exactly as the client sent it.
#[derive(Debug, Serialize)]
pub struct AskAiResponse {
    pub question: Value,
    pub answer: String,
}

/// Raw valuation form. Fields stay loosely typed because the browser may send
/// `beds` as either a number or a string.
#[derive(Debug, Default, Deserialize)]
pub struct ValuationRequest {
    #[serde(default)]
    pub address: Option<Value>,
    #[serde(default, rename = "type")]
    pub property_type: Option<Value>,
    #[serde(default)]
    pub beds: Option<Value>,
    #[serde(default)]
    pub condition: Option<Value>,
}

/// Validated valuation details, rendered as text for the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValuationInput {
    pub address: String,
    pub property_type: String,
    pub beds: String,
    pub condition: String,
}

impl ValuationRequest {
    /// Returns `None` when any field is missing or falsy (null, false, zero,
    /// empty string, empty array or object).
    pub fn into_input(self) -> Option<ValuationInput> {
        Some(ValuationInput {
            address: present(self.address)?,
            property_type: present(self.property_type)?,
            beds: present(self.beds)?,
            condition: present(self.condition)?,
        })
    }
}

fn present(value: Option<Value>) -> Option<String> {
    value.filter(is_truthy).map(|v| render(&v))
}

/// Prompt text for a JSON value: strings unquoted, everything else as JSON.
pub fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValuationResponse {
    pub estimate: String,
    pub reasoning: String,
}
