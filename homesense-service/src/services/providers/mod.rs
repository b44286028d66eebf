//! Text completion abstraction and implementations.
//!
//! Handlers depend only on [`TextProvider`], so the Gemini backend can be
//! swapped for [`mock::MockTextProvider`] in tests.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for completion calls. Handlers treat every variant as a failed
/// completion; the variants only exist to make the server log useful.
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("HTTP client error: {0}")]
    Client(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Content filtered")]
    ContentFiltered,

    #[error("Response contained no text")]
    EmptyResponse,
}

/// A service that turns a prompt into free-form text.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Send `prompt` and wait for the full response. No retries.
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;

    /// Short backend name for logs.
    fn name(&self) -> &'static str;

    /// Whether a credential is present. Calls are attempted either way.
    fn is_configured(&self) -> bool;
}
