use crate::services::providers::gemini::GEMINI_API_BASE;
use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

#[derive(Debug, Clone)]
pub struct HomesenseConfig {
    pub common: core_config::Config,
    pub gemini: GeminiSettings,
    /// OpenTelemetry collector endpoint; tracing stays local when unset.
    pub otlp_endpoint: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    /// Empty when `GEMINI_API_KEY` is unset. Not validated at startup: calls
    /// are still made and fail at the provider.
    pub api_key: Secret<String>,
    pub model: String,
    pub api_base: String,
}

impl HomesenseConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;

        Ok(HomesenseConfig {
            common: common_config,
            gemini: GeminiSettings {
                api_key: Secret::new(optional_env("GEMINI_API_KEY").unwrap_or_default()),
                model: env_or("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
                api_base: env_or("GEMINI_API_BASE", GEMINI_API_BASE),
            },
            otlp_endpoint: optional_env("OTLP_ENDPOINT"),
        })
    }
}

/// Read a variable, treating an empty value as unset.
fn optional_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    optional_env(key).unwrap_or_else(|| default.to_string())
}
