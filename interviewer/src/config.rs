// mock_interviewer/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Settings for the language-model backend.
#[derive(Clone)]
pub struct AppConfig {
  pub api_key: String,
  pub model: String,
  pub base_url: String,
  pub temperature: f32,
  pub max_tokens: Option<u32>,
  pub request_timeout: Duration,
}

impl AppConfig {
  /// Loads `.env` (if present) and reads the `OPENAI_*` variables.
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Same as [`AppConfig::from_env`] but reads values through `lookup`.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    let api_key = get(API_KEY_VAR).ok_or(AppError::MissingApiKey { var: API_KEY_VAR })?;

    let model = get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
    let base_url = get("OPENAI_BASE_URL")
      .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
      .trim_end_matches('/')
      .to_string();

    let temperature = match get("OPENAI_TEMPERATURE") {
      Some(raw) => raw
        .parse::<f32>()
        .ok()
        .filter(|t| (0.0..=2.0).contains(t))
        .ok_or_else(|| AppError::Config(format!("Invalid OPENAI_TEMPERATURE '{}': expected 0.0 to 2.0", raw)))?,
      None => DEFAULT_TEMPERATURE,
    };

    let max_tokens = get("OPENAI_MAX_TOKENS")
      .map(|raw| {
        raw
          .parse::<u32>()
          .map_err(|e| AppError::Config(format!("Invalid OPENAI_MAX_TOKENS '{}': {}", raw, e)))
      })
      .transpose()?;

    let timeout_secs = match get("OPENAI_TIMEOUT_SECS") {
      Some(raw) => raw
        .parse::<u64>()
        .ok()
        .filter(|s| *s > 0)
        .ok_or_else(|| AppError::Config(format!("Invalid OPENAI_TIMEOUT_SECS '{}': expected a positive integer", raw)))?,
      None => DEFAULT_TIMEOUT_SECS,
    };

    tracing::info!(%model, %base_url, timeout_secs, "Application configuration loaded successfully.");

    Ok(Self {
      api_key,
      model,
      base_url,
      temperature,
      max_tokens,
      request_timeout: Duration::from_secs(timeout_secs),
    })
  }
}

// Keep the key out of logs and panic messages.
impl std::fmt::Debug for AppConfig {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("AppConfig")
      .field("api_key", &"[REDACTED]")
      .field("model", &self.model)
      .field("base_url", &self.base_url)
      .field("temperature", &self.temperature)
      .field("max_tokens", &self.max_tokens)
      .field("request_timeout", &self.request_timeout)
      .finish()
  }
}
