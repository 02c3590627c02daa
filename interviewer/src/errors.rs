// mock_interviewer/src/errors.rs

use stagechain::PipelineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  /// A caller-supplied value is unusable, e.g. a blank job role.
  #[error("Validation Error: {0}")]
  Validation(String),

  /// Malformed configuration (environment / `.env`).
  #[error("Configuration Error: {0}")]
  Config(String),

  /// The backend credential is absent or blank.
  #[error("Configuration Error: {var} is not set. Export it, or copy .env.example to .env and add your API key.")]
  MissingApiKey { var: &'static str },

  #[error("Interview pipeline failed: {source}")]
  Pipeline {
    #[from] // Allows conversion from stagechain::PipelineError
    source: PipelineError,
  },

  #[error("I/O Error: {0}")]
  Io(#[from] std::io::Error),

  #[error("Internal Error: {0}")]
  Internal(String),
}

impl AppError {
  /// The stage a pipeline failure is attributed to, if any.
  pub fn failed_stage(&self) -> Option<&str> {
    match self {
      AppError::Pipeline { source } => source.stage(),
      _ => None,
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
