// stagechain/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

/// Failure reported by a [`StageExecutor`](crate::StageExecutor) implementation.
///
/// The pipeline never inspects these beyond wrapping them in
/// [`PipelineError::StageExecution`]; retrying is the executor's business.
#[derive(Debug, Error)]
pub enum ExecutorError {
  #[error("executor timed out after {seconds}s")]
  Timeout { seconds: u64 },

  #[error("transport failure: {0}")]
  Transport(String),

  #[error("backend rejected the request (status {status}): {message}")]
  Rejected { status: u16, message: String },

  #[error("malformed response: {0}")]
  Malformed(String),

  #[error("backend returned an empty response")]
  EmptyResponse,
}

#[derive(Debug, Error)]
pub enum PipelineError {
  /// A required stage input is missing or blank. Raised before any stage runs.
  #[error("Validation failed for stage '{stage}': required input '{field}' is missing or empty")]
  Validation { stage: String, field: String },

  /// The pipeline definition breaks the linear-chain rules (ordering, names, templates).
  #[error("Invalid pipeline definition: {message}")]
  Definition { message: String },

  #[error("Template rendering failed for stage '{stage}': {message}")]
  Template { stage: String, message: String },

  #[error("Stage '{stage}' failed. Source: {source}")]
  StageExecution {
    stage: String,
    #[source]
    source: ExecutorError,
  },

  #[error("Hook for stage '{stage}' failed. Source: {source}")]
  Hook {
    stage: String,
    #[source]
    source: AnyhowError,
  },
}

impl PipelineError {
  /// Name of the stage the error is attributed to, if any.
  pub fn stage(&self) -> Option<&str> {
    match self {
      PipelineError::Validation { stage, .. }
      | PipelineError::Template { stage, .. }
      | PipelineError::StageExecution { stage, .. }
      | PipelineError::Hook { stage, .. } => Some(stage),
      PipelineError::Definition { .. } => None,
    }
  }

  pub(crate) fn definition(message: impl Into<String>) -> Self {
    PipelineError::Definition {
      message: message.into(),
    }
  }
}

pub type ChainResult<T, E = PipelineError> = std::result::Result<T, E>;
