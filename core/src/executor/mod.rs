// stagechain/src/executor/mod.rs

//! The boundary to the language-model backend.
//!
//! The pipeline hands every stage to a [`StageExecutor`] together with the
//! outputs of the stages it depends on, and waits for free text back. Which
//! model or provider sits behind the trait is not the pipeline's concern: a
//! direct API client, a queue, or a scripted fake for tests all fit.

mod echo;
mod recording;

pub use echo::EchoExecutor;
pub use recording::{RecordedCall, RecordingExecutor};

use crate::core::run::StageResult;
use crate::core::stage::Persona;
use crate::error::ExecutorError;
use async_trait::async_trait;

/// Everything an executor needs to produce one stage's output.
#[derive(Debug, Clone, Copy)]
pub struct StageRequest<'a> {
  pub stage_name: &'a str,
  pub instruction: &'a str,
  pub output_contract: &'a str,
  pub persona: Option<&'a Persona>,
  /// Verbatim outputs of the declared dependencies, in execution order.
  pub context: &'a [StageResult],
}

/// Produces free text for a rendered stage.
///
/// Implementations used by concurrent runs must be safe to share; the
/// pipeline itself never locks around a call. Timeouts and retries, if any,
/// belong here rather than in the pipeline.
#[async_trait]
pub trait StageExecutor: Send + Sync {
  async fn execute(&self, request: StageRequest<'_>) -> Result<String, ExecutorError>;
}
