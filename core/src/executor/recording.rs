// stagechain/src/executor/recording.rs

use super::{StageExecutor, StageRequest};
use crate::core::run::StageResult;
use crate::error::ExecutorError;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{event, Level};

type FailureFactory = Arc<dyn Fn() -> ExecutorError + Send + Sync>;

/// One call observed by a [`RecordingExecutor`], copied out of the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
  pub stage_name: String,
  pub instruction: String,
  pub output_contract: String,
  pub persona_role: Option<String>,
  pub context: Vec<StageResult>,
}

/// Scripted executor that remembers every request it receives.
///
/// Replies are looked up by stage name; unscripted stages answer with
/// `"<stage> output"`. Failures can be injected per stage.
#[derive(Default)]
pub struct RecordingExecutor {
  replies: HashMap<String, String>,
  failures: HashMap<String, FailureFactory>,
  calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingExecutor {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn reply(mut self, stage: impl Into<String>, text: impl Into<String>) -> Self {
    self.replies.insert(stage.into(), text.into());
    self
  }

  pub fn fail_on<F>(mut self, stage: impl Into<String>, make_error: F) -> Self
  where
    F: Fn() -> ExecutorError + Send + Sync + 'static,
  {
    self.failures.insert(stage.into(), Arc::new(make_error));
    self
  }

  /// Snapshot of the calls so far, in the order they arrived.
  pub fn calls(&self) -> Vec<RecordedCall> {
    self.calls.lock().clone()
  }

  pub fn call_count(&self) -> usize {
    self.calls.lock().len()
  }

  pub fn stages_called(&self) -> Vec<String> {
    self.calls.lock().iter().map(|c| c.stage_name.clone()).collect()
  }
}

#[async_trait]
impl StageExecutor for RecordingExecutor {
  async fn execute(&self, request: StageRequest<'_>) -> Result<String, ExecutorError> {
    self.calls.lock().push(RecordedCall {
      stage_name: request.stage_name.to_string(),
      instruction: request.instruction.to_string(),
      output_contract: request.output_contract.to_string(),
      persona_role: request.persona.map(|p| p.role.clone()),
      context: request.context.to_vec(),
    });

    if let Some(make_error) = self.failures.get(request.stage_name) {
      let err = make_error();
      event!(Level::DEBUG, stage = request.stage_name, error = %err, "Injected executor failure.");
      return Err(err);
    }

    Ok(
      self
        .replies
        .get(request.stage_name)
        .cloned()
        .unwrap_or_else(|| format!("{} output", request.stage_name)),
    )
  }
}
