// stagechain/src/core/run.rs

//! Per-run state: the results each stage produced, in execution order.

use uuid::Uuid;

/// Output of one stage in one run. Written once, never changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageResult {
  pub stage_name: String,
  pub output_text: String,
}

impl StageResult {
  pub fn new(stage_name: impl Into<String>, output_text: impl Into<String>) -> Self {
    Self {
      stage_name: stage_name.into(),
      output_text: output_text.into(),
    }
  }
}

/// The context trail of a single pipeline invocation.
///
/// A run exists for the duration of one `Pipeline::run*` call. Nothing in it is
/// shared with other runs.
#[derive(Debug, Clone)]
pub struct PipelineRun {
  run_id: Uuid,
  results: Vec<StageResult>,
}

impl PipelineRun {
  pub(crate) fn new() -> Self {
    Self {
      run_id: Uuid::new_v4(),
      results: Vec::new(),
    }
  }

  pub fn run_id(&self) -> Uuid {
    self.run_id
  }

  pub fn results(&self) -> &[StageResult] {
    &self.results
  }

  pub fn result_for(&self, stage_name: &str) -> Option<&StageResult> {
    self.results.iter().find(|r| r.stage_name == stage_name)
  }

  /// Output of the most recently completed stage.
  pub fn final_output(&self) -> Option<&str> {
    self.results.last().map(|r| r.output_text.as_str())
  }

  /// Results of the given dependencies, in the order the stages executed.
  pub fn context_for(&self, depends_on: &[String]) -> Vec<StageResult> {
    self
      .results
      .iter()
      .filter(|r| depends_on.iter().any(|d| *d == r.stage_name))
      .cloned()
      .collect()
  }

  pub fn into_results(self) -> Vec<StageResult> {
    self.results
  }

  pub(crate) fn push(&mut self, result: StageResult) {
    self.results.push(result);
  }
}
