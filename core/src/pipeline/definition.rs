// stagechain/src/pipeline/definition.rs

//! Contains the `Pipeline` struct definition, its validation, and read-only
//! accessors over the stage list.

use crate::core::inputs::StageInputs;
use crate::core::stage::{RenderedStage, StageSpec};
use crate::core::template::PromptTemplates;
use crate::error::{ChainResult, PipelineError};
use crate::pipeline::hooks::StageHook;
use std::collections::{HashMap, HashSet};
use tracing::{event, Level};

/// An ordered, linear chain of stages.
///
/// Each stage may only take context from stages that come strictly before it,
/// which is checked when the pipeline is built. Once built, the stage list is
/// fixed; only observers (hooks) can be attached afterwards.
pub struct Pipeline {
  /// Stages in execution order.
  pub(crate) stages: Vec<StageSpec>,
  pub(crate) templates: PromptTemplates,

  // Observers, keyed by stage name, plus the ones that fire for every stage.
  pub(crate) before: HashMap<String, Vec<StageHook>>,
  pub(crate) after: HashMap<String, Vec<StageHook>>,
  pub(crate) before_each: Vec<StageHook>,
  pub(crate) after_each: Vec<StageHook>,
}

impl Pipeline {
  /// Builds a pipeline from stages given in execution order.
  ///
  /// Fails with [`PipelineError::Definition`] when the list is empty, a name is
  /// blank or repeated, a dependency points at the stage itself or at a later
  /// or unknown stage, or a template does not compile.
  pub fn new(stages: Vec<StageSpec>) -> ChainResult<Self> {
    if stages.is_empty() {
      return Err(PipelineError::definition("a pipeline needs at least one stage"));
    }

    check_linear_chain(&stages)?;

    let mut templates = PromptTemplates::new();
    for stage in &stages {
      templates.register(stage)?;
    }

    event!(Level::DEBUG, num_stages = stages.len(), "Pipeline definition accepted.");

    Ok(Self {
      stages,
      templates,
      before: HashMap::new(),
      after: HashMap::new(),
      before_each: Vec::new(),
      after_each: Vec::new(),
    })
  }

  pub fn stages(&self) -> &[StageSpec] {
    &self.stages
  }

  pub fn stage(&self, name: &str) -> Option<&StageSpec> {
    self.stages.iter().find(|s| s.name == name)
  }

  pub fn stage_names(&self) -> Vec<&str> {
    self.stages.iter().map(|s| s.name.as_str()).collect()
  }

  pub fn len(&self) -> usize {
    self.stages.len()
  }

  pub fn is_empty(&self) -> bool {
    self.stages.is_empty()
  }

  /// Renders every stage against `inputs`, in execution order.
  ///
  /// This is the fail-fast step of a run: a missing input anywhere in the
  /// chain is reported here, before any stage executes.
  pub fn render(&self, inputs: &StageInputs) -> ChainResult<Vec<RenderedStage>> {
    self
      .stages
      .iter()
      .map(|stage| self.templates.render(stage, inputs))
      .collect()
  }

  pub(crate) fn ensure_stage_exists(&self, stage_name: &str) -> ChainResult<()> {
    if self.stages.iter().any(|s| s.name == stage_name) {
      Ok(())
    } else {
      Err(PipelineError::definition(format!(
        "no stage named '{}' in this pipeline",
        stage_name
      )))
    }
  }
}

/// Names must be non-blank and unique, and every dependency must name a stage
/// that runs strictly earlier.
fn check_linear_chain(stages: &[StageSpec]) -> ChainResult<()> {
  let mut earlier: HashSet<&str> = HashSet::new();
  for stage in stages {
    let name = stage.name.as_str();
    if name.trim().is_empty() {
      return Err(PipelineError::definition("stage names must not be empty"));
    }
    if earlier.contains(name) {
      return Err(PipelineError::definition(format!("stage '{}' is defined twice", name)));
    }
    for dep in &stage.depends_on {
      if dep == name {
        return Err(PipelineError::definition(format!("stage '{}' depends on itself", name)));
      }
      if !earlier.contains(dep.as_str()) {
        return Err(PipelineError::definition(format!(
          "stage '{}' depends on '{}', which does not run before it",
          name, dep
        )));
      }
    }
    earlier.insert(name);
  }
  Ok(())
}

impl std::fmt::Debug for Pipeline {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Pipeline")
      .field("stages", &self.stage_names())
      .field("before_hooks", &self.before.values().map(Vec::len).sum::<usize>())
      .field("after_hooks", &self.after.values().map(Vec::len).sum::<usize>())
      .field("before_each", &self.before_each.len())
      .field("after_each", &self.after_each.len())
      .finish()
  }
}
