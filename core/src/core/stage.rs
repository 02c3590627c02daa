// stagechain/src/core/stage.rs

//! Defines the static description of a pipeline stage and the concrete task
//! rendered from it for one run.

use crate::core::inputs::StageInputs;
use crate::core::template::PromptTemplates;
use crate::error::ChainResult;
use std::collections::BTreeSet;

/// Who the executor should "be" while producing a stage's output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persona {
  pub role: String,
  pub goal: String,
  pub backstory: String,
}

impl Persona {
  pub fn new(role: impl Into<String>, goal: impl Into<String>, backstory: impl Into<String>) -> Self {
    Self {
      role: role.into(),
      goal: goal.into(),
      backstory: backstory.into(),
    }
  }
}

/// Definition of a single stage: a templated instruction, a templated
/// expected-output contract, the inputs both need, and the earlier stages
/// whose outputs it receives as context.
///
/// Templates use `{{name}}` placeholders. A `StageSpec` is a plain value; it is
/// never mutated once handed to a [`Pipeline`](crate::Pipeline).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageSpec {
  pub(crate) name: String,
  pub(crate) instruction_template: String,
  pub(crate) output_contract_template: String,
  pub(crate) required_inputs: BTreeSet<String>,
  pub(crate) depends_on: Vec<String>,
  pub(crate) persona: Option<Persona>,
}

impl StageSpec {
  pub fn new(
    name: impl Into<String>,
    instruction_template: impl Into<String>,
    output_contract_template: impl Into<String>,
  ) -> Self {
    Self {
      name: name.into(),
      instruction_template: instruction_template.into(),
      output_contract_template: output_contract_template.into(),
      required_inputs: BTreeSet::new(),
      depends_on: Vec::new(),
      persona: None,
    }
  }

  /// Declares inputs that must be present and non-blank before the run starts.
  pub fn requires<I, S>(mut self, inputs: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.required_inputs.extend(inputs.into_iter().map(Into::into));
    self
  }

  /// Declares the earlier stages whose outputs are passed to this stage as context.
  /// Order is irrelevant; context is always delivered in execution order.
  pub fn depends_on<I, S>(mut self, stages: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    for stage in stages {
      let stage = stage.into();
      if !self.depends_on.contains(&stage) {
        self.depends_on.push(stage);
      }
    }
    self
  }

  pub fn with_persona(mut self, persona: Persona) -> Self {
    self.persona = Some(persona);
    self
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn instruction_template(&self) -> &str {
    &self.instruction_template
  }

  pub fn output_contract_template(&self) -> &str {
    &self.output_contract_template
  }

  pub fn required_inputs(&self) -> &BTreeSet<String> {
    &self.required_inputs
  }

  pub fn dependencies(&self) -> &[String] {
    &self.depends_on
  }

  pub fn persona(&self) -> Option<&Persona> {
    self.persona.as_ref()
  }

  /// Renders this stage on its own. Pipelines render through a shared,
  /// pre-compiled registry instead; the result is identical.
  pub fn render(&self, inputs: &StageInputs) -> ChainResult<RenderedStage> {
    let mut templates = PromptTemplates::new();
    templates.register(self)?;
    templates.render(self, inputs)
  }
}

/// A stage with every placeholder substituted, ready for the executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedStage {
  pub name: String,
  pub instruction: String,
  pub output_contract: String,
  pub depends_on: Vec<String>,
  pub persona: Option<Persona>,
}
