// stagechain/src/core/template.rs

//! Handlebars-backed rendering of stage instructions and output contracts.

use crate::core::inputs::StageInputs;
use crate::core::stage::{RenderedStage, StageSpec};
use crate::error::{ChainResult, PipelineError};
use handlebars::Handlebars;
use tracing::{event, Level};

/// Compiled templates for every stage of a pipeline.
///
/// Strict mode is on, so a placeholder without a matching input is an error
/// instead of silently rendering as an empty string. Output is plain text,
/// nothing is HTML-escaped.
pub(crate) struct PromptTemplates {
  registry: Handlebars<'static>,
}

impl PromptTemplates {
  pub(crate) fn new() -> Self {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    registry.register_escape_fn(handlebars::no_escape);
    Self { registry }
  }

  /// Compiles both templates of `spec`. Fails with `Definition` on bad syntax.
  pub(crate) fn register(&mut self, spec: &StageSpec) -> ChainResult<()> {
    let pairs = [
      (instruction_key(&spec.name), &spec.instruction_template),
      (contract_key(&spec.name), &spec.output_contract_template),
    ];
    for (key, source) in pairs {
      self.registry.register_template_string(&key, source).map_err(|e| {
        PipelineError::definition(format!("template '{}' does not compile: {}", key, e))
      })?;
    }
    Ok(())
  }

  pub(crate) fn render(&self, spec: &StageSpec, inputs: &StageInputs) -> ChainResult<RenderedStage> {
    // required_inputs is a BTreeSet, so the first missing field is stable.
    if let Some(field) = spec.required_inputs.iter().find(|f| !inputs.is_filled(f)) {
      event!(Level::WARN, stage = %spec.name, %field, "Required stage input missing.");
      return Err(PipelineError::Validation {
        stage: spec.name.clone(),
        field: field.clone(),
      });
    }

    let data = inputs.as_json();
    let render = |key: String| {
      self.registry.render(&key, &data).map_err(|e| PipelineError::Template {
        stage: spec.name.clone(),
        message: e.to_string(),
      })
    };

    Ok(RenderedStage {
      name: spec.name.clone(),
      instruction: render(instruction_key(&spec.name))?,
      output_contract: render(contract_key(&spec.name))?,
      depends_on: spec.depends_on.clone(),
      persona: spec.persona.clone(),
    })
  }
}

fn instruction_key(stage: &str) -> String {
  format!("{}.instruction", stage)
}

fn contract_key(stage: &str) -> String {
  format!("{}.output_contract", stage)
}
