// stagechain/src/pipeline/execution.rs

//! Contains `Pipeline::run()` and `Pipeline::run_with_trail()`, which render the
//! stages, hand them to the executor one at a time, and thread each result
//! forward as context.

use crate::core::context_data::ContextData;
use crate::core::inputs::StageInputs;
use crate::core::run::{PipelineRun, StageResult};
use crate::core::stage::RenderedStage;
use crate::error::{ChainResult, ExecutorError, PipelineError};
use crate::executor::{StageExecutor, StageRequest};
use crate::pipeline::definition::Pipeline;
use crate::pipeline::hooks::{StageEvent, StageHook};
use std::time::Instant;
use tracing::{event, instrument, span, Instrument, Level};

impl Pipeline {
  /// Runs every stage in order and returns the last stage's output verbatim.
  ///
  /// See [`Pipeline::run_with_trail`] for the failure rules.
  pub async fn run<E>(&self, inputs: &StageInputs, executor: &E) -> ChainResult<String>
  where
    E: StageExecutor + ?Sized,
  {
    let run = self.run_with_trail(inputs, executor).await?;
    run
      .into_results()
      .pop()
      .map(|last| last.output_text)
      .ok_or_else(|| PipelineError::definition("pipeline finished without producing output"))
  }

  /// Runs every stage in order and returns the whole context trail.
  ///
  /// All stages are rendered before the first executor call, so a missing
  /// input never leads to a partial run. The first executor failure, blank
  /// reply, or hook error aborts the run; later stages are not invoked and
  /// nothing is retried.
  #[instrument(
    name = "Pipeline::run",
    skip_all,
    fields(num_stages = self.stages.len(), run_id = tracing::field::Empty),
    err(Display)
  )]
  pub async fn run_with_trail<E>(&self, inputs: &StageInputs, executor: &E) -> ChainResult<PipelineRun>
  where
    E: StageExecutor + ?Sized,
  {
    let rendered = self.render(inputs)?;

    let run = ContextData::new(PipelineRun::new());
    let run_id = run.read().run_id();
    tracing::Span::current().record("run_id", tracing::field::display(run_id));
    event!(Level::DEBUG, "Pipeline execution starting.");

    let stage_count = rendered.len();
    for (stage_index, stage) in rendered.iter().enumerate() {
      let stage_span = span!(
        Level::INFO,
        "pipeline_stage",
        stage_name = stage.name.as_str(),
        stage_index,
        depends_on = stage.depends_on.len()
      );
      let stage_event = StageEvent {
        stage_name: stage.name.clone(),
        stage_index,
        stage_count,
        run: run.clone(),
      };
      self
        .run_stage(stage, stage_event, executor)
        .instrument(stage_span)
        .await?;
    }

    event!(Level::DEBUG, "Pipeline execution completed successfully.");
    Ok(run.into_inner())
  }

  async fn run_stage<E>(&self, stage: &RenderedStage, stage_event: StageEvent, executor: &E) -> ChainResult<()>
  where
    E: StageExecutor + ?Sized,
  {
    // BEFORE phase: global hooks first, then the stage's own.
    let before: Vec<&StageHook> = self
      .before_each
      .iter()
      .chain(self.before.get(&stage.name).into_iter().flatten())
      .collect();
    fire_hooks(&before, &stage_event, "before").await?;

    let context = stage_event.run.read().context_for(&stage.depends_on);
    let request = StageRequest {
      stage_name: &stage.name,
      instruction: &stage.instruction,
      output_contract: &stage.output_contract,
      persona: stage.persona.as_ref(),
      context: &context,
    };

    event!(Level::DEBUG, context_entries = context.len(), "Dispatching stage to executor.");
    let started = Instant::now();
    let output = executor.execute(request).await.map_err(|source| {
      event!(Level::ERROR, error = %source, "Stage execution failed.");
      PipelineError::StageExecution {
        stage: stage.name.clone(),
        source,
      }
    })?;

    if output.trim().is_empty() {
      event!(Level::ERROR, "Executor returned a blank output.");
      return Err(PipelineError::StageExecution {
        stage: stage.name.clone(),
        source: ExecutorError::EmptyResponse,
      });
    }

    event!(
      Level::INFO,
      elapsed_ms = started.elapsed().as_millis() as u64,
      output_chars = output.chars().count(),
      "Stage completed."
    );
    stage_event.run.write().push(StageResult::new(stage.name.clone(), output));

    // AFTER phase: the stage's own hooks first, then global ones.
    let after: Vec<&StageHook> = self
      .after
      .get(&stage.name)
      .into_iter()
      .flatten()
      .chain(self.after_each.iter())
      .collect();
    fire_hooks(&after, &stage_event, "after").await
  }
}

async fn fire_hooks(hooks: &[&StageHook], stage_event: &StageEvent, phase: &'static str) -> ChainResult<()> {
  for (hook_index, hook) in hooks.iter().enumerate() {
    if let Err(source) = hook(stage_event.clone()).await {
      event!(Level::ERROR, phase, hook_index, error = %source, "Stage hook failed.");
      return Err(PipelineError::Hook {
        stage: stage_event.stage_name.clone(),
        source,
      });
    }
  }
  Ok(())
}
