// stagechain/src/pipeline/hooks.rs

//! Contains methods for registering `before` and `after` observers on pipeline
//! stages. Hooks see the run's context trail through a `ContextData<PipelineRun>`
//! handle but cannot change it.

use crate::core::context_data::ContextData;
use crate::core::run::PipelineRun;
use crate::error::ChainResult;
use crate::pipeline::definition::Pipeline;
use std::future::Future;
use std::pin::Pin;
use tracing::{event, Level};

/// What a hook is told about the stage it fires for.
#[derive(Debug, Clone)]
pub struct StageEvent {
  pub stage_name: String,
  /// Zero-based position of the stage in execution order.
  pub stage_index: usize,
  pub stage_count: usize,
  /// Results of every stage completed so far in this run.
  pub run: ContextData<PipelineRun>,
}

impl StageEvent {
  /// Output of the stage this event is about, once it has completed
  /// (i.e. inside `after` hooks).
  pub fn output(&self) -> Option<String> {
    let results = self.run.map_read(|run| run.results());
    results
      .iter()
      .find(|r| r.stage_name == self.stage_name)
      .map(|r| r.output_text.clone())
  }
}

/// Type alias for a stage hook.
///
/// A hook is an async function taking a [`StageEvent`]. Returning an error
/// aborts the run with [`PipelineError::Hook`](crate::PipelineError::Hook).
/// Read guards on `event.run` must be dropped before any `.await`.
pub type StageHook = Box<dyn Fn(StageEvent) -> HookFuture + Send + Sync>;

pub type HookFuture = Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send>>;

fn boxed<F>(hook_fn: impl Fn(StageEvent) -> F + Send + Sync + 'static) -> StageHook
where
  F: Future<Output = anyhow::Result<()>> + Send + 'static,
{
  Box::new(move |event: StageEvent| -> HookFuture { Box::pin(hook_fn(event)) })
}

impl Pipeline {
  /// Registers a hook that runs right before the named stage is executed.
  pub fn before_stage<F>(
    &mut self,
    stage_name: &str,
    hook_fn: impl Fn(StageEvent) -> F + Send + Sync + 'static,
  ) -> ChainResult<()>
  where
    F: Future<Output = anyhow::Result<()>> + Send + 'static,
  {
    self.ensure_stage_exists(stage_name)?;
    self
      .before
      .entry(stage_name.to_string())
      .or_default()
      .push(boxed(hook_fn));
    event!(Level::DEBUG, %stage_name, "'before' hook registered.");
    Ok(())
  }

  /// Registers a hook that runs right after the named stage's result was recorded.
  pub fn after_stage<F>(
    &mut self,
    stage_name: &str,
    hook_fn: impl Fn(StageEvent) -> F + Send + Sync + 'static,
  ) -> ChainResult<()>
  where
    F: Future<Output = anyhow::Result<()>> + Send + 'static,
  {
    self.ensure_stage_exists(stage_name)?;
    self
      .after
      .entry(stage_name.to_string())
      .or_default()
      .push(boxed(hook_fn));
    event!(Level::DEBUG, %stage_name, "'after' hook registered.");
    Ok(())
  }

  /// Registers a hook that runs before every stage, ahead of stage-specific ones.
  pub fn before_each<F>(&mut self, hook_fn: impl Fn(StageEvent) -> F + Send + Sync + 'static)
  where
    F: Future<Output = anyhow::Result<()>> + Send + 'static,
  {
    self.before_each.push(boxed(hook_fn));
  }

  /// Registers a hook that runs after every stage, after stage-specific ones.
  pub fn after_each<F>(&mut self, hook_fn: impl Fn(StageEvent) -> F + Send + Sync + 'static)
  where
    F: Future<Output = anyhow::Result<()>> + Send + 'static,
  {
    self.after_each.push(boxed(hook_fn));
  }
}
