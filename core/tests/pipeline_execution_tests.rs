// tests/pipeline_execution_tests.rs
mod common;

use common::*;
use stagechain::{EchoExecutor, Pipeline, RecordingExecutor, StageInputs, StageResult, StageSpec};
use std::sync::Arc;

#[tokio::test]
async fn test_pipeline_runs_stages_in_order_and_returns_last_output() {
  setup_tracing();
  let pipeline = three_stage_pipeline();
  let executor = RecordingExecutor::new()
    .reply("draft", "1. plan")
    .reply("review", "- risk")
    .reply("summary", "All good.");

  let output = pipeline.run(&full_inputs(), &executor).await.unwrap();

  assert_eq!(output, "All good.");
  assert_eq!(executor.call_count(), 3);
  assert_eq!(executor.stages_called(), vec!["draft", "review", "summary"]);
}

#[tokio::test]
async fn test_context_contains_exactly_the_declared_dependencies() {
  setup_tracing();
  let pipeline = three_stage_pipeline();
  let executor = RecordingExecutor::new()
    .reply("draft", "DRAFT")
    .reply("review", "REVIEW");

  pipeline.run(&full_inputs(), &executor).await.unwrap();
  let calls = executor.calls();

  assert!(calls[0].context.is_empty());
  assert_eq!(calls[1].context, vec![StageResult::new("draft", "DRAFT")]);
  assert_eq!(
    calls[2].context,
    vec![StageResult::new("draft", "DRAFT"), StageResult::new("review", "REVIEW")]
  );
}

#[tokio::test]
async fn test_context_skips_stages_that_are_not_dependencies() {
  setup_tracing();
  let pipeline = Pipeline::new(vec![
    StageSpec::new("a", "A", "-"),
    StageSpec::new("b", "B", "-"),
    StageSpec::new("c", "C", "-").depends_on(["a"]),
  ])
  .unwrap();
  let executor = RecordingExecutor::new();

  pipeline.run(&StageInputs::new(), &executor).await.unwrap();

  let calls = executor.calls();
  assert_eq!(calls[2].context, vec![StageResult::new("a", "a output")]);
}

#[tokio::test]
async fn test_rendered_prompts_reach_the_executor() {
  setup_tracing();
  let pipeline = three_stage_pipeline();
  let executor = RecordingExecutor::new();

  pipeline.run(&full_inputs(), &executor).await.unwrap();
  let calls = executor.calls();

  assert_eq!(
    calls[0].instruction,
    "Draft a plan for a product launch.\nConstraints: two weeks, no budget"
  );
  assert_eq!(calls[0].output_contract, "A numbered plan for a product launch.");
  assert_eq!(calls[0].persona_role.as_deref(), Some("Planner"));
  assert_eq!(calls[2].instruction, "Summarise for executives.");
  assert_eq!(calls[2].persona_role, None);
}

#[tokio::test]
async fn test_run_with_trail_returns_every_stage_result() {
  setup_tracing();
  let pipeline = three_stage_pipeline();
  let executor = RecordingExecutor::new().reply("review", "looks risky");

  let run = pipeline.run_with_trail(&full_inputs(), &executor).await.unwrap();

  let names: Vec<&str> = run.results().iter().map(|r| r.stage_name.as_str()).collect();
  assert_eq!(names, vec!["draft", "review", "summary"]);
  assert_eq!(run.result_for("review").unwrap().output_text, "looks risky");
  assert_eq!(run.final_output(), Some("summary output"));
}

#[tokio::test]
async fn test_identical_inputs_give_identical_output_and_trail() {
  setup_tracing();
  let pipeline = three_stage_pipeline();

  let first = pipeline.run_with_trail(&full_inputs(), &EchoExecutor).await.unwrap();
  let second = pipeline.run_with_trail(&full_inputs(), &EchoExecutor).await.unwrap();

  assert_eq!(first.results(), second.results());
  assert_eq!(first.final_output(), second.final_output());
  assert_ne!(first.run_id(), second.run_id());
}

#[tokio::test]
async fn test_concurrent_runs_keep_their_own_trails() {
  setup_tracing();
  let pipeline = Arc::new(three_stage_pipeline());
  let executor = Arc::new(EchoExecutor);

  let mut handles = Vec::new();
  for audience in ["engineers", "lawyers", "investors", "students"] {
    let pipeline = Arc::clone(&pipeline);
    let executor = Arc::clone(&executor);
    handles.push(tokio::spawn(async move {
      let inputs = full_inputs().with("audience", audience);
      let run = pipeline.run_with_trail(&inputs, executor.as_ref()).await.unwrap();
      (audience, run)
    }));
  }

  for handle in handles {
    let (audience, run) = handle.await.unwrap();
    assert_eq!(run.results().len(), 3);
    assert!(run.final_output().unwrap().contains(&format!("Summarise for {}.", audience)));
  }
}

#[tokio::test]
async fn test_executor_behind_trait_object() {
  setup_tracing();
  let pipeline = three_stage_pipeline();
  let executor: Arc<dyn stagechain::StageExecutor> = Arc::new(RecordingExecutor::new());

  let output = pipeline.run(&full_inputs(), executor.as_ref()).await.unwrap();
  assert_eq!(output, "summary output");
}
