// tests/error_handling_tests.rs
mod common;

use common::*;
use stagechain::{ExecutorError, PipelineError, RecordingExecutor};

#[tokio::test]
async fn test_missing_input_fails_before_any_execution() {
  setup_tracing();
  let pipeline = three_stage_pipeline();
  let executor = RecordingExecutor::new();
  // "audience" is only needed by the last stage, yet nothing may run.
  let inputs = full_inputs().with("audience", "");

  let err = pipeline.run(&inputs, &executor).await.unwrap_err();

  match err {
    PipelineError::Validation { stage, field } => {
      assert_eq!(stage, "summary");
      assert_eq!(field, "audience");
    }
    other => panic!("Expected PipelineError::Validation, got {:?}", other),
  }
  assert_eq!(executor.call_count(), 0);
}

#[tokio::test]
async fn test_whitespace_only_input_counts_as_missing() {
  setup_tracing();
  let pipeline = three_stage_pipeline();
  let executor = RecordingExecutor::new();
  let inputs = full_inputs().with("goal", "  \t ");

  let err = pipeline.run(&inputs, &executor).await.unwrap_err();

  assert!(matches!(&err, PipelineError::Validation { field, .. } if field == "goal"), "got {:?}", err);
  assert_eq!(err.stage(), Some("draft"));
  assert_eq!(executor.call_count(), 0);
}

#[tokio::test]
async fn test_executor_failure_stops_the_run_at_that_stage() {
  setup_tracing();
  let pipeline = three_stage_pipeline();
  let executor = RecordingExecutor::new().fail_on("review", || ExecutorError::Timeout { seconds: 30 });

  let err = pipeline.run(&full_inputs(), &executor).await.unwrap_err();

  match &err {
    PipelineError::StageExecution { stage, source } => {
      assert_eq!(stage, "review");
      assert!(matches!(source, ExecutorError::Timeout { seconds: 30 }));
    }
    other => panic!("Expected PipelineError::StageExecution, got {:?}", other),
  }
  assert!(err.to_string().contains("review"));
  assert_eq!(executor.stages_called(), vec!["draft", "review"]);
}

#[tokio::test]
async fn test_blank_executor_output_is_a_stage_failure() {
  setup_tracing();
  let pipeline = three_stage_pipeline();
  let executor = RecordingExecutor::new().reply("draft", "   \n");

  let err = pipeline.run(&full_inputs(), &executor).await.unwrap_err();

  assert!(
    matches!(
      &err,
      PipelineError::StageExecution { stage, source: ExecutorError::EmptyResponse } if stage == "draft"
    ),
    "got {:?}",
    err
  );
  assert_eq!(executor.call_count(), 1);
}

#[tokio::test]
async fn test_failed_run_does_not_affect_the_next_one() {
  setup_tracing();
  let pipeline = three_stage_pipeline();
  let failing = RecordingExecutor::new().fail_on("summary", || ExecutorError::Transport("reset".into()));
  let healthy = RecordingExecutor::new();

  assert!(pipeline.run(&full_inputs(), &failing).await.is_err());
  let output = pipeline.run(&full_inputs(), &healthy).await.unwrap();

  assert_eq!(output, "summary output");
  assert_eq!(healthy.calls()[1].context.len(), 1);
}
