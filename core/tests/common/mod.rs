// tests/common/mod.rs
#![allow(dead_code)] // Not every test file uses every helper

use once_cell::sync::Lazy;
use stagechain::{Persona, Pipeline, StageInputs, StageSpec};
use tracing::Level;

// --- Common stage set: a three-stage chain shaped like draft -> review -> summary ---

pub fn draft_stage() -> StageSpec {
  StageSpec::new(
    "draft",
    "Draft a plan for {{goal}}.\nConstraints: {{constraints}}",
    "A numbered plan for {{goal}}.",
  )
  .requires(["goal", "constraints"])
  .with_persona(Persona::new("Planner", "Produce a workable plan", "Has planned many things."))
}

pub fn review_stage() -> StageSpec {
  StageSpec::new("review", "Review the draft plan for {{goal}}.", "A list of risks.")
    .requires(["goal"])
    .depends_on(["draft"])
}

pub fn summary_stage() -> StageSpec {
  StageSpec::new("summary", "Summarise for {{audience}}.", "One paragraph.")
    .requires(["audience"])
    .depends_on(["draft", "review"])
}

pub fn three_stage_pipeline() -> Pipeline {
  Pipeline::new(vec![draft_stage(), review_stage(), summary_stage()]).expect("valid pipeline")
}

pub fn full_inputs() -> StageInputs {
  StageInputs::new()
    .with("goal", "a product launch")
    .with("constraints", "two weeks, no budget")
    .with("audience", "executives")
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
