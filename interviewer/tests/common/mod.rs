// tests/common/mod.rs
#![allow(dead_code)] // Not every test file uses every helper

use mock_interviewer::MockInterviewer;
use once_cell::sync::Lazy;
use stagechain::RecordingExecutor;
use std::sync::Arc;
use tracing::Level;

pub const INTERVIEW_OUT: &str = "Q1: Tell me about a system you designed.";
pub const EVALUATION_OUT: &str = "Recommendation: Hire. Technical Competency 8/10.";
pub const FEEDBACK_OUT: &str = "Executive summary: strong systems thinking.";

/// Scripted backend with a distinct reply per stage.
pub fn scripted_executor() -> RecordingExecutor {
  RecordingExecutor::new()
    .reply("interview", INTERVIEW_OUT)
    .reply("evaluation", EVALUATION_OUT)
    .reply("feedback", FEEDBACK_OUT)
}

pub fn interviewer_with(executor: Arc<RecordingExecutor>) -> MockInterviewer {
  MockInterviewer::new(executor).expect("interview pipeline is valid")
}

pub fn skills(list: &[&str]) -> Vec<String> {
  list.iter().map(|s| s.to_string()).collect()
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
