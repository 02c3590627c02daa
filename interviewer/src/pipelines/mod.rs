// mock_interviewer/src/pipelines/mod.rs

//! Defines the three-stage interview pipeline: interview -> evaluation -> feedback.

mod evaluation_stage;
mod feedback_stage;
mod interview_stage;
pub mod personas;

pub use evaluation_stage::{evaluation_stage, CRITERIA, RECOMMENDATIONS};
pub use feedback_stage::feedback_stage;
pub use interview_stage::interview_stage;

use stagechain::{Pipeline, PipelineError};

// Stage names
pub const INTERVIEW_STAGE: &str = "interview";
pub const EVALUATION_STAGE: &str = "evaluation";
pub const FEEDBACK_STAGE: &str = "feedback";

// Input names shared by the stage templates
pub const JOB_ROLE: &str = "job_role";
pub const CANDIDATE_BACKGROUND: &str = "candidate_background";
pub const FOCUS_AREAS: &str = "focus_areas";

/// Builds the interview pipeline with its stages in fixed order.
pub fn interview_pipeline() -> Result<Pipeline, PipelineError> {
  Pipeline::new(vec![interview_stage(), evaluation_stage(), feedback_stage()])
}
