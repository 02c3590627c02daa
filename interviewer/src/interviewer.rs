// mock_interviewer/src/interviewer.rs

//! Entry points used by the CLI: a full interview from a free-text background,
//! or a "quick" interview built from years of experience and a skill list.

use crate::errors::{AppError, Result};
use crate::pipelines::{self, CANDIDATE_BACKGROUND, FOCUS_AREAS, JOB_ROLE};
use stagechain::{Pipeline, PipelineRun, StageExecutor, StageInputs, StageResult};
use std::fmt;
use std::sync::Arc;
use tracing::{info, instrument};

/// Used when the caller gives no focus areas, or only whitespace.
pub const DEFAULT_FOCUS_AREAS: &str = "General technical and behavioral assessment";

const SOFT_SKILLS_FOCUS: &str = "Leadership and problem-solving";
const QUICK_FOCUS_SKILLS: usize = 3;

/// Stage lifecycle notifications, delivered through pipeline hooks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
  Started {
    stage: String,
    index: usize,
    count: usize,
  },
  Finished {
    stage: String,
    index: usize,
    count: usize,
    output_chars: usize,
  },
}

/// Every stage output of one interview run, in execution order.
#[derive(Debug, Clone)]
pub struct InterviewReport {
  pub run_id: String,
  pub job_role: String,
  pub stages: Vec<StageResult>,
}

impl InterviewReport {
  fn from_run(job_role: &str, run: PipelineRun) -> Self {
    Self {
      run_id: run.run_id().to_string(),
      job_role: job_role.to_string(),
      stages: run.into_results(),
    }
  }

  /// The candidate-facing feedback, i.e. the last stage's output.
  pub fn feedback(&self) -> &str {
    self.stages.last().map(|r| r.output_text.as_str()).unwrap_or_default()
  }

  pub fn stage_output(&self, stage_name: &str) -> Option<&str> {
    self
      .stages
      .iter()
      .find(|r| r.stage_name == stage_name)
      .map(|r| r.output_text.as_str())
  }
}

impl fmt::Display for InterviewReport {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "# Mock interview report: {}", self.job_role)?;
    writeln!(f, "Run: {}", self.run_id)?;
    for result in &self.stages {
      writeln!(f)?;
      writeln!(f, "## {}", title_case(&result.stage_name))?;
      writeln!(f)?;
      writeln!(f, "{}", result.output_text.trim_end())?;
    }
    Ok(())
  }
}

fn title_case(name: &str) -> String {
  let mut chars = name.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}

pub struct MockInterviewer {
  pipeline: Pipeline,
  executor: Arc<dyn StageExecutor>,
}

impl MockInterviewer {
  pub fn new(executor: Arc<dyn StageExecutor>) -> Result<Self> {
    let pipeline = pipelines::interview_pipeline()?;
    Ok(Self { pipeline, executor })
  }

  /// Calls `report` when each stage starts and after it finishes.
  pub fn with_progress<F>(mut self, report: F) -> Self
  where
    F: Fn(Progress) + Send + Sync + 'static,
  {
    let report = Arc::new(report);

    let on_start = report.clone();
    self.pipeline.before_each(move |event| {
      on_start(Progress::Started {
        stage: event.stage_name.clone(),
        index: event.stage_index,
        count: event.stage_count,
      });
      async { Ok::<(), anyhow::Error>(()) }
    });

    let on_finish = report;
    self.pipeline.after_each(move |event| {
      let output_chars = event.output().map(|o| o.chars().count()).unwrap_or(0);
      on_finish(Progress::Finished {
        stage: event.stage_name.clone(),
        index: event.stage_index,
        count: event.stage_count,
        output_chars,
      });
      async { Ok::<(), anyhow::Error>(()) }
    });

    self
  }

  pub fn pipeline(&self) -> &Pipeline {
    &self.pipeline
  }

  /// Runs the interview and returns the candidate feedback.
  pub async fn run(&self, job_role: &str, candidate_background: &str, focus_areas: Option<&str>) -> Result<String> {
    let report = self.run_report(job_role, candidate_background, focus_areas).await?;
    Ok(report.feedback().to_string())
  }

  /// Like [`MockInterviewer::run`], but keeps the interview and evaluation too.
  #[instrument(name = "MockInterviewer::run", skip_all, fields(job_role = %job_role), err(Display))]
  pub async fn run_report(
    &self,
    job_role: &str,
    candidate_background: &str,
    focus_areas: Option<&str>,
  ) -> Result<InterviewReport> {
    let inputs = interview_inputs(job_role, candidate_background, focus_areas)?;
    let run = self.pipeline.run_with_trail(&inputs, self.executor.as_ref()).await?;
    info!(stages = run.results().len(), "Interview pipeline finished.");
    Ok(InterviewReport::from_run(job_role.trim(), run))
  }

  pub async fn run_quick_interview(&self, job_role: &str, years_experience: u32, key_skills: &[String]) -> Result<String> {
    let report = self.run_quick_report(job_role, years_experience, key_skills).await?;
    Ok(report.feedback().to_string())
  }

  pub async fn run_quick_report(
    &self,
    job_role: &str,
    years_experience: u32,
    key_skills: &[String],
  ) -> Result<InterviewReport> {
    let background = quick_background(job_role, years_experience, key_skills);
    let focus = quick_focus_areas(key_skills);
    self.run_report(job_role, &background, Some(focus.as_str())).await
  }
}

/// Checks the caller's values and assembles the pipeline inputs.
pub fn interview_inputs(job_role: &str, candidate_background: &str, focus_areas: Option<&str>) -> Result<StageInputs> {
  if job_role.trim().is_empty() {
    return Err(AppError::Validation(format!("{} must not be empty", JOB_ROLE)));
  }
  if candidate_background.trim().is_empty() {
    return Err(AppError::Validation(format!("{} must not be empty", CANDIDATE_BACKGROUND)));
  }
  let focus = focus_areas
    .map(str::trim)
    .filter(|f| !f.is_empty())
    .unwrap_or(DEFAULT_FOCUS_AREAS);

  Ok(
    StageInputs::new()
      .with(JOB_ROLE, job_role.trim())
      .with(CANDIDATE_BACKGROUND, candidate_background.trim())
      .with(FOCUS_AREAS, focus),
  )
}

pub fn quick_background(job_role: &str, years_experience: u32, key_skills: &[String]) -> String {
  format!(
    "- {} years of experience in software development\n- Key skills: {}\n- Looking for a {} position\n- Previous experience in similar roles",
    years_experience,
    key_skills.join(", "),
    job_role.trim()
  )
}

/// First three skills, by position, followed by the soft-skills focus.
pub fn quick_focus_areas(key_skills: &[String]) -> String {
  let top: Vec<&str> = key_skills.iter().take(QUICK_FOCUS_SKILLS).map(String::as_str).collect();
  format!("Technical skills: {}; {}", top.join(", "), SOFT_SKILLS_FOCUS)
}
