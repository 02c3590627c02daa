// mock_interviewer/src/lib.rs

//! Mock interview runner: three LLM-backed stages (interview, evaluation,
//! feedback) chained with `stagechain`.

pub mod config;
pub mod demo;
pub mod errors;
pub mod interviewer;
pub mod pipelines;
pub mod services;

pub use config::AppConfig;
pub use errors::{AppError, Result};
pub use interviewer::{InterviewReport, MockInterviewer, Progress, DEFAULT_FOCUS_AREAS};
pub use services::OpenAiExecutor;
