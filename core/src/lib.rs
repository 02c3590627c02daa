// stagechain/src/lib.rs

//! Stagechain: runs a linear chain of templated prompt stages against a
//! pluggable language-model executor.
//!
//! A pipeline is an ordered list of [`StageSpec`]s. Each stage renders an
//! instruction and an expected-output contract from named inputs, and may
//! declare earlier stages whose outputs it receives, verbatim, as context.
//! Stages run strictly one after another; the first failure ends the run.
//!
//! ```no_run
//! use stagechain::{EchoExecutor, Pipeline, StageInputs, StageSpec};
//!
//! # async fn demo() -> Result<(), stagechain::PipelineError> {
//! let pipeline = Pipeline::new(vec![
//!   StageSpec::new("draft", "Write a haiku about {{topic}}.", "Three lines.").requires(["topic"]),
//!   StageSpec::new("critique", "Critique the haiku.", "One paragraph.").depends_on(["draft"]),
//! ])?;
//! let inputs = StageInputs::new().with("topic", "borrow checking");
//! let critique = pipeline.run(&inputs, &EchoExecutor).await?;
//! # let _ = critique;
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod error;
pub mod executor;
pub mod pipeline;

// --- Re-exports for the Public API ---

pub use crate::core::context_data::ContextData;
pub use crate::core::inputs::StageInputs;
pub use crate::core::run::{PipelineRun, StageResult};
pub use crate::core::stage::{Persona, RenderedStage, StageSpec};

pub use crate::executor::{EchoExecutor, RecordedCall, RecordingExecutor, StageExecutor, StageRequest};

pub use crate::pipeline::definition::Pipeline;
pub use crate::pipeline::hooks::{StageEvent, StageHook};

pub use crate::error::{ChainResult, ExecutorError, PipelineError};
