pub mod context_data;
pub mod inputs;
pub mod run;
pub mod stage;
pub(crate) mod template;

// Re-export key types for easier access from other modules (and lib.rs)
pub use context_data::ContextData;
pub use inputs::StageInputs;
pub use run::{PipelineRun, StageResult};
pub use stage::{Persona, RenderedStage, StageSpec};
