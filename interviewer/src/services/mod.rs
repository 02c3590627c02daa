// mock_interviewer/src/services/mod.rs
pub mod openai;

pub use openai::OpenAiExecutor;
