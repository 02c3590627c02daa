// stagechain/src/executor/echo.rs

use super::{StageExecutor, StageRequest};
use crate::error::ExecutorError;
use async_trait::async_trait;

/// Offline executor that answers with a short digest of the request.
///
/// Output depends only on the request, so two runs with the same inputs give
/// the same trail. Handy for dry runs and for checking prompt wiring.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoExecutor;

#[async_trait]
impl StageExecutor for EchoExecutor {
  async fn execute(&self, request: StageRequest<'_>) -> Result<String, ExecutorError> {
    let headline = request
      .instruction
      .lines()
      .map(str::trim)
      .find(|l| !l.is_empty())
      .unwrap_or("(empty instruction)");
    let context = if request.context.is_empty() {
      "none".to_string()
    } else {
      request
        .context
        .iter()
        .map(|r| r.stage_name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
    };

    let mut out = format!("## {}\n", request.stage_name);
    if let Some(persona) = request.persona {
      out.push_str(&format!("persona: {}\n", persona.role));
    }
    out.push_str(&format!("instruction: {}\n", headline));
    out.push_str(&format!(
      "contract: {} line(s)\ncontext: {}\n",
      request.output_contract.lines().count(),
      context
    ));
    Ok(out)
  }
}
