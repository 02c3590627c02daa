// stagechain/examples/basic_chain.rs

use stagechain::{EchoExecutor, Persona, Pipeline, PipelineError, StageInputs, StageSpec};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), PipelineError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Basic Chain Example ---");

  // 1. Describe the stages, in execution order.
  let outline = StageSpec::new(
    "outline",
    "Outline a talk about {{topic}} for {{audience}}.",
    "Five bullet points.",
  )
  .requires(["topic", "audience"])
  .with_persona(Persona::new("Speaker", "Keep the audience awake", "Gives a lot of talks."));

  let script = StageSpec::new("script", "Turn the outline into a script.", "About 300 words.").depends_on(["outline"]);

  let abstract_ = StageSpec::new("abstract", "Write the conference abstract for {{topic}}.", "Two sentences.")
    .requires(["topic"])
    .depends_on(["outline", "script"]);

  // 2. Build the pipeline. Ordering rules are checked here.
  let mut pipeline = Pipeline::new(vec![outline, script, abstract_])?;

  // 3. Observe progress.
  pipeline.after_each(|event| async move {
    info!(
      "[{}/{}] {} finished ({} chars)",
      event.stage_index + 1,
      event.stage_count,
      event.stage_name,
      event.output().map(|o| o.len()).unwrap_or(0)
    );
    Ok::<(), anyhow::Error>(())
  });

  // 4. Run it against the offline executor.
  let inputs = StageInputs::new()
    .with("topic", "ownership in Rust")
    .with("audience", "backend developers");
  let run = pipeline.run_with_trail(&inputs, &EchoExecutor).await?;

  info!("Run {} produced {} results.", run.run_id(), run.results().len());
  if let Some(last) = run.final_output() {
    println!("{}", last);
  }
  Ok(())
}
