// mock_interviewer/src/main.rs

use clap::{Args, Parser, Subcommand};
use mock_interviewer::config::{AppConfig, API_KEY_VAR};
use mock_interviewer::{demo, AppError, InterviewReport, MockInterviewer, OpenAiExecutor, Progress};
use stagechain::{EchoExecutor, StageExecutor};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "mock-interviewer", version, about = "Run an AI mock interview: questions, evaluation, feedback")]
struct Cli {
  /// Use an offline echo backend instead of the API (no key needed).
  #[arg(long, global = true)]
  dry_run: bool,

  /// Print the interview and evaluation as well as the feedback.
  #[arg(long, global = true)]
  full_report: bool,

  /// Write the report to this file instead of stdout.
  #[arg(long, short, global = true, value_name = "FILE")]
  output: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
  /// Interview a candidate described in free text.
  Run(RunArgs),
  /// Interview a candidate from years of experience and a skill list.
  Quick(QuickArgs),
  /// Interview the built-in sample candidate.
  Demo,
}

#[derive(Debug, Args)]
struct RunArgs {
  #[arg(long)]
  role: String,

  #[arg(long, conflicts_with = "background_file", required_unless_present = "background_file")]
  background: Option<String>,

  #[arg(long, value_name = "FILE")]
  background_file: Option<PathBuf>,

  #[arg(long)]
  focus: Option<String>,
}

#[derive(Debug, Args)]
struct QuickArgs {
  #[arg(long)]
  role: String,

  #[arg(long)]
  years: u32,

  /// Comma-separated, most important first.
  #[arg(long, value_delimiter = ',')]
  skills: Vec<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();

  let executor: Arc<dyn StageExecutor> = if cli.dry_run {
    tracing::info!("Dry run: using the offline echo backend.");
    Arc::new(EchoExecutor)
  } else {
    let config = match AppConfig::from_env() {
      Ok(config) => config,
      Err(e) => {
        eprintln!("Error: {}", e);
        if matches!(e, AppError::MissingApiKey { .. }) {
          eprintln!("Set {} in your environment or in a .env file, or pass --dry-run.", API_KEY_VAR);
        }
        return ExitCode::FAILURE;
      }
    };
    match OpenAiExecutor::new(&config) {
      Ok(executor) => Arc::new(executor),
      Err(e) => {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
      }
    }
  };

  match run(cli, executor).await {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      tracing::error!(error = %e, "Interview failed.");
      eprintln!("Error: {}", e);
      ExitCode::FAILURE
    }
  }
}

async fn run(cli: Cli, executor: Arc<dyn StageExecutor>) -> mock_interviewer::Result<()> {
  let interviewer = MockInterviewer::new(executor)?.with_progress(print_progress);

  let report = match &cli.command {
    Command::Run(args) => {
      let background = match (&args.background, &args.background_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => {
          tracing::debug!(path = %path.display(), "Reading candidate background.");
          std::fs::read_to_string(path)?
        }
        (None, None) => {
          return Err(AppError::Validation(
            "either --background or --background-file is required".to_string(),
          ))
        }
      };
      eprintln!("Starting mock interview for: {}", args.role);
      interviewer
        .run_report(&args.role, &background, args.focus.as_deref())
        .await?
    }
    Command::Quick(args) => {
      eprintln!("Starting quick mock interview for: {}", args.role);
      interviewer.run_quick_report(&args.role, args.years, &args.skills).await?
    }
    Command::Demo => {
      eprintln!("Starting mock interview for: {}", demo::JOB_ROLE);
      interviewer
        .run_report(demo::JOB_ROLE, demo::CANDIDATE_BACKGROUND, Some(demo::FOCUS_AREAS))
        .await?
    }
  };

  let text = render(&report, cli.full_report);
  match &cli.output {
    Some(path) => {
      std::fs::write(path, &text)?;
      eprintln!("Report written to {}", path.display());
    }
    None => print!("{}", text),
  }
  Ok(())
}

fn render(report: &InterviewReport, full: bool) -> String {
  if full {
    report.to_string()
  } else {
    format!("{}\n", report.feedback().trim_end())
  }
}

fn print_progress(progress: Progress) {
  match progress {
    Progress::Started { stage, index, count } => {
      eprintln!("[{}/{}] {}: running...", index + 1, count, stage);
    }
    Progress::Finished {
      stage,
      index,
      count,
      output_chars,
    } => {
      eprintln!("[{}/{}] {}: done ({} chars)", index + 1, count, stage, output_chars);
    }
  }
}
