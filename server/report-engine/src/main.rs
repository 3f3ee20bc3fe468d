//! Binary entrypoint: read one JSON blob from stdin, write one JSON object to stdout.
//!
//! Usage:
//!   report-engine [generate_report|generate_lessons] < input.json
//!
//! Malformed input never aborts the run; it degrades to default values.

use std::io::{self, Read, Write};

use chrono::Local;
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use report_engine::{config, output, Action, Engine, EngineError};

#[derive(Parser, Debug)]
#[command(
  name = "report-engine",
  version,
  about = "Generate status and lessons-learned reports from hospital KPI JSON on stdin."
)]
struct Cli {
  /// generate_report (default) or generate_lessons.
  action: Option<String>,

  /// Extra arguments are accepted and ignored.
  #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
  extra: Vec<String>,
}

fn main() {
  init_tracing();
  let action = parse_action();

  if let Err(e) = run_binary(action) {
    let _ = writeln!(io::stderr(), "report-engine: {}", e);
    std::process::exit(1);
  }
}

fn init_tracing() {
  let filter = EnvFilter::try_new(config::log_filter()).unwrap_or_else(|_| EnvFilter::new("off"));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .init();
}

/// Unknown or unparseable arguments fall back to the status report.
fn parse_action() -> Action {
  match Cli::try_parse() {
    Ok(cli) => cli
      .action
      .as_deref()
      .map(Action::from_str_loose)
      .unwrap_or_default(),
    Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
    Err(e) => {
      tracing::warn!(error = %e, "unrecognized arguments, using default action");
      Action::default()
    }
  }
}

fn run_binary(action: Action) -> Result<(), EngineError> {
  let mut raw = Vec::new();
  if let Err(e) = io::stdin().lock().read_to_end(&mut raw) {
    // Whatever was read still gets processed; worst case it is empty.
    tracing::warn!(error = %e, bytes = raw.len(), "stdin read failed");
  }
  let raw = String::from_utf8_lossy(&raw);

  let today = Local::now().date_naive();
  let result = Engine::with_defaults().process(action, &raw, today);
  output::write_result(&result, io::stdout().lock())?;
  Ok(())
}
