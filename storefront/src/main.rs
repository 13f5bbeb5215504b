// storefront/src/main.rs

use clap::Parser;
use std::process::ExitCode;
use storefront::cli::{self, Cli};
use storefront::{AppConfig, AppError, AppState};
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing
use tracing_subscriber::EnvFilter;

fn init_tracing(json_logs: bool) {
  // RUST_LOG overrides the default level. Logs go to stderr; stdout is for command output.
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
  let builder = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_span_events(FmtSpan::CLOSE)
    .with_writer(std::io::stderr);
  if json_logs {
    builder.json().init();
  } else {
    builder.init();
  }
}

async fn run(cli: Cli) -> Result<serde_json::Value, AppError> {
  let config = AppConfig::from_env()?;
  let state = AppState::from_config(config)?;
  cli::run(cli.command, &state).await
}

#[tokio::main]
async fn main() -> ExitCode {
  let cli = Cli::parse();
  init_tracing(cli.json_logs);

  match run(cli).await {
    Ok(output) => match serde_json::to_string_pretty(&output) {
      Ok(text) => {
        println!("{}", text);
        ExitCode::SUCCESS
      }
      Err(e) => {
        tracing::error!(error = %e, "Failed to render command output.");
        ExitCode::FAILURE
      }
    },
    Err(e) => {
      tracing::error!(error = %e, "Command failed.");
      eprintln!("error: {}", e);
      ExitCode::from(e.exit_code())
    }
  }
}
