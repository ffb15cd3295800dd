use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use trendz_login::cli::{run_login, run_status, CliConfig, ClientArgs, Commands};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
  let args = ClientArgs::parse();

  // Load config: explicit path > auto-detect > defaults
  let source = args.config.clone().map(PathBuf::from).or_else(|| CliConfig::find_in("."));
  let mut config = match &source {
    Some(path) => CliConfig::from_file(path)?,
    None => CliConfig::default(),
  };

  // CLI args override config file
  if let Some(path) = args.session {
    config.session.path = path;
  }
  if let Some(level) = args.log_level {
    config.logging.level = level;
  }

  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.logging.level.clone().into()),
    )
    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    .init();

  match &source {
    Some(path) => tracing::info!("Loaded config from {}", path.display()),
    None => tracing::debug!("No config file found, using defaults"),
  }

  match args.subcommand {
    Some(Commands::Status) => run_status(&config),
    Some(Commands::Login { username, password }) => run_login(&config, username, password).await,
    None => run_login(&config, None, None).await,
  }
}
