//! Tasks - Multi-user task list server
//!
//! # Usage
//!
//! ```bash
//! # Run the server (default)
//! TASKS_JWT_SECRET=... tasks
//! tasks --config configs/config.toml
//! tasks serve --log-level debug
//! ```

mod cmd;

use std::path::Path;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tasks_config::{Config, LogFormat};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Tasks - Multi-user task list server
#[derive(Parser, Debug)]
#[command(name = "tasks")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Path to configuration file (error if specified but not found)
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Log level (trace, debug, info, warn, error). Overrides config file.
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Token signing secret. Overrides `auth.jwt_secret` in the config file.
    #[arg(long, global = true, env = tasks_config::JWT_SECRET_ENV, hide_env_values = true)]
    jwt_secret: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the server
    Serve(cmd::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut args = match cli.command {
        Some(Command::Serve(args)) => args,
        // No subcommand = run server
        None => cmd::serve::ServeArgs::default(),
    };

    // Global flags fill in whatever the subcommand left unset
    if args.config.is_none() {
        args.config = cli.config;
    }
    if args.jwt_secret.is_none() {
        args.jwt_secret = cli.jwt_secret;
    }

    let (level, format) = resolve_logging(cli.log_level.as_deref(), args.config.as_deref());
    init_logging(&level, format)?;

    cmd::serve::run(args).await
}

/// Resolve log level and format: CLI flag > config file > default "info"
fn resolve_logging(cli_level: Option<&str>, config_path: Option<&Path>) -> (String, LogFormat) {
    let config = config_path
        .filter(|path| path.exists())
        .and_then(|path| Config::from_file(path).ok());

    let format = config
        .as_ref()
        .map(|c| c.log.format)
        .unwrap_or_default();

    let level = match (cli_level, &config) {
        (Some(level), _) => level.to_string(),
        (None, Some(config)) => config.log.level.as_str().to_string(),
        (None, None) => "info".to_string(),
    };

    (level, format)
}

/// Initialize the tracing subscriber for logging
fn init_logging(level: &str, format: LogFormat) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| anyhow::anyhow!("invalid log level: {}", e))?;

    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Console => registry
            .with(fmt::layer().with_target(true).with_thread_ids(false))
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_target(true).with_current_span(true))
            .init(),
    }

    Ok(())
}
