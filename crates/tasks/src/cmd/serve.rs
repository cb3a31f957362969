//! Serve command - Run the Tasks HTTP server

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use tasks_api::{AppState, RouterOptions, build_router_with_options};
use tasks_auth::{AuthService, StoreCredentials, TokenConfig, TokenService};
use tasks_config::Config;
use tasks_store::Database;

/// Serve command arguments
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Path to configuration file (defaults to configs/config.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(skip)]
    pub jwt_secret: Option<String>,
}

/// Run the serve command
pub async fn run(args: ServeArgs) -> Result<()> {
    let config_path = args
        .config
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(default)".to_string());

    info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %config_path,
        "Tasks starting"
    );

    let mut config = load_config(args.config)?;
    if let Some(secret) = args.jwt_secret {
        config = config
            .with_jwt_secret(secret)
            .context("invalid JWT secret")?;
    }

    if let Err(e) = run_server(config).await {
        error!(error = %e, "server error");
        return Err(e);
    }

    info!("Tasks shutdown complete");
    Ok(())
}

/// Load the explicit config file, else the first default path that exists,
/// else built-in defaults
fn load_config(path: Option<PathBuf>) -> Result<Config> {
    if let Some(path) = path {
        // User explicitly provided config path - must exist
        if !path.exists() {
            anyhow::bail!("config file not found: {}", path.display());
        }
        return Config::from_file(&path).context("failed to load configuration");
    }

    let default_paths = [
        PathBuf::from("configs/config.toml"),
        PathBuf::from("config.toml"),
    ];

    for path in &default_paths {
        if path.exists() {
            info!(config = %path.display(), "using config file");
            return Config::from_file(path).context("failed to load configuration");
        }
    }

    info!("no config file found, using defaults");
    Ok(Config::default())
}

async fn run_server(config: Config) -> Result<()> {
    let secret = config
        .auth
        .require_secret()
        .with_context(|| format!("set {} or auth.jwt_secret", tasks_config::JWT_SECRET_ENV))?;

    let mut token_config = TokenConfig::new(secret.to_vec()).with_ttl(config.auth.token_ttl);
    token_config = match config.auth.issuer() {
        Some(issuer) => token_config.with_issuer(issuer),
        None => token_config.without_issuer(),
    };
    let tokens = TokenService::new(token_config).context("failed to create token service")?;

    let db = Database::open(&config.server.db_path)
        .await
        .context("failed to open database")?;

    let auth = AuthService::new(std::sync::Arc::new(StoreCredentials::new(db.users())), tokens);
    let state = AppState::new(&db, auth);

    let router_options = RouterOptions {
        audit_logging: config.server.audit_logging,
    };

    let app = build_router_with_options(state, router_options)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!(
        addr = %addr,
        db_path = %config.server.db_path.display(),
        audit_logging = config.server.audit_logging,
        "API server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    db.close().await;
    Ok(())
}

/// Resolves on Ctrl-C
async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
