//! HTTP server command
//!
//! Resolves configuration, opens the store and runs the album API until
//! Ctrl+C or SIGTERM.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use albumctl_server::db::seed::seed_albums;
use albumctl_server::http::{run_server, AppState, ServerConfig};

use super::{open_store, resolve_config, DatabaseArgs};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:8080)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    #[command(flatten)]
    pub db: DatabaseArgs,

    /// Insert the sample albums before serving
    #[arg(long)]
    pub seed: bool,

    /// Skip creating the albums table on startup
    #[arg(long)]
    pub no_migrate: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = resolve_config(&args.db)?;
    let bind_addr = args.bind.unwrap_or(config.server.bind);
    let migrate = config.database.run_migrations && !args.no_migrate;

    tracing::info!(
        backend = %config.database.backend,
        "Starting albumctl server on {}",
        bind_addr
    );

    let store = open_store(&config.database, migrate).await?;

    if args.seed {
        let report = seed_albums(store.as_ref()).await;
        tracing::info!(
            inserted = report.inserted,
            skipped = report.skipped,
            failed = report.failed,
            "Seeded sample albums"
        );
    }

    let server_config = ServerConfig {
        bind_addr,
        cors_permissive: args.cors_permissive || config.server.cors_permissive,
    };

    run_server(AppState::new(store), server_config)
        .await
        .context("Server error")?;

    Ok(())
}
