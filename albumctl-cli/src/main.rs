//! albumctl CLI - album catalogue HTTP service
//!
//! Subcommands:
//! - `serve`: run the JSON API over PostgreSQL or the in-memory store
//! - `migrate`: create the albums table
//! - `seed`: insert the sample albums
//! - `config`: inspect the resolved configuration

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "albumctl",
    author,
    version,
    about = "Album catalogue service with a paginated JSON API",
    long_about = "Serve, migrate and seed an album catalogue stored in PostgreSQL \
                  (or in memory for local experiments)."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces over OTLP (requires the telemetry feature)
    #[arg(long, global = true)]
    otel: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create the albums table if it is missing
    Migrate(commands::migrate::MigrateArgs),
    /// Insert the sample albums, skipping ids that already exist
    Seed(commands::seed::SeedArgs),
    /// Inspect albumctl configuration (show, path)
    Config(commands::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; values may come from the real environment.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    if let Err(e) = tracing_setup::init(&TracingConfig {
        debug: cli.debug,
        otel: cli.otel,
    }) {
        eprintln!("warning: logging disabled: {e:#}");
    }

    let result = match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await,
        Commands::Migrate(args) => commands::run_migrate(args).await,
        Commands::Seed(args) => commands::run_seed(args).await,
        Commands::Config(args) => commands::run_config(args),
    };

    tracing_setup::shutdown_otel();
    result
}
