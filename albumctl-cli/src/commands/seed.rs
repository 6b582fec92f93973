//! Sample data command

use anyhow::{bail, Result};
use clap::Parser;

use albumctl_core::StorageBackend;
use albumctl_server::db::seed::seed_albums;

use super::{connect_postgres, resolve_config, DatabaseArgs};

#[derive(Parser, Debug)]
pub struct SeedArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,

    /// Skip creating the albums table first
    #[arg(long)]
    pub no_migrate: bool,
}

pub async fn run_seed(args: SeedArgs) -> Result<()> {
    let config = resolve_config(&args.db)?;
    if config.database.backend == StorageBackend::Memory {
        bail!("seed needs the postgres backend; use `serve --backend memory --seed` instead");
    }

    let migrate = config.database.run_migrations && !args.no_migrate;
    let repo = connect_postgres(&config.database, migrate).await?;
    let report = seed_albums(&repo).await;

    println!(
        "Seeded albums: {} inserted, {} already present, {} failed",
        report.inserted, report.skipped, report.failed
    );

    if report.failed > 0 {
        bail!("{} sample albums could not be inserted", report.failed);
    }
    Ok(())
}
