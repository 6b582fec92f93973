//! Schema migration command

use anyhow::{bail, Result};
use clap::Parser;

use albumctl_core::StorageBackend;

use super::{connect_postgres, resolve_config, DatabaseArgs};

#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let config = resolve_config(&args.db)?;
    if config.database.backend == StorageBackend::Memory {
        bail!("migrate needs the postgres backend; the memory store has no schema");
    }

    connect_postgres(&config.database, true).await?;
    println!("Albums table ready at {}", config.database.redacted_url());
    Ok(())
}
