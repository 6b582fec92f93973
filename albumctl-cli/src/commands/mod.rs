//! Command implementations for albumctl CLI

pub mod config;
pub mod migrate;
pub mod seed;
pub mod serve;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;

use albumctl_core::{AlbumConfig, DatabaseConfig, StorageBackend};
use albumctl_server::db::{create_pool_with_options, migrations, AlbumRepo, MemoryAlbumStore};
use albumctl_server::AlbumStore;

pub use config::run_config;
pub use migrate::run_migrate;
pub use seed::run_seed;
pub use serve::run_serve;

/// Database selection shared by every command that touches storage
#[derive(Args, Debug, Clone, Default)]
pub struct DatabaseArgs {
    /// Database URL (overrides config file)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Storage backend: postgres or memory
    #[arg(long, value_name = "BACKEND")]
    pub backend: Option<StorageBackend>,

    /// Maximum pooled connections
    #[arg(long)]
    pub max_connections: Option<u32>,
}

impl DatabaseArgs {
    fn apply(&self, config: &mut DatabaseConfig) {
        if let Some(url) = &self.database_url {
            config.url = url.clone();
        }
        if let Some(backend) = self.backend {
            config.backend = backend;
        }
        if let Some(max) = self.max_connections {
            config.max_connections = max;
        }
    }
}

/// Config file and environment, then command-line flags.
pub(crate) fn resolve_config(db: &DatabaseArgs) -> Result<AlbumConfig> {
    let mut config = AlbumConfig::load()?;
    db.apply(&mut config.database);
    Ok(config)
}

/// Connect, verify with a ping and optionally migrate.
///
/// Any failure here is a startup failure and ends the process.
pub(crate) async fn connect_postgres(config: &DatabaseConfig, migrate: bool) -> Result<AlbumRepo> {
    let url = config.redacted_url();
    tracing::info!(database = %url, "Connecting to PostgreSQL");

    let pool = create_pool_with_options(&config.url, config.max_connections, config.acquire_timeout())
        .await
        .with_context(|| format!("Failed to connect to database at {url}"))?;

    let repo = AlbumRepo::new(pool);
    repo.ping()
        .await
        .with_context(|| format!("Database at {url} did not answer ping"))?;

    if migrate {
        migrations::run(repo.pool())
            .await
            .context("Failed to run album migrations")?;
    }

    Ok(repo)
}

/// Build the configured store.
pub(crate) async fn open_store(config: &DatabaseConfig, migrate: bool) -> Result<Arc<dyn AlbumStore>> {
    match config.backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory album store; data is lost on exit");
            Ok(Arc::new(MemoryAlbumStore::new()))
        }
        StorageBackend::Postgres => Ok(Arc::new(connect_postgres(config, migrate).await?)),
    }
}
