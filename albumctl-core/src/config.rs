use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Environment variable that points at an alternate config file
pub const CONFIG_PATH_VAR: &str = "ALBUMCTL_CONFIG";

/// Configuration for the album service.
///
/// Resolution order (later wins): defaults, `~/.albumctl/config.toml`,
/// environment, command-line flags (applied by the CLI).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlbumConfig {
    pub server: ServerSection,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub bind: SocketAddr,
    /// Allow any CORS origin instead of localhost only
    pub cors_permissive: bool,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8080)),
            cors_permissive: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub backend: StorageBackend,
    pub url: String,
    pub max_connections: u32,
    /// Seconds to wait for a pooled connection, including the first one
    pub acquire_timeout_secs: u64,
    /// Create the albums table on startup if it is missing
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Postgres,
            url: "postgres://localhost/albumdb".to_string(),
            max_connections: 5,
            acquire_timeout_secs: 10,
            run_migrations: true,
        }
    }
}

impl DatabaseConfig {
    /// Connection URL with the password masked, for logs and `config show`.
    pub fn redacted_url(&self) -> String {
        redact_url(&self.url)
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs.max(1))
    }
}

/// Where albums are stored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Postgres,
    /// Process-local map; contents vanish on exit
    Memory,
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Postgres => f.write_str("postgres"),
            Self::Memory => f.write_str("memory"),
        }
    }
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" | "mem" => Ok(Self::Memory),
            other => Err(format!(
                "unknown storage backend '{other}' (expected postgres or memory)"
            )),
        }
    }
}

impl AlbumConfig {
    /// Load config from the default location and the process environment.
    ///
    /// A missing config file is not an error; defaults are used instead.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        let mut config = if path.exists() {
            Self::load_from(&path)?
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Self::default()
        };

        config.apply_overrides(|key| env::var(key).ok())?;
        Ok(config)
    }

    /// Parse a TOML config file and expand `${VAR}` references.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.database.url = expand_string(&config.database.url, |key| env::var(key).ok());
        Ok(config)
    }

    /// Get config file path (`$ALBUMCTL_CONFIG` or `~/.albumctl/config.toml`)
    pub fn config_path() -> PathBuf {
        if let Ok(path) = env::var(CONFIG_PATH_VAR) {
            return PathBuf::from(path);
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".albumctl")
            .join("config.toml")
    }

    /// Apply `DATABASE_URL` and `ALBUMCTL_BIND` from `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("DATABASE_URL").filter(|u| !u.is_empty()) {
            self.database.url = url;
        }

        if let Some(bind) = lookup("ALBUMCTL_BIND").filter(|b| !b.is_empty()) {
            self.server.bind = bind
                .parse()
                .with_context(|| format!("ALBUMCTL_BIND is not a socket address: {bind}"))?;
        }

        Ok(())
    }

    /// Serialize to pretty TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config to TOML")
    }
}

/// Expand `${VAR}` references; unknown variables expand to nothing.
fn expand_string<F>(s: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut result = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(start) = rest.find("${") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                result.push_str(&lookup(&after[..end]).unwrap_or_default());
                rest = &after[end + 1..];
            }
            None => {
                result.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    result.push_str(rest);
    result
}

fn redact_url(url: &str) -> String {
    let Some(scheme_end) = url.find("://") else {
        return url.to_string();
    };
    let authority_start = scheme_end + 3;
    let Some(at) = url[authority_start..].find('@') else {
        return url.to_string();
    };
    let credentials = &url[authority_start..authority_start + at];
    match credentials.find(':') {
        Some(colon) => format!(
            "{}{}:****{}",
            &url[..authority_start],
            &credentials[..colon],
            &url[authority_start + at..]
        ),
        None => url.to_string(),
    }
}
