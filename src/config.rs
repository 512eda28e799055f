//! Runtime configuration
//!
//! The database location comes from the `--db` flag, then the `PINCMD_DB`
//! environment variable, then the user's config directory.

use anyhow::Result;
use std::env;
use std::path::PathBuf;

use crate::db::Database;

// Environment variable names
const ENV_DB_PATH: &str = "PINCMD_DB";

/// Default log filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub db_path: PathBuf,
}

impl Config {
    pub fn resolve(cli_db: Option<PathBuf>) -> Result<Self> {
        Self::resolve_with(cli_db, env::var(ENV_DB_PATH).ok(), Database::default_path)
    }

    fn resolve_with(
        cli_db: Option<PathBuf>,
        env_db: Option<String>,
        default_path: impl FnOnce() -> Result<PathBuf>,
    ) -> Result<Self> {
        let db_path = match (cli_db, env_db.filter(|v| !v.trim().is_empty())) {
            (Some(path), _) => path,
            (None, Some(path)) => PathBuf::from(path),
            (None, None) => default_path()?,
        };

        Ok(Self { db_path })
    }
}
