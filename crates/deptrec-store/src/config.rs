//! Layered configuration
//!
//! Sources, later ones winning:
//! 1. Built-in defaults
//! 2. An optional TOML file
//! 3. Environment variables with the `DEPTREC__` prefix, e.g.
//!    `DEPTREC__DATABASE__COMMIT_MODE=explicit`

use std::path::Path;

use config::{Config, Environment, File, FileFormat};
use deptrec_core::logging_facility::Profile;
use serde::Deserialize;

use crate::context::CommitMode;
use crate::errors::{config_error, Result};

const DEFAULTS: &str = r#"
[database]
path = "deptrec.db"
commit_mode = "autocommit"
wal = true
busy_timeout_ms = 5000

[logging]
profile = "development"
"#;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// File path, or `:memory:`
    #[serde(default = "default_path")]
    pub path: String,

    #[serde(default)]
    pub commit_mode: CommitMode,

    /// Use WAL journaling for file databases
    #[serde(default = "default_wal")]
    pub wal: bool,

    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub profile: Profile,
}

fn default_path() -> String {
    "deptrec.db".to_string()
}
fn default_wal() -> bool {
    true
}
fn default_busy_timeout_ms() -> u64 {
    5000
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            commit_mode: CommitMode::default(),
            wal: default_wal(),
            busy_timeout_ms: default_busy_timeout_ms(),
        }
    }
}

impl StoreConfig {
    /// Load configuration from defaults, an optional file and the environment
    ///
    /// # Errors
    ///
    /// Returns `Config` if the file is missing or unreadable, or if a value
    /// has the wrong shape.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULTS, FileFormat::Toml));

        if let Some(path) = file {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        }

        builder
            .add_source(
                Environment::with_prefix("DEPTREC")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|cfg| cfg.try_deserialize())
            .map_err(config_error)
    }

    /// Load configuration for tests: defaults plus overrides, no file system
    /// or environment access
    ///
    /// # Errors
    ///
    /// Returns `Config` if an override has the wrong shape.
    pub fn load_for_test(overrides: &[(&str, &str)]) -> Result<Self> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULTS, FileFormat::Toml));

        for (key, value) in overrides {
            builder = builder.set_override(*key, *value).map_err(config_error)?;
        }

        builder
            .build()
            .and_then(|cfg| cfg.try_deserialize())
            .map_err(config_error)
    }
}
