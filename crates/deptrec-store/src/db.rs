//! Database connection management
//!
//! Provides utilities for opening and configuring SQLite connections. The
//! mapper itself never opens or closes a connection; these helpers are for
//! the application that owns one.

#![allow(clippy::result_large_err)]

use std::path::Path;
use std::time::Duration;

use rusqlite::Connection;

use crate::config::DatabaseConfig;
use crate::errors::{from_rusqlite, Result};

const IN_MEMORY_PATH: &str = ":memory:";

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(from_rusqlite)
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(from_rusqlite)
}

/// Open the database named by `config` and apply its settings
pub fn open_configured(config: &DatabaseConfig) -> Result<Connection> {
    let conn = if config.path == IN_MEMORY_PATH {
        open_in_memory()?
    } else {
        open(&config.path)?
    };
    configure(&conn, config)?;
    Ok(conn)
}

/// Configure a connection from `config`
pub fn configure(conn: &Connection, config: &DatabaseConfig) -> Result<()> {
    conn.pragma_update(None, "foreign_keys", true)
        .map_err(from_rusqlite)?;

    conn.busy_timeout(Duration::from_millis(config.busy_timeout_ms))
        .map_err(from_rusqlite)?;

    // WAL does not apply to in-memory databases
    if config.wal && config.path != IN_MEMORY_PATH {
        let mode: String = conn
            .pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))
            .map_err(from_rusqlite)?;
        tracing::debug!(journal_mode = %mode, "journal mode set");
    }

    Ok(())
}
