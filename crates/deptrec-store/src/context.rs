//! Store context
//!
//! `StoreContext` is the handle every mapper operation receives. It borrows a
//! connection owned by the caller and decides when writes are committed.

#![allow(clippy::result_large_err)]

use std::fmt;
use std::str::FromStr;

use rusqlite::Connection;
use serde::Deserialize;

use crate::errors::{from_rusqlite, invalid_commit_mode, Result};

/// When writes issued through a [`StoreContext`] become durable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitMode {
    /// Every write commits before the operation returns
    #[default]
    #[serde(alias = "auto")]
    Autocommit,
    /// The first write opens a transaction; the caller ends it with
    /// [`StoreContext::commit`] or [`StoreContext::rollback`]
    #[serde(alias = "manual")]
    Explicit,
}

impl CommitMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitMode::Autocommit => "autocommit",
            CommitMode::Explicit => "explicit",
        }
    }
}

impl fmt::Display for CommitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommitMode {
    type Err = deptrec_core::ExError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "autocommit" | "auto" => Ok(CommitMode::Autocommit),
            "explicit" | "manual" => Ok(CommitMode::Explicit),
            _ => Err(invalid_commit_mode(s)),
        }
    }
}

/// Borrowed connection plus commit policy
pub struct StoreContext<'c> {
    conn: &'c Connection,
    commit_mode: CommitMode,
}

impl<'c> StoreContext<'c> {
    pub fn new(conn: &'c Connection, commit_mode: CommitMode) -> Self {
        Self { conn, commit_mode }
    }

    /// Context that commits after every write
    pub fn autocommit(conn: &'c Connection) -> Self {
        Self::new(conn, CommitMode::Autocommit)
    }

    /// Context that leaves writes pending until [`StoreContext::commit`]
    pub fn explicit(conn: &'c Connection) -> Self {
        Self::new(conn, CommitMode::Explicit)
    }

    pub fn connection(&self) -> &'c Connection {
        self.conn
    }

    pub fn commit_mode(&self) -> CommitMode {
        self.commit_mode
    }

    /// Whether a transaction is currently open on the connection
    pub fn in_transaction(&self) -> bool {
        !self.conn.is_autocommit()
    }

    /// Called before a write statement.
    pub(crate) fn begin_write(&self) -> Result<()> {
        if self.commit_mode == CommitMode::Explicit && !self.in_transaction() {
            tracing::debug!("opening explicit transaction");
            self.conn.execute_batch("BEGIN").map_err(from_rusqlite)?;
        }
        Ok(())
    }

    /// Called after a write statement succeeded.
    pub(crate) fn finish_write(&self) -> Result<()> {
        match self.commit_mode {
            CommitMode::Autocommit => self.commit(),
            CommitMode::Explicit => Ok(()),
        }
    }

    /// Commit the open transaction, if any.
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if SQLite refuses the commit.
    pub fn commit(&self) -> Result<()> {
        if self.in_transaction() {
            tracing::debug!("committing transaction");
            self.conn.execute_batch("COMMIT").map_err(from_rusqlite)?;
        }
        Ok(())
    }

    /// Roll back the open transaction, if any.
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if SQLite refuses the rollback.
    pub fn rollback(&self) -> Result<()> {
        if self.in_transaction() {
            tracing::debug!("rolling back transaction");
            self.conn.execute_batch("ROLLBACK").map_err(from_rusqlite)?;
        }
        Ok(())
    }
}

impl fmt::Debug for StoreContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreContext")
            .field("commit_mode", &self.commit_mode)
            .field("in_transaction", &self.in_transaction())
            .finish()
    }
}
