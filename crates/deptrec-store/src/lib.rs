//! deptrec store - SQLite persistence for departments
//!
//! Provides:
//! - `StoreContext`, the explicit store handle with its commit mode
//! - `SqliteDepartmentSchema` / `SqliteDepartmentRepo`, the rusqlite mapper
//! - Connection helpers and layered configuration

pub mod config;
pub mod context;
pub mod db;
pub mod errors;
pub mod repo;
pub mod schema;

// Re-export key types
pub use config::StoreConfig;
pub use context::{CommitMode, StoreContext};
pub use errors::Result;
pub use repo::SqliteDepartmentRepo;
pub use schema::SqliteDepartmentSchema;
