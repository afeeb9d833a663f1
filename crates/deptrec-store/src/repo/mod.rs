//! Repository layer mapping departments to SQLite rows

pub mod sqlite_repo;

pub use sqlite_repo::SqliteDepartmentRepo;
