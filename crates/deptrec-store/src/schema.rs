//! Departments table lifecycle

#![allow(clippy::result_large_err)]

use deptrec_core::DepartmentSchema;

use crate::context::StoreContext;
use crate::errors::{from_rusqlite, Result};

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS departments (
    id INTEGER PRIMARY KEY,
    name TEXT,
    location TEXT
)";

const DROP_TABLE_SQL: &str = "DROP TABLE IF EXISTS departments";

/// SQLite schema management for the departments table
pub struct SqliteDepartmentSchema;

impl SqliteDepartmentSchema {
    /// Whether the departments table currently exists
    pub fn table_exists(ctx: &StoreContext<'_>) -> Result<bool> {
        ctx.connection()
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'departments'",
                [],
                |row| row.get::<_, i64>(0),
            )
            .map(|count| count > 0)
            .map_err(from_rusqlite)
    }
}

impl DepartmentSchema for SqliteDepartmentSchema {
    type Store<'s> = StoreContext<'s>;

    fn create_table(ctx: &StoreContext<'_>) -> Result<()> {
        ctx.begin_write()?;
        ctx.connection()
            .execute(CREATE_TABLE_SQL, [])
            .map_err(from_rusqlite)?;
        tracing::debug!("departments table ensured");
        ctx.finish_write()
    }

    fn drop_table(ctx: &StoreContext<'_>) -> Result<()> {
        ctx.begin_write()?;
        ctx.connection()
            .execute(DROP_TABLE_SQL, [])
            .map_err(from_rusqlite)?;
        tracing::debug!("departments table dropped");
        ctx.finish_write()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_create_then_drop() {
        let conn = Connection::open_in_memory().unwrap();
        let ctx = StoreContext::autocommit(&conn);

        assert!(!SqliteDepartmentSchema::table_exists(&ctx).unwrap());
        SqliteDepartmentSchema::create_table(&ctx).unwrap();
        assert!(SqliteDepartmentSchema::table_exists(&ctx).unwrap());
        SqliteDepartmentSchema::drop_table(&ctx).unwrap();
        assert!(!SqliteDepartmentSchema::table_exists(&ctx).unwrap());
    }

    #[test]
    fn test_drop_missing_table_is_ok() {
        let conn = Connection::open_in_memory().unwrap();
        let ctx = StoreContext::autocommit(&conn);

        SqliteDepartmentSchema::drop_table(&ctx).unwrap();
        SqliteDepartmentSchema::drop_table(&ctx).unwrap();
    }

    #[test]
    fn test_columns() {
        let conn = Connection::open_in_memory().unwrap();
        let ctx = StoreContext::autocommit(&conn);
        SqliteDepartmentSchema::create_table(&ctx).unwrap();

        let mut stmt = conn.prepare("PRAGMA table_info(departments)").unwrap();
        let columns: Vec<(String, String, i64)> = stmt
            .query_map([], |row| Ok((row.get(1)?, row.get(2)?, row.get(5)?)))
            .unwrap()
            .collect::<std::result::Result<_, _>>()
            .unwrap();

        assert_eq!(
            columns,
            vec![
                ("id".to_string(), "INTEGER".to_string(), 1),
                ("name".to_string(), "TEXT".to_string(), 0),
                ("location".to_string(), "TEXT".to_string(), 0),
            ]
        );
    }
}
