//! SQLite repository implementation
//!
//! Every statement is fixed and parameterized; nothing is assembled at
//! runtime.

#![allow(clippy::result_large_err)]

use deptrec_core::{Department, DepartmentRepository, MapperError};
use rusqlite::{OptionalExtension, Row};

use crate::context::StoreContext;
use crate::errors::{from_rusqlite, Result};

const INSERT_SQL: &str = "INSERT INTO departments (name, location) VALUES (?1, ?2)";
const UPDATE_SQL: &str = "UPDATE departments SET name = ?1, location = ?2 WHERE id = ?3";
const DELETE_SQL: &str = "DELETE FROM departments WHERE id = ?1";
const SELECT_ALL_SQL: &str = "SELECT * FROM departments";
const SELECT_BY_ID_SQL: &str = "SELECT * FROM departments WHERE id = ?1";
const SELECT_BY_NAME_SQL: &str = "SELECT * FROM departments WHERE name = ?1";

/// SQLite repository for departments
pub struct SqliteDepartmentRepo;

impl SqliteDepartmentRepo {
    /// Convert a `(id, name, location)` row into a [`Department`]
    ///
    /// The schema does not forbid NULL text columns; they read as empty
    /// strings so one such row cannot fail a whole listing.
    pub fn instance_from_db(row: &Row<'_>) -> rusqlite::Result<Department> {
        let name: Option<String> = row.get(1)?;
        let location: Option<String> = row.get(2)?;
        Ok(Department::from_row((
            row.get(0)?,
            name.unwrap_or_default(),
            location.unwrap_or_default(),
        )))
    }
}

impl DepartmentRepository for SqliteDepartmentRepo {
    type Store<'s> = StoreContext<'s>;

    fn save(ctx: &StoreContext<'_>, department: &mut Department) -> Result<()> {
        ctx.begin_write()?;
        let conn = ctx.connection();

        match department.id {
            None => {
                conn.execute(
                    INSERT_SQL,
                    rusqlite::params![department.name, department.location],
                )
                .map_err(from_rusqlite)?;

                let id = conn.last_insert_rowid();
                tracing::debug!(department_id = id, "inserted department row");
                department.id = Some(id);
            }
            Some(id) => {
                let changed = conn
                    .execute(
                        UPDATE_SQL,
                        rusqlite::params![department.name, department.location, id],
                    )
                    .map_err(from_rusqlite)?;

                tracing::debug!(department_id = id, rows = changed, "updated department row");
            }
        }

        ctx.finish_write()
    }

    fn delete(ctx: &StoreContext<'_>, department: &mut Department) -> Result<()> {
        let id = department
            .id
            .ok_or(MapperError::NotPersisted { op: "delete" })?;

        ctx.begin_write()?;
        let affected = ctx
            .connection()
            .execute(DELETE_SQL, [id])
            .map_err(from_rusqlite)?;

        // Nothing was written; a caller-owned transaction is left as is
        if affected == 0 {
            return Err(MapperError::RowNotFound { id }.into());
        }

        ctx.finish_write()?;
        tracing::debug!(department_id = id, "deleted department row");

        department.id = None;
        Ok(())
    }

    fn get_all(ctx: &StoreContext<'_>) -> Result<Vec<Department>> {
        let mut stmt = ctx
            .connection()
            .prepare(SELECT_ALL_SQL)
            .map_err(from_rusqlite)?;

        let departments = stmt
            .query_map([], Self::instance_from_db)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        tracing::debug!(row_count = departments.len(), "loaded all departments");
        Ok(departments)
    }

    fn find_by_id(ctx: &StoreContext<'_>, id: i64) -> Result<Option<Department>> {
        ctx.connection()
            .query_row(SELECT_BY_ID_SQL, [id], Self::instance_from_db)
            .optional()
            .map_err(from_rusqlite)
    }

    fn find_by_name(ctx: &StoreContext<'_>, name: &str) -> Result<Option<Department>> {
        // query_row keeps the first row and ignores the rest
        ctx.connection()
            .query_row(SELECT_BY_NAME_SQL, [name], Self::instance_from_db)
            .optional()
            .map_err(from_rusqlite)
    }
}
