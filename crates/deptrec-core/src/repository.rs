//! Mapper capability traits
//!
//! Schema management and per-instance persistence are separate capabilities.
//! Both receive the store handle as an explicit argument, so the caller
//! decides which connection (and which commit mode) an operation runs
//! against.

use crate::errors::{MapperError, Result};
use crate::model::Department;

/// Schema lifecycle for the departments table
pub trait DepartmentSchema {
    /// The handle statements are issued against
    type Store<'s>;

    /// Ensure the table exists. A no-op when it is already there.
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the store rejects the statement.
    fn create_table(store: &Self::Store<'_>) -> Result<()>;

    /// Remove the table if it exists.
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the store rejects the statement.
    fn drop_table(store: &Self::Store<'_>) -> Result<()>;
}

/// Instance lifecycle and retrieval for departments
pub trait DepartmentRepository {
    /// The handle statements are issued against
    type Store<'s>;

    /// Insert the department when it has no id (assigning one), otherwise
    /// overwrite the row with its id.
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the store rejects the statement.
    fn save(store: &Self::Store<'_>, department: &mut Department) -> Result<()>;

    /// Build an unsaved department and save it.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`DepartmentRepository::save`].
    fn create(store: &Self::Store<'_>, name: &str, location: &str) -> Result<Department> {
        let mut department = Department::new(name, location);
        Self::save(store, &mut department)?;
        Ok(department)
    }

    /// Save a department that is already persisted.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the department has no id, otherwise
    /// propagates any error from [`DepartmentRepository::save`].
    fn update(store: &Self::Store<'_>, department: &mut Department) -> Result<()> {
        if department.id.is_none() {
            return Err(MapperError::NotPersisted { op: "update" }.into());
        }
        Self::save(store, department)
    }

    /// Delete the department's row and detach it (id reset to None).
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the department has no id, `NotFound` if no
    /// row had its id, or `Persistence` if the store rejects the statement.
    fn delete(store: &Self::Store<'_>, department: &mut Department) -> Result<()>;

    /// Every row, in whatever order the store yields them.
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the store rejects the query.
    fn get_all(store: &Self::Store<'_>) -> Result<Vec<Department>>;

    /// The row with this id, or `None`.
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the store rejects the query.
    fn find_by_id(store: &Self::Store<'_>, id: i64) -> Result<Option<Department>>;

    /// The first row the store yields with this exact name, or `None`.
    ///
    /// When several rows share the name, which one comes back is up to the
    /// store.
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the store rejects the query.
    fn find_by_name(store: &Self::Store<'_>, name: &str) -> Result<Option<Department>>;
}
