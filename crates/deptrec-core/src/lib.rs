//! deptrec core - Department model and mapper contracts
//!
//! This crate provides the backend-neutral half of the record mapper:
//! - The `Department` model and its row mapping
//! - The schema / repository capability traits every backend implements
//! - The structured error facility (`ExError`, `ExErrorKind`, `MapperError`)
//! - The logging facility (profiles, boundary macros, test capture)

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod repository;

#[doc(hidden)]
pub use deptrec_core_types as core_types;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, MapperError, Result};
pub use model::Department;
pub use repository::{DepartmentRepository, DepartmentSchema};
