//! Department commands
//!
//! Usage: deptrec dept <create|list|get|find|update|delete> ...

use clap::{Args, Subcommand};
use deptrec_core::{Department, DepartmentRepository, ExError, ExErrorKind};
use deptrec_store::{SqliteDepartmentRepo, StoreContext};

use super::with_boundary;

#[derive(Debug, Args)]
pub struct DeptArgs {
    #[command(subcommand)]
    pub command: DeptCommand,
}

#[derive(Debug, Subcommand)]
pub enum DeptCommand {
    /// Create and persist a department
    Create {
        name: String,
        location: String,
    },
    /// List every department
    List,
    /// Show the department with this id
    Get { id: i64 },
    /// Show the first department with this exact name
    Find { name: String },
    /// Change a persisted department
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        location: Option<String>,
    },
    /// Delete a persisted department
    Delete { id: i64 },
}

/// Execute dept command
pub fn execute(args: DeptArgs, ctx: &StoreContext<'_>, json: bool) -> Result<(), ExError> {
    match args.command {
        DeptCommand::Create { name, location } => {
            let dept = with_boundary("dept_create", || {
                SqliteDepartmentRepo::create(ctx, &name, &location)
            })?;
            print_department(&dept, json)
        }
        DeptCommand::List => {
            let all = with_boundary("dept_list", || SqliteDepartmentRepo::get_all(ctx))?;
            if json {
                println!("{}", to_json(&all)?);
            } else {
                for dept in &all {
                    println!("{}", dept);
                }
            }
            Ok(())
        }
        DeptCommand::Get { id } => {
            let found = with_boundary("dept_get", || SqliteDepartmentRepo::find_by_id(ctx, id))?;
            print_lookup(found.as_ref(), json, || format!("No department with id {}", id))
        }
        DeptCommand::Find { name } => {
            let found = with_boundary("dept_find", || {
                SqliteDepartmentRepo::find_by_name(ctx, &name)
            })?;
            print_lookup(found.as_ref(), json, || format!("No department named {}", name))
        }
        DeptCommand::Update { id, name, location } => {
            let dept = with_boundary("dept_update", || {
                let mut dept = load(ctx, id, "update")?;
                if let Some(name) = name {
                    dept.name = name;
                }
                if let Some(location) = location {
                    dept.location = location;
                }
                SqliteDepartmentRepo::update(ctx, &mut dept)?;
                Ok(dept)
            })?;
            print_department(&dept, json)
        }
        DeptCommand::Delete { id } => {
            with_boundary("dept_delete", || {
                let mut dept = load(ctx, id, "delete")?;
                SqliteDepartmentRepo::delete(ctx, &mut dept)
            })?;
            if json {
                println!("{}", serde_json::json!({ "deleted": id }));
            } else {
                println!("Deleted department {}", id);
            }
            Ok(())
        }
    }
}

/// Load a department the command is about to change; absence is an error here
fn load(ctx: &StoreContext<'_>, id: i64, op: &str) -> Result<Department, ExError> {
    SqliteDepartmentRepo::find_by_id(ctx, id)?.ok_or_else(|| {
        ExError::new(ExErrorKind::NotFound)
            .with_op(op)
            .with_entity_id(id.to_string())
            .with_message(format!("No department found with id {}", id))
    })
}

fn print_department(dept: &Department, json: bool) -> Result<(), ExError> {
    if json {
        println!("{}", to_json(dept)?);
    } else {
        println!("{}", dept);
    }
    Ok(())
}

fn print_lookup(
    found: Option<&Department>,
    json: bool,
    absent: impl FnOnce() -> String,
) -> Result<(), ExError> {
    match (found, json) {
        (Some(dept), _) => print_department(dept, json),
        (None, true) => {
            println!("null");
            Ok(())
        }
        (None, false) => {
            println!("{}", absent());
            Ok(())
        }
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, ExError> {
    serde_json::to_string(value).map_err(|e| {
        ExError::new(ExErrorKind::Serialization)
            .with_op("render_json")
            .with_message(e.to_string())
    })
}
