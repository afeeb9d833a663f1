//! Table commands
//!
//! Usage: deptrec table <create|drop>

use clap::{Args, Subcommand};
use deptrec_core::{DepartmentSchema, ExError};
use deptrec_store::{SqliteDepartmentSchema, StoreContext};

use super::with_boundary;

#[derive(Debug, Args)]
pub struct TableArgs {
    #[command(subcommand)]
    pub command: TableCommand,
}

#[derive(Debug, Subcommand)]
pub enum TableCommand {
    /// Create the departments table if it does not exist
    Create,
    /// Drop the departments table if it exists
    Drop,
}

/// Execute table command
pub fn execute(args: TableArgs, ctx: &StoreContext<'_>) -> Result<(), ExError> {
    match args.command {
        TableCommand::Create => {
            with_boundary("table_create", || SqliteDepartmentSchema::create_table(ctx))?;
            println!("Table departments ready");
        }
        TableCommand::Drop => {
            with_boundary("table_drop", || SqliteDepartmentSchema::drop_table(ctx))?;
            println!("Table departments dropped");
        }
    }
    Ok(())
}
