//! deptrec CLI
//!
//! Command-line interface for the department record mapper

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use deptrec_core::logging_facility::{self, Profile};
use deptrec_core::ExError;
use deptrec_core_types::RequestId;
use deptrec_store::{db, CommitMode, StoreConfig, StoreContext};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "deptrec")]
#[command(about = "deptrec - Department records over SQLite", long_about = None)]
struct Cli {
    /// SQLite database file (`:memory:` for a throwaway database)
    #[arg(long, global = true, env = "DEPTREC_DB")]
    db: Option<String>,

    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// autocommit: commit after every write; explicit: commit once the command succeeds
    #[arg(long, global = true)]
    commit_mode: Option<CommitMode>,

    /// development, production or test
    #[arg(long, global = true)]
    log_profile: Option<Profile>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Departments table lifecycle
    Table(commands::table::TableArgs),
    /// Department records
    Dept(commands::dept::DeptArgs),
}

fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), ExError> {
    let mut config = StoreConfig::load(cli.config.as_deref())?;
    if let Some(path) = cli.db {
        config.database.path = path;
    }
    if let Some(mode) = cli.commit_mode {
        config.database.commit_mode = mode;
    }
    if let Some(profile) = cli.log_profile {
        config.logging.profile = profile;
    }

    logging_facility::init(config.logging.profile);

    let request_id = RequestId::new();
    let span = tracing::info_span!("deptrec", request_id = %request_id);
    let _guard = span.enter();

    execute(cli.command, cli.json, &config)
        .map_err(|e| e.with_request_id(request_id.clone()))
}

fn execute(command: Commands, json: bool, config: &StoreConfig) -> Result<(), ExError> {
    let conn = db::open_configured(&config.database)?;
    let ctx = StoreContext::new(&conn, config.database.commit_mode);

    let result = match command {
        Commands::Table(args) => commands::table::execute(args, &ctx),
        Commands::Dept(args) => commands::dept::execute(args, &ctx, json),
    };

    // One invocation is one unit of work in explicit mode
    match result {
        Ok(()) => ctx.commit(),
        Err(e) => {
            ctx.rollback()?;
            Err(e)
        }
    }
}
