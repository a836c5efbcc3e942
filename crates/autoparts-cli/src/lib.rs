//! Autoparts CLI library.
//!
//! This library provides the core functionality for the autoparts command-line interface,
//! including configuration management, command execution, and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;

use autoparts_store::SqliteStore;
use std::path::Path;

/// Open the catalog database for the commands.
///
/// Unlike `SqliteStore::new`, a missing file is an error instead of a fresh,
/// empty catalog.
pub fn open_catalog(path: &Path) -> Result<SqliteStore> {
    if path != Path::new(":memory:") && !path.exists() {
        return Err(CliError::Config(format!(
            "Database {} does not exist",
            path.display()
        )));
    }
    tracing::debug!(path = %path.display(), "opening catalog");
    Ok(SqliteStore::new(path)?)
}

/// Run one parsed command against a catalog and return its output.
pub fn run_command(command: Command, store: &SqliteStore, config: &Config, formatter: &Formatter) -> Result<String> {
    match command {
        Command::Search(args) => commands::execute_search(args, store, config, formatter),
        Command::Analogs(args) => commands::execute_analogs(args, store, config, formatter),
        Command::Relation(args) => commands::execute_relation(args, store, config, formatter),
        Command::Suggest(args) => commands::execute_suggest(args, store, config, formatter),
        Command::Groups => commands::execute_groups(store, config, formatter),
    }
}
