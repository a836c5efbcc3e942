//! Groups command implementation.

use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use autoparts_analogs::AnalogResolver;
use autoparts_store::SqliteStore;

/// Execute the groups command.
pub fn execute_groups(store: &SqliteStore, config: &Config, formatter: &Formatter) -> Result<String> {
    let resolver = AnalogResolver::new(store, config.search.resolver.clone());
    let groups = resolver.groups()?;

    formatter.format_groups(&groups)
}
