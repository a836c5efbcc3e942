//! Analogs command implementation.

use crate::cli::AnalogsArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use autoparts_domain::PartId;
use autoparts_search::{SearchService, Viewer};
use autoparts_store::SqliteStore;

/// Execute the analogs command.
pub fn execute_analogs(
    args: AnalogsArgs,
    store: &SqliteStore,
    config: &Config,
    formatter: &Formatter,
) -> Result<String> {
    let viewer = Viewer::try_from(args.pricing)?;
    let service = SearchService::new(store, store, config.search.clone());
    let results = service.analogs_of(PartId::new(args.id), &viewer)?;

    formatter.format_results(&results)
}
