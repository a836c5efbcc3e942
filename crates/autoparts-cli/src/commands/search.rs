//! Search command implementation.

use crate::cli::SearchArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use autoparts_search::{SearchService, Viewer};
use autoparts_store::SqliteStore;

/// Execute the search command.
pub fn execute_search(
    args: SearchArgs,
    store: &SqliteStore,
    config: &Config,
    formatter: &Formatter,
) -> Result<String> {
    let viewer = Viewer::try_from(args.pricing)?;
    let service = SearchService::new(store, store, config.search.clone());
    let results = service.search(&args.query, &viewer)?;

    formatter.format_results(&results)
}
