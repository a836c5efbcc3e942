//! Suggest command implementation.

use crate::cli::SuggestArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use autoparts_search::SearchService;
use autoparts_store::SqliteStore;

/// Execute the suggest command.
pub fn execute_suggest(
    args: SuggestArgs,
    store: &SqliteStore,
    config: &Config,
    formatter: &Formatter,
) -> Result<String> {
    let service = SearchService::new(store, store, config.search.clone());
    let suggestions = if args.part_number {
        service.part_number_suggestions(&args.query)?
    } else {
        service.text_suggestions(&args.query)?
    };

    formatter.format_suggestions(&suggestions)
}
