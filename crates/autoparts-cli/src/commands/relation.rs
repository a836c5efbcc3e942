//! Relation command implementation.

use crate::cli::RelationArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use autoparts_analogs::AnalogResolver;
use autoparts_domain::PartId;
use autoparts_store::SqliteStore;

/// Execute the relation command.
pub fn execute_relation(
    args: RelationArgs,
    store: &SqliteStore,
    config: &Config,
    formatter: &Formatter,
) -> Result<String> {
    let (first, second) = (PartId::new(args.first), PartId::new(args.second));
    let resolver = AnalogResolver::new(store, config.search.resolver.clone());
    let relation = resolver.relation_between(first, second)?;

    formatter.format_relation(first, second, relation)
}
