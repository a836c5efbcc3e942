//! Search merging: primary matches plus their analogs

use crate::error::{Result, SearchError};
use crate::pricing::{PriceFormatter, Viewer};
use crate::query::{classify, clean_part_number, tokenize, QueryKind};
use crate::result::SearchResult;
use crate::suggestions;
use crate::SearchConfig;
use autoparts_analogs::AnalogResolver;
use autoparts_domain::traits::{Availability, Catalog, MatchMode, RelationStore};
use autoparts_domain::{AnalogInfo, Part, PartId};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::fmt::Display;

/// Parts that matched the query itself
#[derive(Debug, Default)]
struct PrimaryMatches {
    /// Shown to the viewer as exact matches, in catalog order
    shown: Vec<Part>,

    /// Used only to discover analogs, never shown
    hidden_seeds: Vec<PartId>,
}

/// An analog candidate with the order in which it was first discovered
#[derive(Debug)]
struct AnalogCandidate {
    discovered: usize,
    info: AnalogInfo,
}

/// Part search with analog expansion
///
/// Runs a part-number or free-text match against the catalog, resolves the
/// analogs of every match, merges and ranks the two sets, and prices the
/// result for the viewer.
///
/// # Part-number fallback
///
/// A part-number query tries an exact match, then a prefix match. If both
/// find nothing, the first part whose number merely *contains* the query is
/// used to look up analogs without being shown itself. Analogs can therefore
/// appear with no primary result, which helps users who mistype a code.
///
/// # Examples
///
/// ```no_run
/// use autoparts_search::{SearchConfig, SearchService, Viewer};
/// use autoparts_store::SqliteStore;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let store = SqliteStore::new("autoparts.db")?;
/// let service = SearchService::new(&store, &store, SearchConfig::default());
///
/// for result in service.search("OC-90", &Viewer::guest())? {
///     println!("{} {}", result.part().part_number, result.price());
/// }
/// # Ok(())
/// # }
/// ```
pub struct SearchService<'a, C: ?Sized, R: ?Sized> {
    catalog: &'a C,
    relations: &'a R,
    config: SearchConfig,
    formatter: PriceFormatter,
}

impl<'a, C, R> SearchService<'a, C, R>
where
    C: Catalog + ?Sized,
    C::Error: Display,
    R: RelationStore + ?Sized,
    R::Error: Display,
{
    /// Create a search service over a catalog and a relation store
    pub fn new(catalog: &'a C, relations: &'a R, config: SearchConfig) -> Self {
        let formatter = PriceFormatter::new(config.default_markup_percent);
        Self {
            catalog,
            relations,
            config,
            formatter,
        }
    }

    /// Get the search configuration
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search the catalog and expand the matches with their analogs
    ///
    /// Returns primary matches first (catalog order), then analogs by
    /// ascending distance. No part appears twice, and a part that matched the
    /// query is never listed as an analog. Only available, in-stock parts are
    /// returned.
    ///
    /// An empty or blank query returns an empty list without touching the
    /// catalog. A store failure is an error, never an empty list.
    pub fn search(&self, query: &str, viewer: &Viewer) -> Result<Vec<SearchResult>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let kind = classify(query);
        tracing::info!(query, ?kind, "search");

        let primary = match kind {
            QueryKind::PartNumber => self.match_part_number(query)?,
            QueryKind::FreeText => self.match_text(query)?,
        };

        let mut seen: HashSet<PartId> = HashSet::new();
        let shown: Vec<Part> = primary
            .shown
            .into_iter()
            .filter(|part| part.is_display_eligible() && seen.insert(part.id))
            .collect();

        let seeds: Vec<PartId> = shown
            .iter()
            .map(|part| part.id)
            .chain(primary.hidden_seeds.iter().copied())
            .collect();

        let analogs = self.expand_analogs(&seeds, &seen)?;

        tracing::debug!(
            primary = shown.len(),
            hidden_seeds = primary.hidden_seeds.len(),
            analogs = analogs.len(),
            "merged search results"
        );

        let mut results: Vec<SearchResult> = shown
            .iter()
            .map(|part| SearchResult::primary(self.formatter.format_for(part, viewer)))
            .collect();
        results.extend(
            analogs
                .into_iter()
                .filter(|(part, _)| seen.insert(part.id))
                .map(|(part, info)| SearchResult::analog(self.formatter.format_for(&part, viewer), info)),
        );

        Ok(results)
    }

    /// Analogs of a single part, nearest first, priced for the viewer
    pub fn analogs_of(&self, part_id: PartId, viewer: &Viewer) -> Result<Vec<SearchResult>> {
        let exclude = HashSet::from([part_id]);
        let analogs = self.expand_analogs(&[part_id], &exclude)?;

        Ok(analogs
            .into_iter()
            .map(|(part, info)| SearchResult::analog(self.formatter.format_for(&part, viewer), info))
            .collect())
    }

    /// Suggestions for a free-text query (names, manufacturers, description words)
    pub fn text_suggestions(&self, query: &str) -> Result<Vec<String>> {
        suggestions::text_suggestions(self.catalog, query, self.config.suggestion_limit)
    }

    /// Suggestions for a part-number query (prefix matches first)
    pub fn part_number_suggestions(&self, query: &str) -> Result<Vec<String>> {
        suggestions::part_number_suggestions(self.catalog, query, self.config.suggestion_limit)
    }

    /// Exact, then prefix, then a single hidden "contains" seed
    fn match_part_number(&self, query: &str) -> Result<PrimaryMatches> {
        let part_number = clean_part_number(query);

        let exact = self.lookup_part_number(&part_number, MatchMode::Exact, Availability::InStock, None)?;
        if !exact.is_empty() {
            return Ok(PrimaryMatches {
                shown: exact,
                hidden_seeds: Vec::new(),
            });
        }

        let prefix = self.lookup_part_number(
            &part_number,
            MatchMode::Prefix,
            Availability::InStock,
            Some(self.config.prefix_result_limit),
        )?;
        if !prefix.is_empty() {
            return Ok(PrimaryMatches {
                shown: prefix,
                hidden_seeds: Vec::new(),
            });
        }

        let seed = self.lookup_part_number(&part_number, MatchMode::Contains, Availability::Any, Some(1))?;
        if let Some(part) = seed.first() {
            tracing::debug!(seed = %part.id, part_number = %part.part_number, "using hidden analog seed");
        }
        Ok(PrimaryMatches {
            shown: Vec::new(),
            hidden_seeds: seed.into_iter().map(|part| part.id).collect(),
        })
    }

    fn match_text(&self, query: &str) -> Result<PrimaryMatches> {
        let tokens = tokenize(query, self.config.min_token_chars);
        let shown = self
            .catalog
            .match_text(
                &tokens,
                query,
                Availability::InStock,
                Some(self.config.text_result_limit),
            )
            .map_err(catalog_error)?;

        Ok(PrimaryMatches {
            shown,
            hidden_seeds: Vec::new(),
        })
    }

    fn lookup_part_number(
        &self,
        pattern: &str,
        mode: MatchMode,
        availability: Availability,
        limit: Option<usize>,
    ) -> Result<Vec<Part>> {
        self.catalog
            .match_part_number(pattern, mode, availability, limit)
            .map_err(catalog_error)
    }

    /// Union of the analogs of every seed, minus `exclude`, loaded and ranked
    ///
    /// A part reachable from several seeds keeps its smallest distance.
    /// Parts that are missing, unlisted or out of stock are dropped silently.
    fn expand_analogs(&self, seeds: &[PartId], exclude: &HashSet<PartId>) -> Result<Vec<(Part, AnalogInfo)>> {
        if seeds.is_empty() {
            return Ok(Vec::new());
        }

        let resolver = AnalogResolver::new(self.relations, self.config.resolver.clone());
        let mut candidates: HashMap<PartId, AnalogCandidate> = HashMap::new();

        for &seed in seeds {
            for (id, info) in resolver.resolve(seed)? {
                if exclude.contains(&id) {
                    continue;
                }
                let discovered = candidates.len();
                match candidates.entry(id) {
                    Entry::Vacant(slot) => {
                        slot.insert(AnalogCandidate { discovered, info });
                    }
                    Entry::Occupied(mut slot) => {
                        if info.distance < slot.get().info.distance {
                            slot.get_mut().info = info;
                        }
                    }
                }
            }
        }

        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<PartId> = candidates.keys().copied().collect();
        let parts = self
            .catalog
            .find_by_ids(&ids, Availability::InStock)
            .map_err(catalog_error)?;

        let mut ranked: Vec<(Part, AnalogCandidate)> = parts
            .into_iter()
            .filter(Part::is_display_eligible)
            .filter_map(|part| candidates.remove(&part.id).map(|candidate| (part, candidate)))
            .collect();
        ranked.sort_by_key(|(_, candidate)| (candidate.info.distance, candidate.discovered));

        Ok(ranked
            .into_iter()
            .map(|(part, candidate)| (part, candidate.info))
            .collect())
    }
}

pub(crate) fn catalog_error<E: Display>(err: E) -> SearchError {
    tracing::warn!(error = %err, "catalog lookup failed");
    SearchError::StoreUnavailable(err.to_string())
}
