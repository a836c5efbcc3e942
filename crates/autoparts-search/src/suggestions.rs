//! Autocomplete suggestions
//!
//! Suggestions are plain strings drawn from in-stock catalog parts. Queries
//! shorter than [`MIN_QUERY_CHARS`] characters give no suggestions.

use crate::error::Result;
use crate::merger::catalog_error;
use autoparts_domain::traits::{Availability, Catalog, MatchMode};
use std::collections::HashSet;
use std::fmt::Display;

/// Shortest query that produces suggestions
pub const MIN_QUERY_CHARS: usize = 2;

/// Description words shorter than this are never suggested
const MIN_WORD_CHARS: usize = 4;

/// Suggest part names, manufacturers and description words containing the query
///
/// Names come first, then manufacturers, then description words. Matching is
/// case-insensitive; each suggestion appears once.
pub fn text_suggestions<C>(catalog: &C, query: &str, limit: usize) -> Result<Vec<String>>
where
    C: Catalog + ?Sized,
    C::Error: Display,
{
    let query = query.trim();
    if query.chars().count() < MIN_QUERY_CHARS || limit == 0 {
        return Ok(Vec::new());
    }

    let needle = query.to_lowercase();
    let parts = catalog
        .match_text(
            &[query.to_string()],
            query,
            Availability::InStock,
            Some(limit.saturating_mul(4)),
        )
        .map_err(catalog_error)?;

    let mut names = Vec::new();
    let mut manufacturers = Vec::new();
    let mut words = Vec::new();

    for part in &parts {
        if part.name.to_lowercase().contains(&needle) {
            names.push(part.name.clone());
        }
        if part.manufacturer.to_lowercase().contains(&needle) {
            manufacturers.push(part.manufacturer.clone());
        }
        if let Some(description) = &part.description {
            words.extend(
                description
                    .split(|c: char| !c.is_alphanumeric() && c != '-')
                    .filter(|word| word.chars().count() >= MIN_WORD_CHARS)
                    .filter(|word| word.to_lowercase().contains(&needle))
                    .map(str::to_string),
            );
        }
    }

    Ok(dedup_limited(names.into_iter().chain(manufacturers).chain(words), limit))
}

/// Suggest part numbers: prefix matches first, then other partial matches
pub fn part_number_suggestions<C>(catalog: &C, query: &str, limit: usize) -> Result<Vec<String>>
where
    C: Catalog + ?Sized,
    C::Error: Display,
{
    let query = query.trim();
    if query.chars().count() < MIN_QUERY_CHARS || limit == 0 {
        return Ok(Vec::new());
    }

    let prefix = catalog
        .match_part_number(query, MatchMode::Prefix, Availability::InStock, Some(limit))
        .map_err(catalog_error)?;

    let mut numbers: Vec<String> = prefix.into_iter().map(|part| part.part_number).collect();
    if numbers.len() < limit {
        let contains = catalog
            .match_part_number(query, MatchMode::Contains, Availability::InStock, Some(limit.saturating_mul(2)))
            .map_err(catalog_error)?;
        numbers.extend(contains.into_iter().map(|part| part.part_number));
    }

    Ok(dedup_limited(numbers, limit))
}

/// First `limit` distinct values, compared case-insensitively
fn dedup_limited<I>(values: I, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(value.to_lowercase()))
        .take(limit)
        .collect()
}
