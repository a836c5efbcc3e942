//! Query classification and normalization

/// How a search query is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    /// Only ASCII letters, digits and hyphens: matched against part numbers
    PartNumber,

    /// Anything else: matched against names, descriptions and manufacturers
    FreeText,
}

/// Classify a trimmed, non-empty query
pub fn classify(query: &str) -> QueryKind {
    if !query.is_empty() && query.chars().all(is_part_number_char) {
        QueryKind::PartNumber
    } else {
        QueryKind::FreeText
    }
}

/// Drop every character that cannot appear in a part number
pub fn clean_part_number(query: &str) -> String {
    query.chars().filter(|&c| is_part_number_char(c)).collect()
}

/// Split a free-text query into search tokens
///
/// Tokens shorter than `min_chars` characters are dropped. If nothing is
/// left, the whole query is the only token.
pub fn tokenize(query: &str, min_chars: usize) -> Vec<String> {
    let tokens: Vec<String> = query
        .split_whitespace()
        .filter(|token| token.chars().count() >= min_chars)
        .map(str::to_string)
        .collect();

    if tokens.is_empty() {
        vec![query.trim().to_string()]
    } else {
        tokens
    }
}

fn is_part_number_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}
