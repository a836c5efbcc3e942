//! Autoparts Storage Layer
//!
//! Implements the `RelationStore` and `Catalog` traits on SQLite.
//!
//! # Architecture
//!
//! - `spare_parts` holds catalog rows (prices in cents)
//! - `spare_part_analogs` holds directional analog rows, read as symmetric relations
//! - Part-number matching runs in SQL; free-text matching is done in Rust so that
//!   case folding works for non-ASCII names
//!
//! # Examples
//!
//! ```no_run
//! use autoparts_store::SqliteStore;
//!
//! let store = SqliteStore::new(":memory:").unwrap();
//! // Store is now ready for catalog and relation lookups
//! ```

#![warn(missing_docs)]

use autoparts_domain::traits::{Availability, Catalog, MatchMode, RelationStore};
use autoparts_domain::{AnalogEdge, Money, Part, PartId};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Invalid data format
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Part with the same id already exists
    #[error("Duplicate part: {0}")]
    Duplicate(PartId),
}

const PART_COLUMNS: &str = "id, part_number, name, description, manufacturer, category_id, \
                            price_cents, stock_quantity, is_available";

const IN_STOCK_CLAUSE: &str = " AND is_available = 1 AND stock_quantity > 0";

/// SQLite-based implementation of `RelationStore` and `Catalog`
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should have its own SqliteStore instance.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create a new SqliteStore with the given database path
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use autoparts_store::SqliteStore;
    ///
    /// let store = SqliteStore::new("autoparts.db").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let mut store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&mut self) -> Result<(), StoreError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }

    /// Insert a catalog part
    pub fn insert_part(&mut self, part: &Part) -> Result<PartId, StoreError> {
        if self.get_part(part.id)?.is_some() {
            return Err(StoreError::Duplicate(part.id));
        }

        self.conn.execute(
            "INSERT INTO spare_parts (id, part_number, name, description, manufacturer, category_id,
                                      price_cents, stock_quantity, is_available)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                part.id.value(),
                &part.part_number,
                &part.name,
                &part.description,
                &part.manufacturer,
                part.category_id,
                part.base_price.cents(),
                part.stock_quantity,
                part.available,
            ],
        )?;

        Ok(part.id)
    }

    /// Get a part by id, regardless of availability
    pub fn get_part(&self, id: PartId) -> Result<Option<Part>, StoreError> {
        let sql = format!("SELECT {} FROM spare_parts WHERE id = ?1", PART_COLUMNS);
        let part = self
            .conn
            .query_row(&sql, params![id.value()], row_to_part)
            .optional()?;
        Ok(part)
    }

    /// Record an analog relation
    ///
    /// Self-relations are rejected. Re-adding an existing `(part, analog)` row
    /// updates its annotation instead of creating a second row.
    pub fn add_analog(&mut self, edge: &AnalogEdge) -> Result<(), StoreError> {
        if edge.is_self_edge() {
            return Err(StoreError::InvalidData(format!(
                "Part {} cannot be an analog of itself",
                edge.part_id
            )));
        }

        self.conn.execute(
            "INSERT INTO spare_part_analogs (spare_part_id, analog_spare_part_id, analog_type)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(spare_part_id, analog_spare_part_id) DO UPDATE SET
             analog_type = excluded.analog_type",
            params![
                edge.part_id.value(),
                edge.analog_part_id.value(),
                &edge.analog_type,
            ],
        )?;

        Ok(())
    }

    /// Run a part query with positional parameters
    fn query_parts<P: rusqlite::Params>(&self, sql: &str, params: P) -> Result<Vec<Part>, StoreError> {
        let mut stmt = self.conn.prepare(sql)?;
        let parts = stmt
            .query_map(params, row_to_part)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(parts)
    }

    /// Run an edge query with positional parameters
    fn query_edges<P: rusqlite::Params>(&self, sql: &str, params: P) -> Result<Vec<AnalogEdge>, StoreError> {
        let mut stmt = self.conn.prepare(sql)?;
        let edges = stmt
            .query_map(params, |row| {
                Ok(AnalogEdge {
                    part_id: PartId::new(row.get(0)?),
                    analog_part_id: PartId::new(row.get(1)?),
                    analog_type: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(edges)
    }
}

/// Map a `spare_parts` row (selected with `PART_COLUMNS`) to a Part
fn row_to_part(row: &Row<'_>) -> rusqlite::Result<Part> {
    Ok(Part {
        id: PartId::new(row.get(0)?),
        part_number: row.get(1)?,
        name: row.get(2)?,
        description: row.get(3)?,
        manufacturer: row.get(4)?,
        category_id: row.get(5)?,
        base_price: Money::from_cents(row.get(6)?),
        stock_quantity: row.get(7)?,
        available: row.get(8)?,
    })
}

fn availability_clause(availability: Availability) -> &'static str {
    match availability {
        Availability::InStock => IN_STOCK_CLAUSE,
        Availability::Any => "",
    }
}

/// Escape LIKE wildcards so the pattern is matched literally
fn escape_like(pattern: &str) -> String {
    let mut escaped = String::with_capacity(pattern.len());
    for c in pattern.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Case-insensitive substring test over the text fields of a part
fn text_matches(part: &Part, needles: &[String]) -> bool {
    let name = part.name.to_lowercase();
    let manufacturer = part.manufacturer.to_lowercase();
    let description = part
        .description
        .as_deref()
        .map(str::to_lowercase)
        .unwrap_or_default();

    needles.iter().any(|needle| {
        name.contains(needle.as_str())
            || description.contains(needle.as_str())
            || manufacturer.contains(needle.as_str())
    })
}

impl RelationStore for SqliteStore {
    type Error = StoreError;

    fn list_edges(&self) -> Result<Vec<AnalogEdge>, Self::Error> {
        self.query_edges(
            "SELECT spare_part_id, analog_spare_part_id, analog_type
             FROM spare_part_analogs ORDER BY id",
            [],
        )
    }

    fn edges_for(&self, id: PartId) -> Result<Vec<AnalogEdge>, Self::Error> {
        self.query_edges(
            "SELECT spare_part_id, analog_spare_part_id, analog_type
             FROM spare_part_analogs
             WHERE spare_part_id = ?1 OR analog_spare_part_id = ?1
             ORDER BY id",
            params![id.value()],
        )
    }
}

impl Catalog for SqliteStore {
    type Error = StoreError;

    fn find_by_ids(&self, ids: &[PartId], availability: Availability) -> Result<Vec<Part>, Self::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; ids.len()].join(", ");
        let sql = format!(
            "SELECT {} FROM spare_parts WHERE id IN ({}){} ORDER BY id",
            PART_COLUMNS,
            placeholders,
            availability_clause(availability)
        );

        self.query_parts(&sql, params_from_iter(ids.iter().map(|id| id.value())))
    }

    fn match_part_number(
        &self,
        pattern: &str,
        mode: MatchMode,
        availability: Availability,
        limit: Option<usize>,
    ) -> Result<Vec<Part>, Self::Error> {
        let lowered = pattern.to_lowercase();
        let (condition, value) = match mode {
            MatchMode::Exact => ("LOWER(part_number) = ?1", lowered),
            MatchMode::Prefix => (
                "LOWER(part_number) LIKE ?1 ESCAPE '\\'",
                format!("{}%", escape_like(&lowered)),
            ),
            MatchMode::Contains => (
                "LOWER(part_number) LIKE ?1 ESCAPE '\\'",
                format!("%{}%", escape_like(&lowered)),
            ),
        };

        let mut sql = format!(
            "SELECT {} FROM spare_parts WHERE {}{} ORDER BY id",
            PART_COLUMNS,
            condition,
            availability_clause(availability)
        );
        if let Some(limit) = limit {
            sql.push_str(&format!(" LIMIT {}", limit));
        }

        let parts = self.query_parts(&sql, params![value])?;
        tracing::debug!(pattern, ?mode, matches = parts.len(), "part number lookup");
        Ok(parts)
    }

    fn match_text(
        &self,
        tokens: &[String],
        full_query: &str,
        availability: Availability,
        limit: Option<usize>,
    ) -> Result<Vec<Part>, Self::Error> {
        let mut needles: Vec<String> = tokens
            .iter()
            .map(|t| t.to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        let full = full_query.trim().to_lowercase();
        if !full.is_empty() {
            needles.push(full);
        }
        if needles.is_empty() {
            return Ok(Vec::new());
        }

        let sql = format!(
            "SELECT {} FROM spare_parts WHERE 1=1{} ORDER BY id",
            PART_COLUMNS,
            availability_clause(availability)
        );
        let candidates = self.query_parts(&sql, [])?;

        let matches: Vec<Part> = candidates
            .into_iter()
            .filter(|part| text_matches(part, &needles))
            .take(limit.unwrap_or(usize::MAX))
            .collect();

        tracing::debug!(full_query, matches = matches.len(), "text lookup");
        Ok(matches)
    }
}
