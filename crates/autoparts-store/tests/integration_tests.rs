//! Integration tests for autoparts-store
//!
//! These tests verify catalog lookups and relation reads against SQLite.

use autoparts_domain::traits::{Availability, Catalog, MatchMode, RelationStore};
use autoparts_domain::{AnalogEdge, Money, Part, PartId};
use autoparts_store::{SqliteStore, StoreError};

fn part(id: i64, number: &str, name: &str, stock: u32) -> Part {
    Part::new(PartId::new(id), number, name, "Bosch", Money::from_cents(1000 + id), stock)
}

fn seeded_store() -> SqliteStore {
    let mut store = SqliteStore::new(":memory:").unwrap();
    store.insert_part(&part(1, "AB-1234", "Brake pad set", 5)).unwrap();
    store.insert_part(&part(2, "ab-9999", "Brake disc", 2)).unwrap();
    store.insert_part(&part(3, "XAB-1", "Oil filter", 0)).unwrap();

    let mut hidden = part(4, "AB-0001", "Air filter", 7);
    hidden.available = false;
    store.insert_part(&hidden).unwrap();
    store
}

#[test]
fn test_store_initialization() {
    let store = SqliteStore::new(":memory:");
    assert!(store.is_ok(), "Store should initialize successfully");
}

#[test]
fn test_reopen_file_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("parts.db");

    {
        let mut store = SqliteStore::new(&path).unwrap();
        store.insert_part(&part(1, "AB-1", "Pad", 1)).unwrap();
    }

    // Schema creation must be idempotent
    let store = SqliteStore::new(&path).unwrap();
    assert!(store.get_part(PartId::new(1)).unwrap().is_some());
}

#[test]
fn test_insert_and_get_part() {
    let mut store = SqliteStore::new(":memory:").unwrap();
    let mut original = part(10, "W 712/75", "Масляный фильтр", 3);
    original.description = Some("Фильтр для 1.6".to_string());
    original.category_id = Some(4);

    store.insert_part(&original).unwrap();
    let loaded = store.get_part(PartId::new(10)).unwrap().unwrap();
    assert_eq!(loaded, original);

    assert!(store.get_part(PartId::new(11)).unwrap().is_none());
}

#[test]
fn test_duplicate_part_rejected() {
    let mut store = SqliteStore::new(":memory:").unwrap();
    store.insert_part(&part(1, "AB-1", "Pad", 1)).unwrap();
    let result = store.insert_part(&part(1, "AB-2", "Other", 1));
    assert!(matches!(result, Err(StoreError::Duplicate(id)) if id == PartId::new(1)));
}

#[test]
fn test_self_analog_rejected() {
    let mut store = SqliteStore::new(":memory:").unwrap();
    let result = store.add_analog(&AnalogEdge::new(PartId::new(1), PartId::new(1)));
    assert!(matches!(result, Err(StoreError::InvalidData(_))));
    assert!(store.list_edges().unwrap().is_empty());
}

#[test]
fn test_add_analog_upserts_annotation() {
    let mut store = SqliteStore::new(":memory:").unwrap();
    store.add_analog(&AnalogEdge::new(PartId::new(1), PartId::new(2))).unwrap();
    store
        .add_analog(&AnalogEdge::with_type(PartId::new(1), PartId::new(2), "oem"))
        .unwrap();

    let edges = store.list_edges().unwrap();
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].analog_type.as_deref(), Some("oem"));
}

#[test]
fn test_edges_for_reads_both_directions() {
    let mut store = SqliteStore::new(":memory:").unwrap();
    store.add_analog(&AnalogEdge::new(PartId::new(1), PartId::new(2))).unwrap();
    store.add_analog(&AnalogEdge::new(PartId::new(3), PartId::new(1))).unwrap();
    store.add_analog(&AnalogEdge::new(PartId::new(3), PartId::new(4))).unwrap();

    let edges = store.edges_for(PartId::new(1)).unwrap();
    assert_eq!(edges.len(), 2);
    assert!(edges.iter().all(|e| e.touches(PartId::new(1))));

    assert_eq!(store.list_edges().unwrap().len(), 3);
    assert!(store.edges_for(PartId::new(99)).unwrap().is_empty());
}

#[test]
fn test_exact_match_is_case_insensitive() {
    let store = seeded_store();
    let matches = store
        .match_part_number("ab-1234", MatchMode::Exact, Availability::InStock, None)
        .unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].id, PartId::new(1));

    let none = store
        .match_part_number("AB-123", MatchMode::Exact, Availability::InStock, None)
        .unwrap();
    assert!(none.is_empty());
}

#[test]
fn test_prefix_match_respects_availability() {
    let store = seeded_store();

    let in_stock = store
        .match_part_number("AB-", MatchMode::Prefix, Availability::InStock, None)
        .unwrap();
    let ids: Vec<i64> = in_stock.iter().map(|p| p.id.value()).collect();
    assert_eq!(ids, vec![1, 2]);

    let any = store
        .match_part_number("AB-", MatchMode::Prefix, Availability::Any, None)
        .unwrap();
    let ids: Vec<i64> = any.iter().map(|p| p.id.value()).collect();
    assert_eq!(ids, vec![1, 2, 4]);
}

#[test]
fn test_contains_match_and_limit() {
    let store = seeded_store();

    let all = store
        .match_part_number("ab-", MatchMode::Contains, Availability::Any, None)
        .unwrap();
    assert_eq!(all.len(), 4);

    let one = store
        .match_part_number("ab-", MatchMode::Contains, Availability::Any, Some(1))
        .unwrap();
    assert_eq!(one.len(), 1);
    assert_eq!(one[0].id, PartId::new(1));
}

#[test]
fn test_like_wildcards_are_literal() {
    let store = seeded_store();
    let matches = store
        .match_part_number("_", MatchMode::Contains, Availability::Any, None)
        .unwrap();
    assert!(matches.is_empty(), "'_' must not act as a wildcard");
}

#[test]
fn test_find_by_ids_filters_and_skips_unknown() {
    let store = seeded_store();
    let ids = [PartId::new(3), PartId::new(1), PartId::new(42), PartId::new(4)];

    let eligible = store.find_by_ids(&ids, Availability::InStock).unwrap();
    assert_eq!(eligible.len(), 1);
    assert_eq!(eligible[0].id, PartId::new(1));

    let any = store.find_by_ids(&ids, Availability::Any).unwrap();
    assert_eq!(any.len(), 3);

    assert!(store.find_by_ids(&[], Availability::Any).unwrap().is_empty());
}

#[test]
fn test_match_text_tokens_and_full_query() {
    let store = seeded_store();

    let brake = store
        .match_text(&["brake".to_string()], "brake", Availability::InStock, None)
        .unwrap();
    assert_eq!(brake.len(), 2);

    let by_manufacturer = store
        .match_text(&[], "BOSCH", Availability::Any, Some(3))
        .unwrap();
    assert_eq!(by_manufacturer.len(), 3);

    let nothing = store
        .match_text(&["zzz".to_string()], "zzz", Availability::Any, None)
        .unwrap();
    assert!(nothing.is_empty());
}

#[test]
fn test_match_text_cyrillic() {
    let mut store = SqliteStore::new(":memory:").unwrap();
    store.insert_part(&part(1, "W1", "Масляный фильтр", 1)).unwrap();
    store.insert_part(&part(2, "W2", "Воздушный фильтр", 1)).unwrap();

    let matches = store
        .match_text(
            &["масляный".to_string(), "фильтр".to_string()],
            "масляный фильтр",
            Availability::InStock,
            None,
        )
        .unwrap();
    assert_eq!(matches.len(), 2, "the 'фильтр' token matches both parts");

    let exact = store
        .match_text(&["масляный".to_string()], "масляный", Availability::InStock, None)
        .unwrap();
    assert_eq!(exact.len(), 1);
}
