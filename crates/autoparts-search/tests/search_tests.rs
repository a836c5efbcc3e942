//! Search pipeline tests against a SQLite catalog

use autoparts_domain::traits::{Availability, Catalog, MatchMode, RelationStore};
use autoparts_domain::{AnalogEdge, Money, Part, PartId, RelationType};
use autoparts_search::{SearchConfig, SearchError, SearchResult, SearchService, Viewer};
use autoparts_store::SqliteStore;

fn id(value: i64) -> PartId {
    PartId::new(value)
}

fn part(value: i64, part_number: &str, name: &str, stock: u32) -> Part {
    Part::new(id(value), part_number, name, "Mahle", Money::from_cents(1000), stock)
}

fn store_with(parts: &[Part], edges: &[(i64, i64)]) -> SqliteStore {
    let mut store = SqliteStore::new(":memory:").unwrap();
    for part in parts {
        store.insert_part(part).unwrap();
    }
    for &(a, b) in edges {
        store.add_analog(&AnalogEdge::new(id(a), id(b))).unwrap();
    }
    store
}

fn ids(results: &[SearchResult]) -> Vec<i64> {
    results.iter().map(|r| r.id().value()).collect()
}

fn search(store: &SqliteStore, query: &str) -> Vec<SearchResult> {
    SearchService::new(store, store, SearchConfig::default())
        .search(query, &Viewer::guest())
        .unwrap()
}

/// Catalog and relation store that are always down
struct OfflineStore;

impl Catalog for OfflineStore {
    type Error = String;

    fn find_by_ids(&self, _ids: &[PartId], _availability: Availability) -> Result<Vec<Part>, Self::Error> {
        Err("database is locked".to_string())
    }

    fn match_part_number(
        &self,
        _pattern: &str,
        _mode: MatchMode,
        _availability: Availability,
        _limit: Option<usize>,
    ) -> Result<Vec<Part>, Self::Error> {
        Err("database is locked".to_string())
    }

    fn match_text(
        &self,
        _tokens: &[String],
        _full_query: &str,
        _availability: Availability,
        _limit: Option<usize>,
    ) -> Result<Vec<Part>, Self::Error> {
        Err("database is locked".to_string())
    }
}

impl RelationStore for OfflineStore {
    type Error = String;

    fn list_edges(&self) -> Result<Vec<AnalogEdge>, Self::Error> {
        Err("database is locked".to_string())
    }

    fn edges_for(&self, _id: PartId) -> Result<Vec<AnalogEdge>, Self::Error> {
        Err("database is locked".to_string())
    }
}

#[test]
fn test_part_number_search_expands_chain() {
    let store = store_with(
        &[
            part(1, "OC-90", "Oil filter", 5),
            part(2, "W712", "Oil filter", 5),
            part(3, "HU-7", "Oil filter", 5),
        ],
        &[(1, 2), (2, 3)],
    );

    let results = search(&store, "OC-90");
    assert_eq!(ids(&results), vec![1, 2, 3]);

    assert!(results[0].is_exact_match);
    assert!(!results[0].is_analog);
    assert_eq!(results[0].distance, None);

    assert!(results[1].is_analog);
    assert_eq!(results[1].relation_type, Some(RelationType::Direct));
    assert_eq!(results[1].distance, Some(1));

    assert_eq!(results[2].relation_type, Some(RelationType::Indirect));
    assert_eq!(results[2].distance, Some(2));
    assert_eq!(results[2].analog_type.as_deref(), Some("transitive"));
}

#[test]
fn test_out_of_stock_analog_is_filtered() {
    let store = store_with(
        &[part(10, "10", "Brake pad", 4), part(20, "20", "Brake pad", 0)],
        &[(10, 20)],
    );

    let results = search(&store, "10");
    assert_eq!(ids(&results), vec![10]);
    assert!(results[0].is_exact_match);
}

#[test]
fn test_prefix_fallback_is_primary() {
    let store = store_with(
        &[part(1, "AB-1234", "Spark plug", 3), part(2, "NGK-5", "Spark plug", 3)],
        &[(1, 2)],
    );

    let results = search(&store, "AB-123");
    assert_eq!(ids(&results), vec![1, 2]);
    assert!(results[0].is_exact_match);
    assert!(results[1].is_analog);
}

#[test]
fn test_part_number_match_is_case_insensitive() {
    let store = store_with(&[part(1, "OC-90", "Oil filter", 3)], &[]);
    assert_eq!(ids(&search(&store, "oc-90")), vec![1]);
}

#[test]
fn test_free_text_primaries_then_analogs_by_distance() {
    let store = store_with(
        &[
            part(1, "F-1", "Масляный фильтр Mann", 2),
            part(2, "F-2", "Масляный фильтр Bosch", 2),
            part(3, "F-3", "Масляный фильтр Knecht", 2),
            part(4, "X-4", "Filter element", 2),
            part(5, "X-5", "Filter cartridge", 2),
            part(6, "X-6", "Air cleaner", 2),
        ],
        &[(1, 4), (4, 5), (2, 6), (3, 1)],
    );

    let results = search(&store, "масляный фильтр");
    assert_eq!(&ids(&results)[..3], &[1, 2, 3]);
    assert!(results[..3].iter().all(|r| r.is_exact_match));

    // 4 and 6 are direct analogs, 5 is two hops away
    let analogs = &results[3..];
    assert_eq!(analogs.len(), 3);
    assert_eq!(analogs[0].distance, Some(1));
    assert_eq!(analogs[1].distance, Some(1));
    assert_eq!(analogs[2].id(), id(5));
    assert_eq!(analogs[2].distance, Some(2));
}

#[test]
fn test_free_text_is_case_insensitive_for_cyrillic() {
    let store = store_with(&[part(1, "F-1", "Масляный фильтр", 2)], &[]);
    assert_eq!(ids(&search(&store, "МАСЛЯНЫЙ")), vec![1]);
}

#[test]
fn test_no_duplicates_across_primaries_and_analogs() {
    // 1 and 2 both match and are analogs of each other and of 3
    let store = store_with(
        &[
            part(1, "F-1", "Oil filter", 2),
            part(2, "F-2", "Oil filter", 2),
            part(3, "F-3", "Cartridge", 2),
        ],
        &[(1, 2), (2, 3), (1, 3)],
    );

    let results = search(&store, "oil filter");
    assert_eq!(ids(&results), vec![1, 2, 3]);
    assert!(results[1].is_exact_match);
    assert!(!results[1].is_analog);
    assert_eq!(results[2].distance, Some(1));
}

#[test]
fn test_analog_reachable_from_two_seeds_keeps_min_distance() {
    // 3 is two hops from 1 but one hop from 2
    let store = store_with(
        &[
            part(1, "F-1", "Oil filter", 2),
            part(2, "F-2", "Oil filter", 2),
            part(3, "F-3", "Cartridge", 2),
            part(4, "F-4", "Cartridge", 2),
        ],
        &[(1, 4), (4, 3), (2, 3)],
    );

    let results = search(&store, "oil filter");
    let three = results.iter().find(|r| r.id() == id(3)).unwrap();
    assert_eq!(three.distance, Some(1));
    assert_eq!(three.relation_type, Some(RelationType::Direct));
}

#[test]
fn test_hidden_seed_shows_analogs_without_primary() {
    // "123" is neither an exact nor a prefix match of "X-123-B", which is
    // also unlisted, but its analogs still come back
    let mut unlisted = part(1, "X-123-B", "Oil filter", 5);
    unlisted.available = false;
    let store = store_with(&[unlisted, part(2, "OC-5", "Oil filter", 5)], &[(1, 2)]);

    let results = search(&store, "123");
    assert_eq!(ids(&results), vec![2]);
    assert!(results[0].is_analog);
    assert!(!results[0].is_exact_match);
}

#[test]
fn test_no_match_is_empty_not_error() {
    let store = store_with(&[part(1, "OC-90", "Oil filter", 5)], &[]);
    assert!(search(&store, "ZZ-999").is_empty());
    assert!(search(&store, "windscreen wiper").is_empty());
}

#[test]
fn test_blank_query_skips_the_store() {
    let service = SearchService::new(&OfflineStore, &OfflineStore, SearchConfig::default());
    assert!(service.search("", &Viewer::guest()).unwrap().is_empty());
    assert!(service.search("   ", &Viewer::guest()).unwrap().is_empty());
}

#[test]
fn test_store_failure_is_reported() {
    let service = SearchService::new(&OfflineStore, &OfflineStore, SearchConfig::default());

    let err = service.search("OC-90", &Viewer::guest()).unwrap_err();
    assert!(matches!(err, SearchError::StoreUnavailable(_)));
    assert!(err.to_string().contains("temporarily unavailable"));

    let err = service.search("oil filter", &Viewer::guest()).unwrap_err();
    assert!(matches!(err, SearchError::StoreUnavailable(_)));
}

#[test]
fn test_relation_store_failure_is_reported() {
    let catalog = store_with(&[part(1, "OC-90", "Oil filter", 5)], &[]);
    let service = SearchService::new(&catalog, &OfflineStore, SearchConfig::default());

    let err = service.search("OC-90", &Viewer::guest()).unwrap_err();
    assert!(matches!(err, SearchError::StoreUnavailable(_)));
}

#[test]
fn test_prices_follow_viewer() {
    let store = store_with(&[part(1, "OC-90", "Oil filter", 5)], &[]);
    let service = SearchService::new(&store, &store, SearchConfig::default());

    let guest = service.search("OC-90", &Viewer::guest()).unwrap();
    assert_eq!(guest[0].price(), Money::from_cents(1250));
    assert_eq!(guest[0].priced.base_price, None);

    let customer = service.search("OC-90", &Viewer::customer(10.0)).unwrap();
    assert_eq!(customer[0].price(), Money::from_cents(1100));

    let admin = service.search("OC-90", &Viewer::admin()).unwrap();
    assert_eq!(admin[0].priced.base_price, Some(Money::from_cents(1000)));
    assert_eq!(admin[0].priced.markup_percent, Some(25.0));
    assert_eq!(admin[0].part().base_price, Money::from_cents(1000));
}

#[test]
fn test_configured_default_markup() {
    let store = store_with(&[part(1, "OC-90", "Oil filter", 5)], &[]);
    let config = SearchConfig {
        default_markup_percent: 50.0,
        ..SearchConfig::default()
    };
    let service = SearchService::new(&store, &store, config);

    let results = service.search("OC-90", &Viewer::guest()).unwrap();
    assert_eq!(results[0].price(), Money::from_cents(1500));
}

#[test]
fn test_text_result_limit_caps_primaries() {
    let parts: Vec<Part> = (1..=5).map(|i| part(i, &format!("F-{i}"), "Oil filter", 1)).collect();
    let store = store_with(&parts, &[]);
    let config = SearchConfig {
        text_result_limit: 2,
        ..SearchConfig::default()
    };
    let service = SearchService::new(&store, &store, config);

    let results = service.search("oil filter", &Viewer::guest()).unwrap();
    assert_eq!(ids(&results), vec![1, 2]);
}

#[test]
fn test_analogs_of_excludes_the_part_itself() {
    let store = store_with(
        &[
            part(1, "OC-90", "Oil filter", 5),
            part(2, "W712", "Oil filter", 5),
            part(3, "HU-7", "Oil filter", 0),
        ],
        &[(1, 2), (2, 3)],
    );
    let service = SearchService::new(&store, &store, SearchConfig::default());

    let results = service.analogs_of(id(2), &Viewer::guest()).unwrap();
    assert_eq!(ids(&results), vec![1]);
    assert_eq!(results[0].relation_type, Some(RelationType::Direct));

    assert!(service.analogs_of(id(999), &Viewer::guest()).unwrap().is_empty());
}

#[test]
fn test_text_suggestions() {
    let mut filter = part(1, "OC-90", "Oil filter", 5);
    filter.description = Some("Filtration cartridge for petrol engines".to_string());
    let mut bosch = part(2, "F-026", "Fuel filter", 5);
    bosch.manufacturer = "Filtron".to_string();
    let store = store_with(&[filter, bosch], &[]);
    let service = SearchService::new(&store, &store, SearchConfig::default());

    let suggestions = service.text_suggestions("fil").unwrap();
    assert_eq!(suggestions, vec!["Oil filter", "Fuel filter", "Filtron", "Filtration"]);

    assert!(service.text_suggestions("f").unwrap().is_empty());
}

#[test]
fn test_part_number_suggestions_prefix_first() {
    let store = store_with(
        &[
            part(1, "XOC-9", "Oil filter", 5),
            part(2, "OC-90", "Oil filter", 5),
            part(3, "OC-91", "Oil filter", 0),
        ],
        &[],
    );
    let service = SearchService::new(&store, &store, SearchConfig::default());

    assert_eq!(service.part_number_suggestions("oc").unwrap(), vec!["OC-90", "XOC-9"]);
    assert!(service.part_number_suggestions("o").unwrap().is_empty());
}
