use super::*;

#[test]
fn lists_abbreviations_in_table_order() {
    let catalog = ZoneInfoCatalog::new();
    let keys = catalog.abbreviations();
    assert!(!keys.is_empty());
    assert!(keys.iter().any(|key| key == "JST"));
    assert!(keys.iter().any(|key| key == "UTC"));
    // Calling again yields the same sequence.
    assert_eq!(keys, catalog.abbreviations());
}

#[test]
fn regions_are_unique_grouping_prefixes() {
    let catalog = ZoneInfoCatalog::new();
    let regions = catalog.regions();
    for expected in ["Africa", "America", "Asia", "Europe", "Pacific"] {
        assert!(
            regions.iter().any(|region| region == expected),
            "missing region {expected}"
        );
    }
    // Slash-free identifiers such as "UTC" are not regions.
    assert!(!regions.iter().any(|region| region == "UTC"));
    let mut deduped = regions.clone();
    deduped.dedup();
    assert_eq!(regions.len(), deduped.len());
}

#[test]
fn detail_identifiers_stay_under_their_region() {
    let catalog = ZoneInfoCatalog::new();
    let details = catalog.detail_identifiers("Asia");
    assert!(details.iter().any(|id| id == "Asia/Tokyo"));
    assert!(details.iter().all(|id| id.starts_with("Asia/")));
}

#[test]
fn detail_identifiers_for_unknown_region_are_empty() {
    let catalog = ZoneInfoCatalog::new();
    assert!(catalog.detail_identifiers("Atlantis").is_empty());
}

#[test]
fn search_matches_case_insensitive_substrings() {
    let catalog = ZoneInfoCatalog::new();
    let hits = catalog.search("tokyo");
    assert!(hits.iter().any(|id| id == "Asia/Tokyo"));
    let hits_upper = catalog.search("TOKYO");
    assert_eq!(hits, hits_upper);
}

#[test]
fn search_with_empty_query_matches_nothing() {
    let catalog = ZoneInfoCatalog::new();
    assert!(catalog.search("").is_empty());
}

#[test]
fn resolves_known_abbreviation_to_canonical_identifier() {
    let catalog = ZoneInfoCatalog::new();
    let resolved = catalog.resolve_abbreviation("JST").expect("JST resolves");
    assert_eq!(resolved.identifier(), "Asia/Tokyo");
}

#[test]
fn unknown_abbreviation_resolves_to_none() {
    let catalog = ZoneInfoCatalog::new();
    assert!(catalog.resolve_abbreviation("ZZZ").is_none());
}

#[test]
fn resolves_identifier_through_the_database() {
    let catalog = ZoneInfoCatalog::new();
    let resolved = catalog
        .resolve_identifier("America/New_York")
        .expect("known identifier resolves");
    assert_eq!(resolved.identifier(), "America/New_York");
}

#[test]
fn bogus_identifier_resolves_to_none_without_panicking() {
    let catalog = ZoneInfoCatalog::new();
    assert!(catalog.resolve_identifier("Not/A_Zone").is_none());
    assert!(catalog.resolve_identifier("").is_none());
}

#[test]
fn every_table_entry_resolves_through_the_database() {
    let catalog = ZoneInfoCatalog::new();
    for key in catalog.abbreviations() {
        assert!(
            catalog.resolve_abbreviation(&key).is_some(),
            "abbreviation {key} failed to resolve"
        );
    }
}
