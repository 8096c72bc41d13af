mod common;

use common::{legacy_record, names, record, sample_index};
use elsewhere_core::{index, search, search_scored, Catalog, MAX_RESULTS};

#[test]
fn test_exact_match_outranks_family() {
    let records = sample_index();
    let results = search("wizard", &records, true);
    assert_eq!(results[0].name(), "Wizard");
    assert_eq!(results[0].category(), "Class");
    assert_eq!(results[1].name(), "Red Wizard");
}

#[test]
fn test_fire_returns_both_spells() {
    let records = sample_index();
    let results = names(&search("fire", &records, true));
    assert!(results.contains(&"Fireball".to_string()));
    assert!(results.contains(&"Fire Bolt".to_string()));
}

#[test]
fn test_multi_word_and_semantics() {
    let records = index(vec![record("Acid Splash", "Spell")]);
    assert_eq!(search("acid splash", &records, true)[0].name(), "Acid Splash");
    assert!(search("acid fire", &records, true).is_empty());
}

#[test]
fn test_empty_query_matches_nothing() {
    let records = sample_index();
    assert!(search("", &records, true).is_empty());
    assert!(search("", &[], false).is_empty());
}

#[test]
fn test_unmatched_query_is_empty() {
    let records = sample_index();
    assert!(search("xyzabc", &records, true).is_empty());
}

#[test]
fn test_current_edition_preferred() {
    // Legacy first in catalog order, so only the edition bonus can reorder them
    let records = index(vec![
        legacy_record("Fireball", "Spell"),
        record("Fireball", "Spell"),
    ]);
    let results = search("fireball", &records, true);
    assert_eq!(results.len(), 2);
    assert_ne!(results[0].edition(), Some("legacy"));
    assert_eq!(results[1].edition(), Some("legacy"));
}

#[test]
fn test_legacy_excluded_when_hidden() {
    let records = index(vec![
        legacy_record("Fireball", "Spell"),
        record("Fireball", "Spell"),
        legacy_record("Fire Bolt", "Spell"),
        legacy_record("Wizard", "Class"),
    ]);
    for query in ["fire", "fireball", "wizard", "i"] {
        let results = search(query, &records, false);
        assert!(results.iter().all(|r| !r.is_legacy()), "query {query:?}");
    }
    assert_eq!(search("fire", &records, false).len(), 1);
    assert!(search("wizard", &records, false).is_empty());
}

#[test]
fn test_category_boost_breaks_ties() {
    let records = index(vec![record("Ranger", "Monster"), record("Ranger", "Class")]);
    let scored = search_scored("ranger", &records, true);
    assert_eq!(scored[0].record.category(), "Class");
    assert_eq!(scored[0].score - scored[1].score, 10);
}

#[test]
fn test_shorter_name_wins_within_family() {
    let records = index(vec![
        record("Goblin Warband Commander", "Monster"),
        record("Goblin", "Monster"),
        record("Goblin Boss", "Monster"),
    ]);
    // "Goblin" is exact; the others tie on match score and differ by length
    assert_eq!(
        names(&search("goblin", &records, true)),
        ["Goblin", "Goblin Boss", "Goblin Warband Commander"]
    );
}

#[test]
fn test_result_cap() {
    let records = index(
        (0..100)
            .map(|i| record(&format!("Skeleton {i}"), "Monster"))
            .collect(),
    );
    assert_eq!(search("skeleton", &records, true).len(), MAX_RESULTS);
    assert_eq!(search("s", &records, true).len(), MAX_RESULTS);
}

#[test]
fn test_repeated_search_is_identical() {
    let catalog = Catalog::new(common::sample_records());
    let first: Vec<_> = catalog.search("fi", true).into_iter().cloned().collect();
    let second: Vec<_> = catalog.search("fi", true).into_iter().cloned().collect();
    assert_eq!(first, second);
}
