use ial_core::stats::{db_stats, DbStats};
use ial_core::store::EvidenceStore;
use pretty_assertions::assert_eq;

#[test]
fn counts_distinct_studies_domains_and_countries() {
    let store = EvidenceStore::from_json(
        r#"[
            {"card_id": "c1", "study_id": "s1", "domain": "Education", "geography": "Kenya"},
            {"card_id": "c2", "study_id": "s1", "domain": "Health", "geography": "Kenya, Uganda"},
            {"card_id": "c3", "study_id": "s2", "domain": "Agriculture", "geography": "India"},
            {"card_id": "c4", "study_id": "s2", "domain": "Education", "geography": "India"}
        ]"#,
    )
    .expect("load");

    assert_eq!(
        db_stats(&store),
        DbStats {
            total_cards: 4,
            studies: 2,
            countries: 3,
            domains: 3,
        }
    );
}

#[test]
fn geography_tokens_are_trimmed_and_blank_entries_ignored() {
    let store = EvidenceStore::from_json(
        r#"[
            {"card_id": "c1", "geography": " Kenya ,  , Uganda,"},
            {"card_id": "c2", "geography": "Uganda"},
            {"card_id": "c3", "geography": ""},
            {"card_id": "c4"}
        ]"#,
    )
    .expect("load");

    let stats = store.db_stats();
    assert_eq!(stats.total_cards, 4);
    assert_eq!(stats.countries, 2);
    // No study ids or recognised domains present.
    assert_eq!(stats.studies, 0);
    assert_eq!(stats.domains, 0);
}

#[test]
fn non_string_geography_and_study_ids_are_not_counted() {
    let store = EvidenceStore::from_json(
        r#"[
            {"card_id": "c1", "study_id": 12345, "geography": ["Kenya", "Uganda"]},
            {"card_id": "c2", "study_id": ["s1"], "geography": 7},
            {"card_id": "c3", "study_id": "s2", "geography": "India"}
        ]"#,
    )
    .expect("load");

    assert_eq!(
        store.db_stats(),
        DbStats {
            total_cards: 3,
            studies: 1,
            countries: 1,
            domains: 0,
        }
    );
}

#[test]
fn empty_store_has_zero_counts() {
    let store = EvidenceStore::from_cards(Vec::new());
    assert_eq!(
        store.db_stats(),
        DbStats {
            total_cards: 0,
            studies: 0,
            countries: 0,
            domains: 0,
        }
    );
}

#[test]
fn stats_serialize_with_camel_case_keys() {
    let stats = DbStats {
        total_cards: 14,
        studies: 11,
        countries: 11,
        domains: 4,
    };
    let v = serde_json::to_value(stats).expect("serialize");
    assert_eq!(
        v,
        serde_json::json!({"totalCards": 14, "studies": 11, "countries": 11, "domains": 4})
    );
}
