use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::store::EvidenceStore;

/// Headline counts for the "what's in the database" panel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DbStats {
    pub total_cards: usize,
    pub studies: usize,
    pub countries: usize,
    pub domains: usize,
}

/// Single pass over the store. Empty study ids and absent domains are not counted.
pub fn db_stats(store: &EvidenceStore) -> DbStats {
    let mut studies: HashSet<&str> = HashSet::new();
    let mut domains = HashSet::new();
    let mut countries: HashSet<&str> = HashSet::new();

    for card in store.cards() {
        if !card.study_id.is_empty() {
            studies.insert(card.study_id.as_str());
        }
        if let Some(domain) = card.domain {
            domains.insert(domain);
        }
        countries.extend(card.countries());
    }

    DbStats {
        total_cards: store.len(),
        studies: studies.len(),
        countries: countries.len(),
        domains: domains.len(),
    }
}
