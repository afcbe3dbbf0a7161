use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::domain::EvidenceCard;
use crate::error::{codes, AppError};
use crate::retrieve;
use crate::stats::{self, DbStats};

const BUNDLED_CARDS_JSON: &str = include_str!("../../data/evidence_cards.json");

static BUNDLED: OnceLock<EvidenceStore> = OnceLock::new();

/// Immutable, ordered collection of evidence cards.
///
/// Store order is significant: it is the default ordering for empty queries
/// and the tie-break order for equal retrieval scores.
#[derive(Debug, Clone, Default)]
pub struct EvidenceStore {
    cards: Vec<EvidenceCard>,
    dataset_sha256: String,
}

impl EvidenceStore {
    /// The dataset compiled into the crate, parsed on first use.
    pub fn bundled() -> &'static EvidenceStore {
        BUNDLED.get_or_init(|| match Self::from_json(BUNDLED_CARDS_JSON) {
            Ok(store) => store,
            Err(e) => {
                tracing::error!(error = %e, "bundled evidence dataset failed to load; using empty store");
                EvidenceStore::default()
            }
        })
    }

    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        let root: Value = serde_json::from_str(raw).map_err(|e| {
            AppError::new(codes::DATASET_INVALID, "Evidence dataset is not valid JSON")
                .with_details(e.to_string())
        })?;
        let Value::Array(entries) = root else {
            return Err(AppError::new(
                codes::DATASET_INVALID,
                "Evidence dataset must be a JSON array of cards",
            ));
        };

        let mut cards = Vec::with_capacity(entries.len());
        for (idx, entry) in entries.into_iter().enumerate() {
            if !entry.is_object() {
                tracing::warn!(index = idx, "skipping non-object evidence dataset entry");
                continue;
            }
            // Field decoders accept any JSON value, so an object always decodes.
            let Ok(card) = serde_json::from_value::<EvidenceCard>(entry) else {
                continue;
            };
            cards.push(card);
        }

        Ok(Self::with_fingerprint(cards, sha256_hex(raw.as_bytes())))
    }

    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let raw = fs::read_to_string(path).map_err(|e| {
            AppError::new(codes::DATASET_READ_FAILED, "Failed to read evidence dataset")
                .with_details(format!("path={}; err={e}", path.display()))
        })?;
        Self::from_json(&raw)
    }

    pub fn from_cards(cards: Vec<EvidenceCard>) -> Self {
        let canonical = serde_json::to_vec(&cards).unwrap_or_default();
        Self::with_fingerprint(cards, sha256_hex(&canonical))
    }

    fn with_fingerprint(cards: Vec<EvidenceCard>, dataset_sha256: String) -> Self {
        let mut seen: HashSet<&str> = HashSet::new();
        for card in &cards {
            if !seen.insert(card.card_id.as_str()) {
                tracing::warn!(card_id = %card.card_id, "duplicate card_id in evidence dataset; lookups return the first");
            }
        }
        tracing::debug!(cards = cards.len(), sha256 = %dataset_sha256, "evidence dataset loaded");
        Self {
            cards,
            dataset_sha256,
        }
    }

    pub fn cards(&self) -> &[EvidenceCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Hex sha256 of the dataset this store was loaded from.
    pub fn dataset_sha256(&self) -> &str {
        &self.dataset_sha256
    }

    /// First card whose `card_id` equals `id`. Unknown ids are not an error.
    pub fn get_card_by_id(&self, id: &str) -> Option<&EvidenceCard> {
        self.cards.iter().find(|c| c.card_id == id)
    }

    pub fn retrieve_top_k(&self, query: &str, k: usize) -> Vec<&EvidenceCard> {
        retrieve::retrieve_top_k(self, query, k)
    }

    pub fn db_stats(&self) -> DbStats {
        stats::db_stats(self)
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}
